//! Reservation timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing of seat holds.
///
/// The payment window is the duration quoted to the claimant and drives the
/// expiry watcher; the safety margin is added on top for the store-level TTL
/// so that a confirmation never races its own lock's silent auto-expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationConfig {
    /// Seconds the claimant has to confirm payment.
    #[serde(default = "default_payment_window")]
    pub payment_window_seconds: u64,
    /// Extra seconds of store-level lock TTL beyond the payment window.
    #[serde(default = "default_safety_margin")]
    pub lock_safety_margin_seconds: u64,
}

impl ReservationConfig {
    /// The externally quoted time-to-pay window.
    pub fn payment_window(&self) -> Duration {
        Duration::from_secs(self.payment_window_seconds)
    }

    /// The store-level lock TTL (payment window plus safety margin).
    pub fn hold_ttl(&self) -> Duration {
        Duration::from_secs(self.payment_window_seconds + self.lock_safety_margin_seconds)
    }
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            payment_window_seconds: default_payment_window(),
            lock_safety_margin_seconds: default_safety_margin(),
        }
    }
}

fn default_payment_window() -> u64 {
    300
}

fn default_safety_margin() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_ttl_exceeds_payment_window() {
        let config = ReservationConfig::default();
        assert!(config.hold_ttl() > config.payment_window());
    }
}
