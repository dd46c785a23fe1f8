//! Identity gateway configuration.

use serde::{Deserialize, Serialize};

/// Settings for the trusted identity headers.
///
/// CineSeat does not authenticate callers; the gateway in front of it does.
/// The only identity decision made here is the admin role grant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Email address granted the admin role when presented in
    /// `X-User-Email`. No admin access is granted when unset.
    #[serde(default)]
    pub admin_email: Option<String>,
}
