//! Reservation coordinator: orchestrates lock acquisition, the expiry
//! watcher, confirmation, persistence, and the broadcast/audit side effects
//! of every transition.
//!
//! Correctness rests entirely on the lock store's two atomic primitives:
//! `try_acquire` picks exactly one winner per seat per window, and
//! `release_if_held_by` makes both the expiry watcher and the confirmation
//! path idempotent against each other. No coordinator-side locking exists.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use cineseat_core::config::reservation::ReservationConfig;
use cineseat_core::error::AppError;
use cineseat_core::events::AuditEvent;
use cineseat_core::result::AppResult;
use cineseat_core::traits::{BookingStore, EventBus, SeatLockStore};
use cineseat_core::types::{NewBooking, SeatId, SeatStatus, SeatView, UserId};
use cineseat_realtime::{ObserverRegistry, SeatUpdate};

/// Result of an accepted claim or confirmation.
#[derive(Debug, Clone)]
pub struct ReservationOutcome {
    /// Human-readable description for the caller.
    pub message: String,
}

/// The coordinator for seat claims and confirmations.
#[derive(Debug, Clone)]
pub struct ReservationService {
    locks: Arc<dyn SeatLockStore>,
    bookings: Arc<dyn BookingStore>,
    bus: Arc<dyn EventBus>,
    observers: Arc<ObserverRegistry>,
    config: ReservationConfig,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(
        locks: Arc<dyn SeatLockStore>,
        bookings: Arc<dyn BookingStore>,
        bus: Arc<dyn EventBus>,
        observers: Arc<ObserverRegistry>,
        config: ReservationConfig,
    ) -> Self {
        Self {
            locks,
            bookings,
            bus,
            observers,
            config,
        }
    }

    /// Attempt to claim a seat for `user`.
    ///
    /// Exactly one of any number of concurrent callers for the same seat
    /// succeeds; the rest receive a conflict. A seat with a booking is
    /// terminal and is rejected before the store is consulted.
    pub async fn claim(&self, seat: &SeatId, user: &UserId) -> AppResult<ReservationOutcome> {
        if self.bookings.exists_for_seat(seat).await? {
            debug!(seat_id = %seat, user_id = %user, "Claim rejected: seat already booked");
            return Err(AppError::conflict("This seat has already been booked"));
        }

        let acquired = self
            .locks
            .try_acquire(seat, user, self.config.hold_ttl())
            .await?;

        if !acquired {
            debug!(seat_id = %seat, user_id = %user, "Claim lost: seat held by another user");
            return Err(AppError::conflict(
                "This seat is currently being processed by another user",
            ));
        }

        info!(seat_id = %seat, user_id = %user, "Seat locked");
        self.observers
            .broadcast(&SeatUpdate::new(seat.clone(), SeatStatus::Locked));
        self.spawn_expiry_watcher(seat.clone(), user.clone());

        let minutes = self.config.payment_window_seconds.div_ceil(60);
        Ok(ReservationOutcome {
            message: format!("Seat locked. Complete payment within {minutes} minutes."),
        })
    }

    /// Convert a held lock into a durable booking.
    pub async fn confirm(&self, seat: &SeatId, user: &UserId) -> AppResult<ReservationOutcome> {
        match self.locks.holder(seat).await? {
            Some(holder) if holder == *user => {}
            _ => {
                debug!(seat_id = %seat, user_id = %user, "Confirm rejected: no matching hold");
                return Err(AppError::validation(
                    "Session expired or you are not the holder of this seat",
                ));
            }
        }

        // A persistence failure propagates here with the lock intact: the
        // caller may retry confirmation until the hold TTL elapses.
        let booking = self
            .bookings
            .insert(NewBooking {
                seat_id: seat.clone(),
                user_id: user.clone(),
                created_at: Utc::now(),
            })
            .await?;

        if let Err(e) = self.locks.release_if_held_by(seat, user).await {
            // The booking is durable; the leftover lock resolves via TTL and
            // the watcher's release is a no-op by then.
            warn!(seat_id = %seat, error = %e, "Failed to release lock after booking");
        }

        info!(seat_id = %seat, user_id = %user, booking_id = %booking.id, "Seat booked");
        self.observers
            .broadcast(&SeatUpdate::new(seat.clone(), SeatStatus::Booked));
        self.publish_audit(AuditEvent::booking_success(seat.clone(), user.clone()))
            .await;

        Ok(ReservationOutcome {
            message: "Booking confirmed.".to_string(),
        })
    }

    /// Compute the derived status of every known seat.
    ///
    /// Point-in-time snapshot; precedence is booked > locked > available.
    /// Seats with neither a booking nor a lock are simply absent.
    pub async fn list_seats(&self) -> AppResult<Vec<SeatView>> {
        let bookings = self.bookings.list_all().await?;
        let booked: HashSet<String> = bookings
            .iter()
            .map(|b| b.seat_id.as_str().to_string())
            .collect();

        let mut views: Vec<SeatView> = bookings.iter().map(SeatView::from_booking).collect();

        for lock in self.locks.active_locks().await? {
            if !booked.contains(lock.seat_id.as_str()) {
                views.push(SeatView::locked(lock.seat_id));
            }
        }

        Ok(views)
    }

    /// Schedule the deferred reconciliation task for a successful claim.
    ///
    /// After the payment window the task attempts the atomic
    /// compare-and-delete; only the call that actually removed the lock
    /// emits the `available` broadcast and the timeout audit event, so
    /// racing a confirmation (or a second watcher) is harmless.
    fn spawn_expiry_watcher(&self, seat: SeatId, holder: UserId) {
        let locks = Arc::clone(&self.locks);
        let observers = Arc::clone(&self.observers);
        let bus = Arc::clone(&self.bus);
        let window = self.config.payment_window();

        tokio::spawn(async move {
            tokio::time::sleep(window).await;

            match locks.release_if_held_by(&seat, &holder).await {
                Ok(true) => {
                    info!(seat_id = %seat, user_id = %holder, "Hold expired; seat released");
                    observers.broadcast(&SeatUpdate::new(seat.clone(), SeatStatus::Available));
                    publish_audit_on(&bus, AuditEvent::lock_timeout(seat, holder)).await;
                }
                Ok(false) => {
                    debug!(seat_id = %seat, "Expiry watcher: hold already resolved");
                }
                Err(e) => {
                    // The store-level TTL still reclaims the key; only the
                    // broadcast and audit event for this timeout are lost.
                    error!(seat_id = %seat, error = %e, "Expiry watcher failed to release hold");
                }
            }
        });
    }

    async fn publish_audit(&self, event: AuditEvent) {
        publish_audit_on(&self.bus, event).await;
    }
}

/// Fire-and-forget audit publication: a bus failure is logged and never
/// fails the originating operation.
async fn publish_audit_on(bus: &Arc<dyn EventBus>, event: AuditEvent) {
    match serde_json::to_string(&event) {
        Ok(payload) => {
            if let Err(e) = bus.publish(&payload).await {
                warn!(error = %e, event = %event.event, "Audit publish failed; event dropped");
            }
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize audit event");
        }
    }
}
