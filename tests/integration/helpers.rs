//! Shared test helpers for integration tests.
//!
//! Builds the full router over in-memory backends: no Postgres or Redis is
//! required to exercise the HTTP surface end to end.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use cineseat_core::config::AppConfig;
use cineseat_core::error::AppError;
use cineseat_core::events::{AuditEvent, AuditFilter};
use cineseat_core::result::AppResult;
use cineseat_core::traits::{AuditStore, BookingStore};
use cineseat_core::types::{Booking, NewBooking, SeatId, SeatStatus};

/// Email granted the admin role in the test configuration.
pub const ADMIN_EMAIL: &str = "admin@cineseat.test";

/// In-memory booking store double.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: NewBooking) -> AppResult<Booking> {
        let mut bookings = self.bookings.lock().unwrap();
        if bookings.iter().any(|b| b.seat_id == booking.seat_id) {
            return Err(AppError::conflict(format!(
                "Seat '{}' has already been booked",
                booking.seat_id
            )));
        }
        let stored = Booking {
            id: Uuid::new_v4(),
            seat_id: booking.seat_id,
            user_id: booking.user_id,
            status: SeatStatus::Booked,
            created_at: booking.created_at,
        };
        bookings.push(stored.clone());
        Ok(stored)
    }

    async fn exists_for_seat(&self, seat: &SeatId) -> AppResult<bool> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.seat_id == *seat))
    }

    async fn list_all(&self) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.lock().unwrap().clone())
    }
}

/// In-memory audit store double with filter support.
#[derive(Debug, Default)]
pub struct MemoryAuditStore {
    events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn append(&self, event: &AuditEvent) -> AppResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }

    async fn search(&self, filter: &AuditFilter) -> AppResult<Vec<AuditEvent>> {
        let events = self.events.lock().unwrap();
        let mut matching: Vec<AuditEvent> = events
            .iter()
            .filter(|e| {
                filter
                    .user_id
                    .as_ref()
                    .is_none_or(|user| e.user_id == *user)
                    && filter.event.is_none_or(|kind| e.event == kind)
            })
            .cloned()
            .collect();
        matching.reverse();
        Ok(matching)
    }
}

/// Test application context.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
    /// Booking store for direct inspection and seeding.
    pub bookings: Arc<MemoryBookingStore>,
    /// Audit store for direct inspection and seeding.
    pub audit: Arc<MemoryAuditStore>,
}

impl TestApp {
    /// Create a new test application over in-memory backends.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.admin_email = Some(ADMIN_EMAIL.to_string());

        let locks = Arc::new(cineseat_lock::MemoryLockStore::new());
        let bookings = Arc::new(MemoryBookingStore::default());
        let audit = Arc::new(MemoryAuditStore::default());
        let bus = Arc::new(cineseat_bus::MemoryEventBus::new(config.bus.buffer_size));
        let observers = Arc::new(cineseat_realtime::ObserverRegistry::new(&config.realtime));

        let reservations = Arc::new(cineseat_service::ReservationService::new(
            locks.clone(),
            bookings.clone(),
            bus,
            observers.clone(),
            config.reservation.clone(),
        ));
        let audit_service = Arc::new(cineseat_service::AuditQueryService::new(
            audit.clone() as Arc<dyn AuditStore>
        ));

        let state = cineseat_api::state::AppState {
            config: Arc::new(config),
            reservations,
            audit: audit_service,
            observers,
            locks,
        };

        Self {
            router: cineseat_api::router::build_router(state),
            bookings,
            audit,
        }
    }

    /// Send a request and decode the JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request completes");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };
        (status, json)
    }
}

/// Build a GET request with optional identity headers.
pub fn get(uri: &str, user_id: Option<&str>, email: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-ID", user_id);
    }
    if let Some(email) = email {
        builder = builder.header("X-User-Email", email);
    }
    builder.body(Body::empty()).expect("request builds")
}

/// Build a POST request with a JSON body and optional identity headers.
pub fn post_json(uri: &str, user_id: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(user_id) = user_id {
        builder = builder.header("X-User-ID", user_id);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request builds")
}
