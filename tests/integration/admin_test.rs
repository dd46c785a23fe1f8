//! Admin dashboard authorization and audit filtering.

use http::StatusCode;

use cineseat_core::events::AuditEvent;
use cineseat_core::traits::AuditStore;
use cineseat_core::types::{SeatId, UserId};

use super::helpers::{ADMIN_EMAIL, TestApp, get};

async fn seed_audit_trail(app: &TestApp) {
    app.audit
        .append(&AuditEvent::lock_timeout(
            SeatId::new("A1"),
            UserId::new("alice"),
        ))
        .await
        .unwrap();
    app.audit
        .append(&AuditEvent::booking_success(
            SeatId::new("B2"),
            UserId::new("bob"),
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn dashboard_requires_admin_role() {
    let app = TestApp::new();

    let (status, _) = app.send(get("/admin/dashboard", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send(get("/admin/dashboard", Some("alice"), Some("alice@example.com")))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "FORBIDDEN");
}

#[tokio::test]
async fn dashboard_returns_full_trail_for_admin() {
    let app = TestApp::new();
    seed_audit_trail(&app).await;

    let (status, body) = app
        .send(get("/admin/dashboard", Some("root"), Some(ADMIN_EMAIL)))
        .await;
    assert_eq!(status, StatusCode::OK);

    let logs = body["audit_logs"].as_array().expect("audit logs");
    assert_eq!(logs.len(), 2);
    // Newest first.
    assert_eq!(logs[0]["event"], "BOOKING_SUCCESS");
    assert_eq!(logs[1]["event"], "LOCK_TIMEOUT");
}

#[tokio::test]
async fn dashboard_filters_by_event_and_user() {
    let app = TestApp::new();
    seed_audit_trail(&app).await;

    let (status, body) = app
        .send(get(
            "/admin/dashboard?event=LOCK_TIMEOUT",
            Some("root"),
            Some(ADMIN_EMAIL),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["audit_logs"].as_array().expect("audit logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["seat_id"], "A1");

    let (status, body) = app
        .send(get(
            "/admin/dashboard?user_id=bob",
            Some("root"),
            Some(ADMIN_EMAIL),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let logs = body["audit_logs"].as_array().expect("audit logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["event"], "BOOKING_SUCCESS");
}

#[tokio::test]
async fn unknown_event_filter_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(get(
            "/admin/dashboard?event=NOT_A_THING",
            Some("root"),
            Some(ADMIN_EMAIL),
        ))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}
