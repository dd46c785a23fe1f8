//! Claim/confirm/listing flows over the HTTP surface.

use http::StatusCode;
use serde_json::json;

use super::helpers::{TestApp, get, post_json};

#[tokio::test]
async fn claim_then_confirm_over_http() {
    let app = TestApp::new();

    let (status, body) = app
        .send(post_json("/lock", Some("alice"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);

    let (status, seats) = app.send(get("/seats", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let seats = seats.as_array().expect("seat list");
    assert_eq!(seats.len(), 1);
    assert_eq!(seats[0]["seat_id"], "A1");
    assert_eq!(seats[0]["status"], "locked");

    let (status, body) = app
        .send(post_json("/confirm", Some("alice"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["accepted"], true);

    let (_, seats) = app.send(get("/seats", None, None)).await;
    let seats = seats.as_array().expect("seat list");
    assert_eq!(seats[0]["status"], "booked");
    assert_eq!(seats[0]["user_id"], "alice");
}

#[tokio::test]
async fn contention_is_a_conflict() {
    let app = TestApp::new();

    let (status, _) = app
        .send(post_json("/lock", Some("alice"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app
        .send(post_json("/lock", Some("bob"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert!(
        body["message"]
            .as_str()
            .expect("message present")
            .contains("another user")
    );
}

#[tokio::test]
async fn booked_seat_cannot_be_reclaimed() {
    let app = TestApp::new();

    app.send(post_json("/lock", Some("alice"), &json!({"seat_id": "A1"})))
        .await;
    app.send(post_json("/confirm", Some("alice"), &json!({"seat_id": "A1"})))
        .await;

    let (status, body) = app
        .send(post_json("/lock", Some("bob"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(
        body["message"]
            .as_str()
            .expect("message present")
            .contains("already been booked")
    );
}

#[tokio::test]
async fn missing_identity_is_unauthorized() {
    let app = TestApp::new();

    let (status, body) = app
        .send(post_json("/lock", None, &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn blank_seat_id_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(post_json("/lock", Some("alice"), &json!({"seat_id": ""})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn confirm_without_hold_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(post_json("/confirm", Some("carol"), &json!({"seat_id": "A1"})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .expect("message present")
            .contains("expired")
    );
}

#[tokio::test]
async fn health_reports_lock_store() {
    let app = TestApp::new();

    let (status, body) = app.send(get("/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["lock_store"], "connected");
    assert_eq!(body["observers"], 0);
}
