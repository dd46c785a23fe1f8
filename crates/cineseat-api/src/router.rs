//! Route definitions for the CineSeat HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use cineseat_core::config::app::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        // Public routes
        .route("/seats", get(handlers::seats::list_seats))
        .route("/ws", get(handlers::ws::ws_upgrade))
        .route("/health", get(handlers::health::health))
        // User routes (identity required)
        .route("/lock", post(handlers::reservation::lock_seat))
        .route("/confirm", post(handlers::reservation::confirm_booking))
        // Admin routes
        .route("/admin/dashboard", get(handlers::admin::dashboard))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use http::{HeaderValue, Method, header::HeaderName};
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    let any_origin = config.allowed_origins.iter().any(|o| o == "*");
    if any_origin {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);

        // Credentials are incompatible with a wildcard origin.
        if config.allow_credentials {
            cors = cors.allow_credentials(true);
        }
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.iter().any(|h| h == "*") {
        if !config.allow_credentials || any_origin {
            cors = cors.allow_headers(Any);
        }
    } else {
        let headers: Vec<HeaderName> = config
            .allowed_headers
            .iter()
            .filter_map(|h| h.parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
