//! CineSeat server — cinema seat reservation backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use cineseat_core::config::AppConfig;
use cineseat_core::error::AppError;
use cineseat_core::traits::{AuditStore, BookingStore, EventBus, SeatLockStore};

#[tokio::main]
async fn main() {
    let env = std::env::var("CINESEAT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting CineSeat v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = cineseat_database::connection::create_pool(&config.database).await?;
    cineseat_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Lock store ───────────────────────────────────────
    tracing::info!("Initializing lock store (provider: {})...", config.lock.provider);
    let locks: Arc<dyn SeatLockStore> =
        Arc::new(cineseat_lock::LockManager::new(&config.lock).await?);

    // ── Step 3: Event bus ────────────────────────────────────────
    tracing::info!("Initializing event bus (provider: {})...", config.bus.provider);
    let bus: Arc<dyn EventBus> = Arc::new(cineseat_bus::BusManager::new(&config.bus).await?);

    // ── Step 4: Repositories ─────────────────────────────────────
    let bookings: Arc<dyn BookingStore> =
        Arc::new(cineseat_database::PgBookingStore::new(db_pool.clone()));
    let audit_store: Arc<dyn AuditStore> =
        Arc::new(cineseat_database::PgAuditStore::new(db_pool.clone()));

    // ── Step 5: Observer registry ────────────────────────────────
    let observers = Arc::new(cineseat_realtime::ObserverRegistry::new(&config.realtime));

    // ── Step 6: Services ─────────────────────────────────────────
    let reservations = Arc::new(cineseat_service::ReservationService::new(
        Arc::clone(&locks),
        Arc::clone(&bookings),
        Arc::clone(&bus),
        Arc::clone(&observers),
        config.reservation.clone(),
    ));
    let audit = Arc::new(cineseat_service::AuditQueryService::new(Arc::clone(
        &audit_store,
    )));

    // ── Step 7: Audit recorder ───────────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let recorder =
        cineseat_bus::AuditRecorder::new(Arc::clone(&bus), Arc::clone(&audit_store));
    let recorder_handle = tokio::spawn(recorder.run(shutdown_rx.clone()));

    // ── Step 8: Build and start HTTP server ──────────────────────
    let app_state = cineseat_api::state::AppState {
        config: Arc::new(config.clone()),
        reservations,
        audit,
        observers: Arc::clone(&observers),
        locks,
    };

    let app = cineseat_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CineSeat server listening on {addr}");

    // ── Step 9: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 10: Wait for background tasks ───────────────────────
    observers.close_all();
    let _ = tokio::time::timeout(std::time::Duration::from_secs(10), recorder_handle).await;

    tracing::info!("CineSeat server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
