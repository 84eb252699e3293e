//! Server mode
//!
//! This module contains the HTTP server startup logic.

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::api::middleware::TimingMiddleware;
use crate::api::services::badge_routes;
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// 1. Builds the store backend and counter
/// 2. Starts the HTTP server
/// 3. On shutdown signal, stops the server and drains pending counter writes
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let tasks = startup.tasks.clone();
    let counter = web::Data::new(startup.counter);
    let workers = config.server.workers.clamp(1, 32);
    info!(
        "Using {} worker(s), store backend: {}",
        workers,
        startup.store.backend_name()
    );

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware)
            .app_data(counter.clone())
            .service(badge_routes())
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .workers(workers)
    .disable_signals()
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    warn!("Starting server at http://{}", bind_address);
    let handle = server.handle();

    // Wait for server or shutdown signal
    let outcome = tokio::select! {
        res = server => res.context("HTTP server exited with error"),
        _ = lifetime::shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            Ok(())
        }
    };

    lifetime::shutdown::drain_background_tasks(&tasks, config.server.shutdown_timeout_secs).await;
    warn!("Graceful shutdown completed");

    outcome
}
