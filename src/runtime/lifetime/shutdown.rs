use std::time::Duration;

use tokio::signal;
use tracing::{error, info, warn};

use crate::runtime::BackgroundTasks;

/// 等待 Ctrl+C（Unix 下也包括 SIGTERM）
pub async fn listen_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, flushing pending writes...");
}

/// 等待后台写入完成，超时后放弃
pub async fn drain_background_tasks(tasks: &BackgroundTasks, timeout_secs: u64) {
    let pending = tasks.pending();
    if pending == 0 {
        info!("No pending counter writes");
        return;
    }

    info!("Waiting for {} pending counter write(s)", pending);
    if tasks.drain(Duration::from_secs(timeout_secs)).await {
        info!("All pending counter writes completed");
    } else {
        error!(
            "Shutdown timed out after {} seconds, {} counter write(s) dropped",
            timeout_secs,
            tasks.pending()
        );
    }
}
