use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::runtime::BackgroundTasks;
use crate::services::VisitCounter;
use crate::storage::{KvStore, StoreFactory};

pub struct StartupContext {
    pub store: Arc<dyn KvStore>,
    pub tasks: BackgroundTasks,
    pub counter: VisitCounter,
}

/// 准备服务器启动的上下文：存储后端、后台任务和计数器
///
/// Must run on the runtime that outlives the HTTP workers, since detached
/// store writes are spawned onto it.
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = Instant::now();
    debug!("Starting pre-startup processing...");

    let store = StoreFactory::create(&config.store)
        .await
        .context("Failed to create store backend")?;

    let tasks = BackgroundTasks::new();
    let counter = VisitCounter::new(Arc::clone(&store), tasks.clone());

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        store,
        tasks,
        counter,
    })
}
