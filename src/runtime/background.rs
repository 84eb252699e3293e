//! Detached background tasks
//!
//! Store writes on the increment path are not awaited by the request. They
//! are handed to [`BackgroundTasks`], which spawns them on the runtime it was
//! created on and keeps an in-flight count so shutdown can wait for them
//! (up to a deadline) before the process exits.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Notify;
use tracing::{debug, trace, warn};

struct Inflight {
    count: AtomicUsize,
    idle: Notify,
}

/// 任务结束（包括 panic）时递减计数
struct InflightGuard {
    inflight: Arc<Inflight>,
}

impl Drop for InflightGuard {
    fn drop(&mut self) {
        if self.inflight.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.inflight.idle.notify_waiters();
        }
    }
}

#[derive(Clone)]
pub struct BackgroundTasks {
    handle: Handle,
    inflight: Arc<Inflight>,
}

impl Default for BackgroundTasks {
    fn default() -> Self {
        Self::new()
    }
}

impl BackgroundTasks {
    /// Bind to the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn new() -> Self {
        Self::with_handle(Handle::current())
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle,
            inflight: Arc::new(Inflight {
                count: AtomicUsize::new(0),
                idle: Notify::new(),
            }),
        }
    }

    /// Spawn `fut` without waiting for it.
    pub fn spawn<F>(&self, name: &'static str, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.inflight.count.fetch_add(1, Ordering::AcqRel);
        let guard = InflightGuard {
            inflight: Arc::clone(&self.inflight),
        };

        trace!("BackgroundTasks: spawning {}", name);
        self.handle.spawn(async move {
            let _guard = guard;
            fut.await;
        });
    }

    /// 当前未完成的后台任务数
    pub fn pending(&self) -> usize {
        self.inflight.count.load(Ordering::Acquire)
    }

    /// Wait until every spawned task has finished or `deadline` elapses.
    ///
    /// Returns `true` when all tasks finished in time.
    pub async fn drain(&self, deadline: Duration) -> bool {
        let wait_idle = async {
            loop {
                let notified = self.inflight.idle.notified();
                tokio::pin!(notified);
                // 先注册再检查计数，避免错过唤醒
                notified.as_mut().enable();
                if self.pending() == 0 {
                    return;
                }
                notified.await;
            }
        };

        match tokio::time::timeout(deadline, wait_idle).await {
            Ok(()) => {
                debug!("BackgroundTasks: all tasks drained");
                true
            }
            Err(_) => {
                warn!(
                    "BackgroundTasks: {} task(s) still pending after {:?}",
                    self.pending(),
                    deadline
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    #[tokio::test]
    async fn test_drain_with_nothing_pending() {
        let tasks = BackgroundTasks::new();
        assert_eq!(tasks.pending(), 0);
        assert!(tasks.drain(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn test_drain_waits_for_spawned_task() {
        let tasks = BackgroundTasks::new();
        let done = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&done);
        tasks.spawn("test", async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            flag.store(true, Ordering::SeqCst);
        });

        assert!(tasks.drain(Duration::from_secs(5)).await);
        assert!(done.load(Ordering::SeqCst));
        assert_eq!(tasks.pending(), 0);
    }

    #[tokio::test]
    async fn test_drain_times_out() {
        let tasks = BackgroundTasks::new();
        tasks.spawn("slow", async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        assert!(!tasks.drain(Duration::from_millis(20)).await);
        assert_eq!(tasks.pending(), 1);
    }

    #[tokio::test]
    async fn test_panicking_task_is_not_counted_forever() {
        let tasks = BackgroundTasks::new();
        tasks.spawn("panics", async {
            panic!("boom");
        });

        assert!(tasks.drain(Duration::from_secs(5)).await);
    }
}
