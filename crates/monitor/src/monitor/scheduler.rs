use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::cycle::Monitor;
use crate::alert::Condition;

pub struct MonitorLoop {
    pub interval: Duration,
    pub monitor: Arc<Monitor>,
}

impl MonitorLoop {
    /// Polls every target, sleeps `interval`, repeats. Returns only once
    /// `shutdown` resolves; an in-flight cycle is dropped at that point.
    pub async fn run_until<F>(self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                report = self.monitor.poll_all() => {
                    tracing::debug!(
                        ok = report.count(Condition::Ok),
                        syncing = report.count(Condition::Syncing),
                        error = report.count(Condition::Error),
                        unavailable = report.count(Condition::Unavailable),
                        "cycle complete"
                    );
                }
                _ = &mut shutdown => break,
            }

            tracing::info!(sleep_s = self.interval.as_secs(), "sleeping {} seconds", self.interval.as_secs());
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = &mut shutdown => break,
            }
        }
        tracing::info!("monitor loop stopped");
    }
}
