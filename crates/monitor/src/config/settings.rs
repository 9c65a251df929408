use std::time::Duration;

use super::smtp::SmtpEndpoint;
use crate::monitor::Target;

pub const DEFAULT_SLEEP_SECS: i64 = 120;
pub const DEFAULT_SNOOZE_SECS: i64 = 3600;
pub const DEFAULT_MAX_TIME_DELTA: i64 = 7200;
pub const DEFAULT_MAX_REV_DELTA: i64 = 7200;
pub const DEFAULT_CONCURRENCY: i64 = 1;
pub const DEFAULT_FETCH_TIMEOUT_SECS: i64 = 30;
pub const DEFAULT_SMTP_TIMEOUT_SECS: i64 = 30;

/// Process-wide limits, read-only once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub poll_interval: Duration,
    pub snooze_secs: i64,
    pub max_rev_delta: i64,
    pub max_time_delta: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_SLEEP_SECS as u64),
            snooze_secs: DEFAULT_SNOOZE_SECS,
            max_rev_delta: DEFAULT_MAX_REV_DELTA,
            max_time_delta: DEFAULT_MAX_TIME_DELTA,
        }
    }
}

/// Present only when `from`, `subject`, `body` and `smtp` are all configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub from: String,
    pub subject: String,
    pub body: String,
    pub smtp: SmtpEndpoint,
}

#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub thresholds: Thresholds,
    pub notification: Option<NotificationTemplate>,
    pub dry_run: bool,
    pub concurrency: usize,
    pub fetch_timeout: Duration,
    pub smtp_timeout: Duration,
    pub targets: Vec<Target>,
}
