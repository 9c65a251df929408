use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;

use crate::monitor::TargetKey;

/// Per-target snooze window for alerts. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct NotificationThrottle {
    snooze: TimeDelta,
    last_sent: Arc<DashMap<TargetKey, DateTime<Utc>>>,
}

impl NotificationThrottle {
    pub fn new(snooze_secs: i64) -> Self {
        Self {
            snooze: TimeDelta::try_seconds(snooze_secs).unwrap_or_else(TimeDelta::max_value),
            last_sent: Arc::new(DashMap::new()),
        }
    }

    /// True once more than the snooze window has passed since the last
    /// recorded alert. A target never notified counts as notified at the epoch.
    pub fn should_notify(&self, key: &TargetKey, now: DateTime<Utc>) -> bool {
        let last = self
            .last_sent
            .get(key)
            .map(|t| *t)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        now - last > self.snooze
    }

    pub fn record_notification(&self, key: &TargetKey, now: DateTime<Utc>) {
        self.last_sent.insert(key.clone(), now);
    }

    pub fn last_notification(&self, key: &TargetKey) -> Option<DateTime<Utc>> {
        self.last_sent.get(key).map(|t| *t)
    }
}
