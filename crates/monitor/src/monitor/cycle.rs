use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};

use super::target::{Target, TargetKey};
use crate::alert::{evaluate, AlertContext, Condition, Evaluation, NotificationThrottle};
use crate::config::Thresholds;
use crate::notifier::Notifier;
use crate::status::{StatusDocument, StatusSource, HEALTHY_STATUS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub outcomes: Vec<(TargetKey, Condition)>,
}

impl CycleReport {
    pub fn count(&self, condition: Condition) -> usize {
        self.outcomes.iter().filter(|(_, c)| *c == condition).count()
    }

    pub fn condition_of(&self, key: &TargetKey) -> Option<Condition> {
        self.outcomes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
    }
}

/// One pass over every configured target. Never fails: per-target problems
/// become log lines and an `Unavailable` outcome.
pub struct Monitor {
    targets: Vec<Target>,
    thresholds: Thresholds,
    source: Arc<dyn StatusSource>,
    notifier: Notifier,
    throttle: NotificationThrottle,
    concurrency: usize,
}

impl Monitor {
    pub fn new(
        targets: Vec<Target>,
        thresholds: Thresholds,
        source: Arc<dyn StatusSource>,
        notifier: Notifier,
    ) -> Self {
        Self {
            targets,
            throttle: NotificationThrottle::new(thresholds.snooze_secs),
            thresholds,
            source,
            notifier,
            concurrency: 1,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn throttle(&self) -> &NotificationThrottle {
        &self.throttle
    }

    pub async fn poll_all(&self) -> CycleReport {
        let outcomes: Vec<_> = stream::iter(&self.targets)
            .map(|target| self.poll_keyed(target))
            .buffer_unordered(self.concurrency)
            .collect()
            .await;
        CycleReport { outcomes }
    }

    async fn poll_keyed(&self, target: &Target) -> (TargetKey, Condition) {
        let condition = self.poll_target(target, Utc::now()).await;
        (target.key.clone(), condition)
    }

    /// Polls one target. `now` is used for the time delta and for the
    /// snooze window alike.
    pub async fn poll_target(&self, target: &Target, now: DateTime<Utc>) -> Condition {
        let key = &target.key;

        let doc = match self.source.fetch(&target.url).await {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(key = %key, error = %e, "{key}: cannot get monitoring info: {e}");
                return Condition::Unavailable;
            }
        };

        if !doc.is_healthy() {
            tracing::error!(
                key = %key,
                status = %doc.status,
                "{key}: cannot get monitoring info: status is {:?}, expected {HEALTHY_STATUS:?}",
                doc.status
            );
            return Condition::Unavailable;
        }

        let eval = evaluate(&doc, &self.thresholds, now);
        let Evaluation {
            condition,
            time_delta,
            rev_delta,
        } = eval;

        match condition {
            Condition::Ok => {
                tracing::info!(key = %key, condition = "ok", "{key}: OK");
            }
            Condition::Syncing => {
                tracing::info!(
                    key = %key,
                    condition = "syncing",
                    time_delta,
                    rev_delta,
                    "{key}: syncing: {time_delta} seconds, {rev_delta} revisions behind \
                     (stratum0 updated {time_delta} seconds ago)"
                );
            }
            Condition::Error => {
                tracing::warn!(
                    key = %key,
                    condition = "error",
                    time_delta,
                    rev_delta,
                    "{key}: error: {time_delta} seconds, {rev_delta} revisions behind \
                     (stratum0 updated {time_delta} seconds ago)"
                );
                self.alert(target, &doc, &eval, now).await;
            }
            Condition::Unavailable => {}
        }

        condition
    }

    async fn alert(&self, target: &Target, doc: &StatusDocument, eval: &Evaluation, now: DateTime<Utc>) {
        if !self.throttle.should_notify(&target.key, now) {
            tracing::debug!(key = %target.key, "{}: notification snoozed", target.key);
            return;
        }

        let ctx = AlertContext::new(target, doc, eval);
        let outcome = self.notifier.notify(&target.key, &target.contacts, &ctx).await;
        if outcome.should_record() {
            self.throttle.record_notification(&target.key, now);
        }
    }
}
