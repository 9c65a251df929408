use chrono::{DateTime, Utc};

use crate::config::Thresholds;
use crate::status::StatusDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Ok,
    Syncing,
    Error,
    /// The status endpoint could not be polled or its answer was unusable.
    Unavailable,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Syncing => "syncing",
            Self::Error => "error",
            Self::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub condition: Condition,
    /// Seconds since stratum0 last published.
    pub time_delta: i64,
    /// Revisions stratum1 is behind stratum0; negative if it is ahead.
    /// Saturates at the `i64` bounds.
    pub rev_delta: i64,
}

pub fn evaluate(doc: &StatusDocument, thresholds: &Thresholds, now: DateTime<Utc>) -> Evaluation {
    let time_delta = (now - doc.published_at).num_seconds();
    let rev_delta = doc.stratum0.revision.saturating_sub(doc.stratum1.revision);
    Evaluation {
        condition: classify(rev_delta, time_delta, thresholds),
        time_delta,
        rev_delta,
    }
}

pub fn classify(rev_delta: i64, time_delta: i64, thresholds: &Thresholds) -> Condition {
    if rev_delta == 0 {
        Condition::Ok
    } else if rev_delta <= thresholds.max_rev_delta && time_delta <= thresholds.max_time_delta {
        Condition::Syncing
    } else {
        Condition::Error
    }
}
