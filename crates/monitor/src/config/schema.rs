use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::Value;

/// The configuration file as written on disk. Scalars are kept loose here and
/// normalized by the loader so that a malformed number falls back to its
/// default instead of rejecting the whole file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawConfig {
    pub sleep: Option<Value>,
    pub snooze: Option<Value>,
    pub max_timedelta: Option<Value>,
    pub max_revdelta: Option<Value>,
    pub concurrency: Option<Value>,
    pub fetch_timeout: Option<Value>,
    pub smtp_timeout: Option<Value>,
    pub notif: Option<RawNotification>,
    pub repos: Option<BTreeMap<String, BTreeMap<String, RawTarget>>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawNotification {
    pub from: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub smtp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawTarget {
    pub url: Option<String>,
    pub contact: Option<String>,
}
