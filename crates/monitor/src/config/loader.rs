use std::path::Path;
use std::time::Duration;

use serde_yaml::Value;

use super::schema::{RawConfig, RawNotification, RawTarget};
use super::settings::*;
use super::smtp::SmtpEndpoint;
use crate::monitor::{Target, TargetKey};

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<MonitorSettings, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<MonitorSettings, LoadError> {
    let raw: RawConfig = serde_yaml::from_str(yaml)?;
    normalize(raw)
}

fn normalize(raw: RawConfig) -> Result<MonitorSettings, LoadError> {
    let targets = targets(raw.repos.as_ref())?;

    let sleep = int_or(raw.sleep.as_ref(), DEFAULT_SLEEP_SECS);
    if sleep <= 0 {
        return Err(LoadError::Validation("sleep must be > 0".into()));
    }

    let thresholds = Thresholds {
        poll_interval: Duration::from_secs(sleep as u64),
        snooze_secs: int_or(raw.snooze.as_ref(), DEFAULT_SNOOZE_SECS),
        max_rev_delta: int_or(raw.max_revdelta.as_ref(), DEFAULT_MAX_REV_DELTA),
        max_time_delta: int_or(raw.max_timedelta.as_ref(), DEFAULT_MAX_TIME_DELTA),
    };

    Ok(MonitorSettings {
        thresholds,
        notification: raw.notif.as_ref().and_then(notification),
        dry_run: false,
        concurrency: int_or(raw.concurrency.as_ref(), DEFAULT_CONCURRENCY).max(1) as usize,
        fetch_timeout: seconds_or(raw.fetch_timeout.as_ref(), DEFAULT_FETCH_TIMEOUT_SECS),
        smtp_timeout: seconds_or(raw.smtp_timeout.as_ref(), DEFAULT_SMTP_TIMEOUT_SECS),
        targets,
    })
}

type Repos = std::collections::BTreeMap<String, std::collections::BTreeMap<String, RawTarget>>;

fn targets(repos: Option<&Repos>) -> Result<Vec<Target>, LoadError> {
    let repos = repos.ok_or_else(|| LoadError::Validation("repos must be configured".into()))?;

    let mut targets = Vec::new();
    for (repo, strata) in repos {
        for (stratum, raw) in strata {
            let key = TargetKey::new(repo, stratum);
            let url = match raw.url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => url.to_string(),
                _ => {
                    return Err(LoadError::Validation(format!("{key}: url must not be empty")));
                }
            };
            targets.push(Target {
                key,
                url,
                contacts: raw.contact.as_deref().map(split_contacts).unwrap_or_default(),
            });
        }
    }
    Ok(targets)
}

pub fn split_contacts(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

fn notification(raw: &RawNotification) -> Option<NotificationTemplate> {
    Some(NotificationTemplate {
        from: raw.from.clone()?,
        subject: raw.subject.clone()?,
        body: raw.body.clone()?,
        smtp: SmtpEndpoint::parse(raw.smtp.as_deref()?),
    })
}

fn int_or(value: Option<&Value>, default: i64) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

fn seconds_or(value: Option<&Value>, default: i64) -> Duration {
    let secs = match int_or(value, default) {
        s if s > 0 => s,
        _ => default,
    };
    Duration::from_secs(secs as u64)
}
