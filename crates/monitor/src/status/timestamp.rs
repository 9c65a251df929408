use chrono::{DateTime, NaiveDateTime, Utc};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const TIMESTAMP_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampError(pub String);

impl std::fmt::Display for TimestampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid timestamp {:?}", self.0)
    }
}

impl std::error::Error for TimestampError {}

/// Parses the leading `YYYY-MM-DDTHH:MM:SS` of `value` as UTC. Fractional
/// seconds and zone suffixes are ignored, not applied.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    let head = value
        .get(..TIMESTAMP_LEN)
        .ok_or_else(|| TimestampError(value.to_string()))?;
    NaiveDateTime::parse_from_str(head, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| TimestampError(value.to_string()))
}
