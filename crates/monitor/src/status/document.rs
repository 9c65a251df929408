use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::timestamp::{parse_timestamp, TimestampError};

/// Value of `status` for a replica pair whose report can be trusted.
pub const HEALTHY_STATUS: &str = "ok";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaState {
    pub last_modified: String,
    pub revision: i64,
}

/// One poll of a replication status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDocument {
    pub status: String,
    pub stratum0: ReplicaState,
    pub stratum1: ReplicaState,
    /// `stratum0.last_modified` truncated to whole seconds.
    pub published_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum DocumentError {
    Json(serde_json::Error),
    MissingField(&'static str),
    Timestamp {
        field: &'static str,
        source: TimestampError,
    },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(e) => write!(f, "malformed document: {e}"),
            Self::MissingField(path) => write!(f, "missing field {path:?}"),
            Self::Timestamp { field, source } => write!(f, "{field}: {source}"),
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Deserialize)]
struct RawDocument {
    status: Option<String>,
    stratum0: Option<RawReplica>,
    stratum1: Option<RawReplica>,
}

#[derive(Deserialize)]
struct RawReplica {
    last_modified: Option<String>,
    revision: Option<i64>,
}

impl StatusDocument {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_slice(bytes)?;

        let status = raw.status.ok_or(DocumentError::MissingField("status"))?;
        let stratum0 = replica(raw.stratum0, "stratum0", "stratum0.last_modified", "stratum0.revision")?;
        let stratum1 = replica(raw.stratum1, "stratum1", "stratum1.last_modified", "stratum1.revision")?;

        let published_at =
            parse_timestamp(&stratum0.last_modified).map_err(|source| DocumentError::Timestamp {
                field: "stratum0.last_modified",
                source,
            })?;

        Ok(Self {
            status,
            stratum0,
            stratum1,
            published_at,
        })
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HEALTHY_STATUS
    }
}

fn replica(
    raw: Option<RawReplica>,
    name: &'static str,
    modified_path: &'static str,
    revision_path: &'static str,
) -> Result<ReplicaState, DocumentError> {
    let raw = raw.ok_or(DocumentError::MissingField(name))?;
    Ok(ReplicaState {
        last_modified: raw
            .last_modified
            .ok_or(DocumentError::MissingField(modified_path))?,
        revision: raw.revision.ok_or(DocumentError::MissingField(revision_path))?,
    })
}
