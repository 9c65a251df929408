mod document;
mod fetcher;
mod timestamp;

pub use document::{DocumentError, ReplicaState, StatusDocument, HEALTHY_STATUS};
pub use fetcher::{FetchError, HttpFetcher, StatusSource};
pub use timestamp::{parse_timestamp, TimestampError, TIMESTAMP_FORMAT};
