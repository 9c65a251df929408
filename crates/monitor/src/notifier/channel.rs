use async_trait::async_trait;

use super::message::RenderedMessage;
use crate::monitor::TargetKey;

#[async_trait]
pub trait Channel: Send + Sync {
    fn name(&self) -> &str;
    async fn deliver(&self, target: &TargetKey, message: &RenderedMessage) -> Result<(), NotifyError>;
}

#[derive(Debug)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notify: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}
