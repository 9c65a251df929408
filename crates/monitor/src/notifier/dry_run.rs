use async_trait::async_trait;

use super::channel::{Channel, NotifyError};
use super::message::RenderedMessage;
use crate::config::SmtpEndpoint;
use crate::monitor::TargetKey;

/// Logs the message it would have sent and reports success.
pub struct DryRunChannel {
    endpoint: SmtpEndpoint,
}

impl DryRunChannel {
    pub fn new(endpoint: SmtpEndpoint) -> Self {
        Self { endpoint }
    }

    /// The text logged in place of a delivery.
    pub fn describe(&self, target: &TargetKey, message: &RenderedMessage) -> String {
        format!(
            "{target}: would send the following email through {}:\n---\n{message}\n---",
            self.endpoint
        )
    }
}

#[async_trait]
impl Channel for DryRunChannel {
    fn name(&self) -> &str {
        "dry-run"
    }

    async fn deliver(&self, target: &TargetKey, message: &RenderedMessage) -> Result<(), NotifyError> {
        tracing::info!(
            key = %target,
            relay = %self.endpoint,
            "{}",
            self.describe(target, message)
        );
        Ok(())
    }
}
