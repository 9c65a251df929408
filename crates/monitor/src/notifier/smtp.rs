use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::channel::{Channel, NotifyError};
use super::message::RenderedMessage;
use crate::config::SmtpEndpoint;
use crate::monitor::TargetKey;

/// Plain SMTP relay: no TLS, no authentication.
pub struct SmtpChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpChannel {
    pub fn new(endpoint: &SmtpEndpoint, timeout: Duration) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(endpoint.host.as_str())
            .port(endpoint.port)
            .timeout(Some(timeout))
            .build();
        Self { transport }
    }
}

pub fn build_email(message: &RenderedMessage) -> Result<Message, NotifyError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&message.from)?)
        .subject(message.subject.as_str())
        .header(ContentType::TEXT_PLAIN);
    for to in &message.to {
        builder = builder.to(parse_mailbox(to)?);
    }
    builder
        .body(message.body.clone())
        .map_err(|e| NotifyError(e.to_string()))
}

fn parse_mailbox(address: &str) -> Result<Mailbox, NotifyError> {
    address
        .parse()
        .map_err(|e: lettre::address::AddressError| NotifyError(format!("{address}: {e}")))
}

#[async_trait]
impl Channel for SmtpChannel {
    fn name(&self) -> &str {
        "smtp"
    }

    async fn deliver(&self, _target: &TargetKey, message: &RenderedMessage) -> Result<(), NotifyError> {
        let email = build_email(message)?;
        self.transport
            .send(email)
            .await
            .map_err(|e| NotifyError(e.to_string()))?;
        Ok(())
    }
}
