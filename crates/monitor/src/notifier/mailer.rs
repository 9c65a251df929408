use std::sync::Arc;
use std::time::Duration;

use super::channel::Channel;
use super::dry_run::DryRunChannel;
use super::message::RenderedMessage;
use super::smtp::SmtpChannel;
use crate::alert::AlertContext;
use crate::config::NotificationTemplate;
use crate::monitor::TargetKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Sent,
    NoContact,
    Disabled,
    Failed,
}

impl NotifyOutcome {
    /// Whether the alert counts against the snooze window. Only a failed
    /// delivery leaves the target eligible for the next cycle.
    pub fn should_record(&self) -> bool {
        !matches!(self, Self::Failed)
    }
}

struct Route {
    template: NotificationTemplate,
    channel: Arc<dyn Channel>,
}

/// Renders alerts and hands them to a delivery channel. Built once at
/// startup; without a complete template every call is a no-op.
pub struct Notifier {
    route: Option<Route>,
}

impl Notifier {
    pub fn from_template(template: Option<NotificationTemplate>, dry_run: bool, smtp_timeout: Duration) -> Self {
        match template {
            Some(template) => {
                let channel: Arc<dyn Channel> = if dry_run {
                    Arc::new(DryRunChannel::new(template.smtp.clone()))
                } else {
                    Arc::new(SmtpChannel::new(&template.smtp, smtp_timeout))
                };
                Self::with_channel(template, channel)
            }
            None => Self::disabled(),
        }
    }

    pub fn with_channel(template: NotificationTemplate, channel: Arc<dyn Channel>) -> Self {
        Self {
            route: Some(Route { template, channel }),
        }
    }

    pub fn disabled() -> Self {
        Self { route: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.route.is_some()
    }

    pub fn channel_name(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.channel.name())
    }

    pub async fn notify(&self, target: &TargetKey, contacts: &[String], ctx: &AlertContext) -> NotifyOutcome {
        let Some(route) = &self.route else {
            tracing::debug!(key = %target, "{target}: notifications disabled");
            return NotifyOutcome::Disabled;
        };

        if contacts.is_empty() {
            tracing::warn!(key = %target, "{target}: cannot send notification: no email contact");
            return NotifyOutcome::NoContact;
        }

        let message = RenderedMessage::render(&route.template, contacts, ctx);
        match route.channel.deliver(target, &message).await {
            Ok(()) => {
                let recipients = contacts.join(", ");
                tracing::info!(
                    key = %target,
                    channel = route.channel.name(),
                    "{target}: notification sent to {recipients}"
                );
                NotifyOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    key = %target,
                    channel = route.channel.name(),
                    error = %e,
                    "{target}: cannot send email: {e}"
                );
                NotifyOutcome::Failed
            }
        }
    }
}
