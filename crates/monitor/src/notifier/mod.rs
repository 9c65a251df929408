mod channel;
mod dry_run;
mod mailer;
mod message;
mod smtp;
mod template;

pub use channel::{Channel, NotifyError};
pub use dry_run::DryRunChannel;
pub use mailer::{Notifier, NotifyOutcome};
pub use message::RenderedMessage;
pub use smtp::{build_email, SmtpChannel};
pub use template::render;
