mod loader;
mod schema;
mod settings;
mod smtp;

pub use loader::{load_from_file, load_from_str, split_contacts, LoadError};
pub use schema::{RawConfig, RawNotification, RawTarget};
pub use settings::{MonitorSettings, NotificationTemplate, Thresholds};
pub use smtp::{SmtpEndpoint, DEFAULT_SMTP_PORT};
