pub mod alert;
pub mod cli;
pub mod config;
pub mod monitor;
pub mod notifier;
pub mod run;
pub mod shutdown;
pub mod status;
