use std::sync::Arc;

use crate::cli::Args;
use crate::config::{self, MonitorSettings};
use crate::monitor::{Monitor, MonitorLoop};
use crate::notifier::Notifier;
use crate::status::HttpFetcher;

pub const NO_NOTIF_ENV: &str = "CVMFSMON_NO_NOTIF";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Any value other than `0` forces dry-run delivery.
pub fn dry_run_requested(env_value: Option<&str>) -> bool {
    env_value.is_some_and(|v| v.trim() != "0")
}

pub async fn run(args: Args) -> Result<(), BoxError> {
    let mut settings = config::load_from_file(&args.config_path)
        .map_err(|e| format!("cannot parse configuration {}: {e}", args.config_path.display()))?;
    settings.dry_run = args.dry_run || dry_run_requested(std::env::var(NO_NOTIF_ENV).ok().as_deref());

    let monitor = Arc::new(build_monitor(&settings)?);

    if args.once {
        monitor.poll_all().await;
        return Ok(());
    }

    MonitorLoop {
        interval: settings.thresholds.poll_interval,
        monitor,
    }
    .run_until(crate::shutdown::wait_for_shutdown())
    .await;

    Ok(())
}

pub fn build_monitor(settings: &MonitorSettings) -> Result<Monitor, BoxError> {
    match &settings.notification {
        Some(template) if settings.dry_run => {
            tracing::info!(relay = %template.smtp, "email notifications will be logged only (dry run)");
        }
        Some(template) => {
            tracing::info!(relay = %template.smtp, "email notifications will be sent via {}", template.smtp);
        }
        None => tracing::info!("email notifications disabled"),
    }

    tracing::info!(
        targets = settings.targets.len(),
        sleep_s = settings.thresholds.poll_interval.as_secs(),
        snooze_s = settings.thresholds.snooze_secs,
        max_timedelta = settings.thresholds.max_time_delta,
        max_revdelta = settings.thresholds.max_rev_delta,
        concurrency = settings.concurrency,
        "monitor configured"
    );

    let fetcher = HttpFetcher::new(settings.fetch_timeout)?;
    let notifier = Notifier::from_template(
        settings.notification.clone(),
        settings.dry_run,
        settings.smtp_timeout,
    );

    Ok(Monitor::new(
        settings.targets.clone(),
        settings.thresholds,
        Arc::new(fetcher),
        notifier,
    )
    .with_concurrency(settings.concurrency))
}
