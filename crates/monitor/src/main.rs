use cvmfs_mon::run::BoxError;
use tracing_subscriber::EnvFilter;

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = cvmfs_mon::cli::parse();
    init_logging(args.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "cvmfs-mon starting");

    cvmfs_mon::run::run(args)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "{e}"))
}
