pub async fn wait_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                tokio::select! {
                    r = tokio::signal::ctrl_c() => log_ctrl_c_failure(r),
                    _ = term.recv() => {}
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot install SIGTERM handler, only ctrl-c will stop the monitor");
                log_ctrl_c_failure(tokio::signal::ctrl_c().await);
            }
        }
    }

    #[cfg(not(unix))]
    {
        log_ctrl_c_failure(tokio::signal::ctrl_c().await);
    }
}

fn log_ctrl_c_failure(result: std::io::Result<()>) {
    if let Err(e) = result {
        tracing::error!(error = %e, "cannot listen for ctrl-c, shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn waits_for_a_signal() {
        let waited = tokio::time::timeout(std::time::Duration::from_millis(50), wait_for_shutdown()).await;
        assert!(waited.is_err());
    }

    #[test]
    fn handler_failure_is_not_fatal() {
        log_ctrl_c_failure(Err(std::io::Error::other("no signal driver")));
        log_ctrl_c_failure(Ok(()));
    }
}
