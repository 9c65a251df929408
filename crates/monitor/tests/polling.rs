use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, TimeDelta, Utc};

use cvmfs_mon::alert::Condition;
use cvmfs_mon::config::{self, NotificationTemplate, SmtpEndpoint, Thresholds};
use cvmfs_mon::monitor::{Monitor, Target, TargetKey};
use cvmfs_mon::notifier::{Channel, Notifier, NotifyError, RenderedMessage};
use cvmfs_mon::status::{FetchError, HttpFetcher, StatusSource};

#[derive(Default)]
struct RecordingChannel {
    sent: Mutex<Vec<(TargetKey, RenderedMessage)>>,
}

#[async_trait]
impl Channel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    async fn deliver(&self, target: &TargetKey, message: &RenderedMessage) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push((target.clone(), message.clone()));
        Ok(())
    }
}

fn status_json(rev0: i64, rev1: i64, published: DateTime<Utc>) -> String {
    let ts = published.format("%Y-%m-%dT%H:%M:%S%.3fZ");
    format!(
        r#"{{"status":"ok",
            "stratum0":{{"last_modified":"{ts}","revision":{rev0}}},
            "stratum1":{{"last_modified":"{ts}","revision":{rev1}}}}}"#
    )
}

async fn serve_status() -> String {
    let recent = Utc::now() - TimeDelta::seconds(60);
    let in_sync = status_json(100, 100, recent);
    let syncing = status_json(105, 100, recent);
    let behind = status_json(9000, 100, recent);

    let app = Router::new()
        .route("/in-sync", get(move || async move { in_sync }))
        .route("/syncing", get(move || async move { syncing }))
        .route("/behind", get(move || async move { behind }))
        .route("/garbage", get(|| async { "<html>proxy error</html>" }))
        .route(
            "/missing",
            get(|| async { r#"{"status":"ok","stratum0":{"last_modified":"2024-03-01T12:00:00","revision":1}}"# }),
        )
        .route(
            "/down",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn target(base: &str, path: &str) -> Target {
    Target {
        key: TargetKey::new("atlas.cern.ch", path),
        url: format!("{base}/{path}"),
        contacts: vec!["ops@example.org".into()],
    }
}

fn thresholds() -> Thresholds {
    Thresholds {
        snooze_secs: 3600,
        max_rev_delta: 50,
        max_time_delta: 7200,
        ..Thresholds::default()
    }
}

fn template() -> NotificationTemplate {
    NotificationTemplate {
        from: "mon@example.org".into(),
        subject: "%(repo)s:%(stratum_name)s is %(delta_rev)d revisions behind".into(),
        body: "API: %(api_url)s\nstratum0 r%(stratum0_rev)d, stratum1 r%(stratum1_rev)d\n".into(),
        smtp: SmtpEndpoint::parse("mail.example.org"),
    }
}

#[tokio::test]
async fn fetcher_reads_live_endpoint() {
    let base = serve_status().await;
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();

    let doc = fetcher.fetch(&format!("{base}/syncing")).await.unwrap();
    assert!(doc.is_healthy());
    assert_eq!(doc.stratum0.revision, 105);
    assert_eq!(doc.stratum1.revision, 100);
}

#[tokio::test]
async fn fetcher_classifies_failures() {
    let base = serve_status().await;
    let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();

    let garbage = fetcher.fetch(&format!("{base}/garbage")).await.unwrap_err();
    assert!(matches!(garbage, FetchError::Parse(_)));

    let missing = fetcher.fetch(&format!("{base}/missing")).await.unwrap_err();
    assert!(missing.to_string().contains("stratum1"));

    let down = fetcher.fetch(&format!("{base}/down")).await.unwrap_err();
    assert!(matches!(down, FetchError::Status(503)));
}

#[tokio::test]
async fn end_to_end_cycle() {
    let base = serve_status().await;
    let channel = Arc::new(RecordingChannel::default());
    let targets = vec![
        target(&base, "in-sync"),
        target(&base, "syncing"),
        target(&base, "behind"),
        target(&base, "garbage"),
    ];
    let monitor = Monitor::new(
        targets,
        thresholds(),
        Arc::new(HttpFetcher::new(Duration::from_secs(5)).unwrap()),
        Notifier::with_channel(template(), channel.clone()),
    )
    .with_concurrency(2);

    let report = monitor.poll_all().await;
    let key = |p: &str| TargetKey::new("atlas.cern.ch", p);
    assert_eq!(report.condition_of(&key("in-sync")), Some(Condition::Ok));
    assert_eq!(report.condition_of(&key("syncing")), Some(Condition::Syncing));
    assert_eq!(report.condition_of(&key("behind")), Some(Condition::Error));
    assert_eq!(report.condition_of(&key("garbage")), Some(Condition::Unavailable));

    {
        let sent = channel.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (target, message) = &sent[0];
        assert_eq!(target, &key("behind"));
        assert_eq!(message.subject, "atlas.cern.ch:behind is 8900 revisions behind");
        assert_eq!(
            message.body,
            format!("API: {base}/behind\nstratum0 r9000, stratum1 r100\n")
        );
    }
    assert!(monitor.throttle().last_notification(&key("behind")).is_some());

    let report = monitor.poll_all().await;
    assert_eq!(report.count(Condition::Error), 1);
    assert_eq!(channel.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn monitor_from_config_file() {
    let base = serve_status().await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cvmfs-mon.yml");
    std::fs::write(
        &path,
        format!(
            "sleep: 1\nmax_revdelta: 50\nrepos:\n  atlas.cern.ch:\n    in-sync:\n      url: {base}/in-sync\n    down:\n      url: {base}/down\n"
        ),
    )
    .unwrap();

    let settings = config::load_from_file(&path).unwrap();
    let monitor = cvmfs_mon::run::build_monitor(&settings).unwrap();
    let report = monitor.poll_all().await;
    assert_eq!(report.count(Condition::Ok), 1);
    assert_eq!(report.count(Condition::Unavailable), 1);
}
