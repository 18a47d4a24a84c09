use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    let mut cmd = Command::cargo_bin("bucket-deploy").expect("Binary exists");

    cmd.env_remove("AWS_REGION")
        .env_remove("BUCKET_DEPLOY_DELAY_SECS")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Usage")
                .and(predicate::str::contains("DIST"))
                .and(predicate::str::contains("BUCKET")),
        );
}

#[test]
fn missing_bucket_prints_usage_and_succeeds() {
    let dist = tempfile::tempdir().expect("temp dir");
    let mut cmd = Command::cargo_bin("bucket-deploy").expect("Binary exists");

    cmd.arg(dist.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("Deploy from").not());
}

#[test]
fn help_mentions_region_and_delay() {
    let mut cmd = Command::cargo_bin("bucket-deploy").expect("Binary exists");

    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("--region").and(predicate::str::contains("--delay-secs")),
    );
}

#[test]
fn non_numeric_delay_is_rejected() {
    let mut cmd = Command::cargo_bin("bucket-deploy").expect("Binary exists");

    cmd.args(["dist", "my-bucket", "--delay-secs", "soon"])
        .assert()
        .failure();
}

#[test]
fn blank_region_fails_with_a_single_error_report() {
    let dist = tempfile::tempdir().expect("temp dir");
    let mut cmd = Command::cargo_bin("bucket-deploy").expect("Binary exists");

    cmd.env_remove("RUST_LOG")
        .env_remove("AWS_REGION")
        .arg(dist.path())
        .args(["my-bucket", "--region", " "])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Deploy from").not())
        .stderr(predicate::function(|stderr: &str| {
            stderr.matches("Region must not be empty").count() == 1
                && stderr.matches("Deploy failed").count() == 1
        }));
}

use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, Layer, Registry};

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let msg = format!("{:?}", event);
        self.events.lock().unwrap().push(msg);
    }
}

#[tokio::test]
async fn run_without_arguments_emits_trace_initialised_and_returns_ok() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let collector = EventCollector {
        events: events.clone(),
    };
    let subscriber = Registry::default().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    use bucket_deploy::cli::{run, Cli};

    let cli = Cli {
        dist: None,
        bucket: None,
        region: "eu-west-1".to_string(),
        delay_secs: 0,
    };

    let result = run(cli).await;
    assert!(result.is_ok(), "missing arguments is not an error: {result:?}");

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("trace_initialised")),
        "Expected a 'trace_initialised' trace event, got: {:?}",
        event_msgs
    );
}
