//! Runtime tests against a scripted driver.
//!
//! The driver hands out pre-recorded event batches and records every
//! outbound call, so each test can check exactly what left the widget.

use std::{collections::VecDeque, fmt};

use ballot_app::{App, AppEvent, Driver, Runtime, RuntimeConfig, RuntimeError};
use ballot_core::Candidate;
use ballot_proto::PublishVote;

#[derive(Debug, PartialEq, Eq)]
struct ScriptError(&'static str);

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for ScriptError {}

#[derive(Default)]
struct ScriptedDriver {
    batches: VecDeque<Vec<AppEvent>>,
    pings: usize,
    published: Vec<PublishVote>,
    renders: usize,
    fail_publish: bool,
    fail_render_after: Option<usize>,
    stopped: bool,
}

impl ScriptedDriver {
    fn with_batches(batches: Vec<Vec<AppEvent>>) -> Self {
        Self { batches: batches.into(), ..Self::default() }
    }
}

impl Driver for ScriptedDriver {
    type Error = ScriptError;

    async fn poll_events(&mut self) -> Result<Option<Vec<AppEvent>>, Self::Error> {
        Ok(self.batches.pop_front())
    }

    fn request_snapshots(&mut self) -> Result<(), Self::Error> {
        self.pings += 1;
        Ok(())
    }

    fn publish_vote(&mut self, vote: PublishVote) -> Result<(), Self::Error> {
        if self.fail_publish {
            return Err(ScriptError("host unreachable"));
        }
        self.published.push(vote);
        Ok(())
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        if self.fail_render_after.is_some_and(|limit| self.renders >= limit) {
            return Err(ScriptError("terminal gone"));
        }
        self.renders += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

const LANGUAGES: &str = r#"{"languages":[{"name":"Rust"},{"name":"Go"}]}"#;

async fn run(driver: ScriptedDriver) -> (ScriptedDriver, App) {
    let mut runtime = Runtime::new(driver, App::new());
    runtime.run().await.unwrap();
    runtime.into_parts()
}

#[tokio::test]
async fn pings_once_at_start() {
    let (driver, _) = run(ScriptedDriver::default()).await;
    assert_eq!(driver.pings, 1);
    assert_eq!(driver.renders, 1);
    assert!(driver.stopped);
}

#[tokio::test]
async fn start_ping_can_be_disabled() {
    let mut runtime = Runtime::with_config(
        ScriptedDriver::default(),
        App::new(),
        RuntimeConfig { request_snapshots_on_start: false },
    );
    runtime.run().await.unwrap();
    assert_eq!(runtime.driver().pings, 0);
}

#[tokio::test]
async fn submit_without_selection_makes_no_call() {
    let driver = ScriptedDriver::with_batches(vec![
        vec![AppEvent::host("get_languages", LANGUAGES)],
        vec![AppEvent::Submit],
    ]);
    let (driver, _) = run(driver).await;
    assert!(driver.published.is_empty());
}

#[tokio::test]
async fn submit_with_selection_makes_exactly_one_call() {
    let driver = ScriptedDriver::with_batches(vec![
        vec![AppEvent::host("get_languages", LANGUAGES), AppEvent::toggle("Go")],
        vec![AppEvent::Submit],
    ]);
    let (driver, app) = run(driver).await;
    assert_eq!(driver.published, vec![PublishVote { name: "Go".into() }]);
    assert_eq!(app.state().selection(), Some(&Candidate::new("Go")));
}

#[tokio::test]
async fn deselect_racing_submit_is_rechecked() {
    // The UI still showed the button enabled, but the deselect arrived first.
    let driver = ScriptedDriver::with_batches(vec![vec![
        AppEvent::toggle("Go"),
        AppEvent::toggle("Go"),
        AppEvent::Submit,
    ]]);
    let (driver, _) = run(driver).await;
    assert!(driver.published.is_empty());
}

#[tokio::test]
async fn votes_before_candidates_are_applied() {
    let driver = ScriptedDriver::with_batches(vec![
        vec![AppEvent::host("get_votes", r#"{"votes":[{"name":"Rust"},{"name":"Rust"},{"name":"Go"}]}"#)],
        vec![AppEvent::host("get_languages", LANGUAGES)],
    ]);
    let (_, app) = run(driver).await;
    let state = app.state();
    assert_eq!(state.count_votes_for(&"Rust".into()), 2);
    assert_eq!(state.percentage(&"Rust".into()), 67);
    assert_eq!(state.percentage(&"Go".into()), 33);
}

#[tokio::test]
async fn publish_failure_is_swallowed() {
    let mut driver = ScriptedDriver::with_batches(vec![
        vec![AppEvent::toggle("Go"), AppEvent::Submit],
        vec![AppEvent::host("get_languages", LANGUAGES)],
    ]);
    driver.fail_publish = true;

    let (driver, app) = run(driver).await;
    assert!(driver.published.is_empty());
    assert_eq!(app.state().candidates().len(), 2, "loop kept going after the failure");
}

#[tokio::test]
async fn render_failure_stops_the_loop() {
    let mut driver = ScriptedDriver::with_batches(vec![vec![AppEvent::toggle("Go")]]);
    driver.fail_render_after = Some(1);

    let mut runtime = Runtime::new(driver, App::new());
    let err = runtime.run().await.unwrap_err();
    assert!(matches!(err, RuntimeError::Render(ScriptError("terminal gone"))));
    assert!(runtime.driver().stopped);
}

#[tokio::test]
async fn quit_stops_before_later_events() {
    let driver = ScriptedDriver::with_batches(vec![
        vec![AppEvent::toggle("Go"), AppEvent::Quit, AppEvent::Submit],
        vec![AppEvent::Submit],
    ]);
    let (driver, app) = run(driver).await;
    assert!(app.should_quit());
    assert!(driver.published.is_empty());
    assert_eq!(driver.batches.len(), 1);
}

#[tokio::test]
async fn repeated_submissions_are_all_sent() {
    let driver = ScriptedDriver::with_batches(vec![vec![
        AppEvent::toggle("Rust"),
        AppEvent::Submit,
        AppEvent::Submit,
        AppEvent::Submit,
    ]]);
    let (driver, _) = run(driver).await;
    assert_eq!(driver.published.len(), 3, "nothing prevents casting several votes");
}
