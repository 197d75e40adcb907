//! Application state machine
//!
//! [`App`] owns the widget [`State`] and is the only thing that mutates it.
//! Every input is an [`AppEvent`]; every effect comes back as an
//! [`AppAction`] for the runtime to execute.

use ballot_core::{Candidate, Event, State};
use tracing::debug;

use crate::{AppAction, AppEvent, Bridge, RuntimeConfig};

/// Application state machine.
#[derive(Debug, Clone, Default)]
pub struct App {
    state: State,
    bridge: Bridge,
    should_quit: bool,
}

impl App {
    /// Create an app with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current widget state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The bridge, for diagnostics.
    pub fn bridge(&self) -> &Bridge {
        &self.bridge
    }

    /// Whether a quit has been processed.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Actions to run once before the first event.
    pub fn start(&self, config: &RuntimeConfig) -> Vec<AppAction> {
        let mut actions = Vec::with_capacity(2);
        if config.request_snapshots_on_start {
            actions.push(AppAction::RequestSnapshots);
        }
        actions.push(AppAction::Render);
        actions
    }

    /// Process one event.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::HostMessage { channel, payload } => {
                match self.bridge.inbound(&channel, &payload) {
                    Some(event) => self.apply(event),
                    None => vec![],
                }
            },
            AppEvent::Toggle { name } => self.apply(Event::ToggleSelection(Candidate::new(name))),
            AppEvent::Submit => {
                let effect = self.state.apply(Event::SubmitRequested);
                self.bridge.outbound(effect).map(AppAction::PublishVote).into_iter().collect()
            },
            AppEvent::Refresh => vec![AppAction::RequestSnapshots],
            AppEvent::Quit => {
                self.should_quit = true;
                vec![AppAction::Quit]
            },
        }
    }

    fn apply(&mut self, event: Event) -> Vec<AppAction> {
        debug!(?event, "applying");
        // Only SubmitRequested yields an effect, and `handle` routes that one itself.
        let _ = self.state.apply(event);
        vec![AppAction::Render]
    }
}

#[cfg(test)]
mod tests {
    use ballot_proto::PublishVote;

    use super::*;

    fn app_with_candidates() -> App {
        let mut app = App::new();
        app.handle(AppEvent::host(
            "get_languages",
            r#"{"languages":[{"name":"Rust"},{"name":"Go"}]}"#,
        ));
        app
    }

    #[test]
    fn start_requests_snapshots_then_renders() {
        let app = App::new();
        assert_eq!(
            app.start(&RuntimeConfig::default()),
            vec![AppAction::RequestSnapshots, AppAction::Render]
        );
        assert_eq!(
            app.start(&RuntimeConfig { request_snapshots_on_start: false }),
            vec![AppAction::Render]
        );
    }

    #[test]
    fn snapshot_renders() {
        let mut app = App::new();
        let actions = app.handle(AppEvent::host("get_votes", r#"{"votes":[{"name":"Go"}]}"#));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.state().total_votes(), 1);
    }

    #[test]
    fn dropped_message_does_nothing() {
        let mut app = app_with_candidates();
        let before = app.state().clone();
        assert!(app.handle(AppEvent::host("get_languages", "[]")).is_empty());
        assert_eq!(app.state(), &before);
    }

    #[test]
    fn submit_without_selection_produces_no_call() {
        let mut app = app_with_candidates();
        assert!(app.handle(AppEvent::Submit).is_empty());
    }

    #[test]
    fn submit_with_selection_produces_one_call() {
        let mut app = app_with_candidates();
        app.handle(AppEvent::toggle("Go"));
        assert_eq!(
            app.handle(AppEvent::Submit),
            vec![AppAction::PublishVote(PublishVote { name: "Go".into() })]
        );
    }

    #[test]
    fn submit_reads_selection_without_changing_state() {
        let mut app = app_with_candidates();
        app.handle(AppEvent::toggle("Go"));
        let before = app.state().clone();

        app.handle(AppEvent::Submit);
        app.handle(AppEvent::Submit);

        assert_eq!(app.state(), &before);
        assert_eq!(app.bridge().published_votes(), 2);
    }

    #[test]
    fn deselect_then_submit_produces_no_call() {
        let mut app = app_with_candidates();
        app.handle(AppEvent::toggle("Go"));
        app.handle(AppEvent::toggle("Go"));
        assert!(app.handle(AppEvent::Submit).is_empty());
    }

    #[test]
    fn refresh_requests_snapshots_without_render() {
        let mut app = app_with_candidates();
        assert_eq!(app.handle(AppEvent::Refresh), vec![AppAction::RequestSnapshots]);
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        assert_eq!(app.handle(AppEvent::Quit), vec![AppAction::Quit]);
        assert!(app.should_quit());
    }
}
