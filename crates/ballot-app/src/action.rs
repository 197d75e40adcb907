//! Application actions
//!
//! Actions produced by the App state machine for the runtime to execute.

use ballot_proto::PublishVote;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Ask the host to push both snapshots.
    RequestSnapshots,

    /// Invoke `on_publish_vote`. Fire-and-forget.
    PublishVote(PublishVote),

    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,
}
