//! Application events
//!
//! Everything that can arrive on the runtime's single event queue.

/// Inputs to the [`crate::App`] state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The host pushed a payload on a named channel.
    HostMessage {
        /// Channel name (`get_languages`, `get_votes`, ...).
        channel: String,
        /// Raw JSON payload.
        payload: Vec<u8>,
    },

    /// User clicked a candidate.
    Toggle {
        /// Candidate name.
        name: String,
    },

    /// User pressed the vote button.
    Submit,

    /// User asked for fresh snapshots.
    Refresh,

    /// Shut the widget down.
    Quit,
}

impl AppEvent {
    /// Host message on `channel` with the given JSON body.
    pub fn host(channel: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        Self::HostMessage { channel: channel.into(), payload: payload.into() }
    }

    /// Toggle of the named candidate.
    pub fn toggle(name: impl Into<String>) -> Self {
        Self::Toggle { name: name.into() }
    }
}
