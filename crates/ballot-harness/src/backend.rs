//! In-memory host backend.
//!
//! Behaves like the desktop host the widget is embedded in:
//!
//! - `ping` pushes the candidate catalog, then the recorded votes
//! - `on_publish_vote` records a vote and pushes the new vote list
//!
//! Votes live only in memory. Nothing stops the same user from voting any
//! number of times.

use ballot_app::{HostCommand, HostHandle};
use ballot_proto::{
    CandidateRecord, Inbound, LanguagesPayload, ProtocolError, PublishVote, VoteRecord,
    VotesPayload,
};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The host's default candidate catalog.
pub const LANGUAGES: [&str; 21] = [
    "Elm",
    "Rust",
    "JavaScript",
    "TypeScript",
    "Elixir",
    "Ruby",
    "OCaml",
    "Python",
    "R",
    "Go",
    "CSharp",
    "Haskell",
    "Clojure",
    "Java",
    "Dart",
    "Julia",
    "Kotlin",
    "Swift",
    "Erlang",
    "Lua",
    "PHP",
];

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
    /// A snapshot could not be encoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The widget's event queue is gone.
    #[error("widget disconnected")]
    Disconnected,
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Candidate names, in catalog order.
    pub candidates: Vec<String>,
    /// Votes already recorded when the backend starts.
    pub initial_votes: Vec<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            candidates: LANGUAGES.iter().map(|name| (*name).to_string()).collect(),
            initial_votes: Vec::new(),
        }
    }
}

impl BackendConfig {
    /// Configuration with the given catalog and no votes.
    pub fn with_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { candidates: candidates.into_iter().map(Into::into).collect(), initial_votes: Vec::new() }
    }
}

/// In-memory host backend.
#[derive(Debug)]
pub struct MemoryBackend {
    candidates: Vec<String>,
    votes: Vec<VoteRecord>,
    host: HostHandle,
    received: Vec<HostCommand>,
}

impl MemoryBackend {
    /// Create a backend pushing to `host`.
    pub fn new(config: BackendConfig, host: HostHandle) -> Self {
        let mut backend =
            Self { candidates: config.candidates, votes: Vec::new(), host, received: Vec::new() };
        for name in config.initial_votes {
            backend.record_vote(name);
        }
        backend
    }

    /// Recorded votes, oldest first.
    pub fn votes(&self) -> &[VoteRecord] {
        &self.votes
    }

    /// Current catalog.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Every command received, in order.
    pub fn received(&self) -> &[HostCommand] {
        &self.received
    }

    /// Every `on_publish_vote` argument received, in order.
    pub fn published(&self) -> Vec<PublishVote> {
        self.received
            .iter()
            .filter_map(|command| match command {
                HostCommand::PublishVote(vote) => Some(vote.clone()),
                HostCommand::Ping => None,
            })
            .collect()
    }

    /// Handle one command from the widget.
    pub fn handle(&mut self, command: HostCommand) -> Result<(), BackendError> {
        debug!(command = command.name(), "backend received command");
        self.received.push(command.clone());
        match command {
            HostCommand::Ping => {
                self.push_languages()?;
                self.push_votes()
            },
            HostCommand::PublishVote(vote) => {
                self.record_vote(vote.name);
                self.push_votes()
            },
        }
    }

    /// Handle commands until every sender is dropped, then return the backend.
    ///
    /// Push failures are logged and do not stop the loop.
    pub async fn serve(mut self, mut commands: mpsc::UnboundedReceiver<HostCommand>) -> Self {
        while let Some(command) = commands.recv().await {
            if let Err(err) = self.handle(command) {
                warn!(error = %err, "backend failed to answer command");
            }
        }
        self
    }

    /// Append a vote record with the next sequence number.
    pub fn record_vote(&mut self, name: impl Into<String>) -> &VoteRecord {
        let id = self.votes.iter().filter_map(|vote| vote.id).max().map_or(0, |max| max + 1);
        let name = name.into();
        info!(id, candidate = %name, "recorded vote");
        self.votes.push(VoteRecord { id: Some(id), name, public: false });
        &self.votes[self.votes.len() - 1]
    }

    /// Replace the catalog. Does not push.
    pub fn set_candidates<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates = candidates.into_iter().map(Into::into).collect();
    }

    /// Push the catalog on `get_languages`.
    pub fn push_languages(&self) -> Result<(), BackendError> {
        let payload = LanguagesPayload {
            languages: self.candidates.iter().map(|name| CandidateRecord { name: name.clone() }).collect(),
        };
        self.push(&Inbound::Languages(payload))
    }

    /// Push the recorded votes on `get_votes`.
    pub fn push_votes(&self) -> Result<(), BackendError> {
        self.push(&Inbound::Votes(VotesPayload { votes: self.votes.clone() }))
    }

    /// Push an arbitrary, possibly malformed, payload.
    pub fn push_raw(&self, channel: &str, payload: impl Into<Vec<u8>>) -> Result<(), BackendError> {
        if self.host.emit(channel, payload) { Ok(()) } else { Err(BackendError::Disconnected) }
    }

    fn push(&self, inbound: &Inbound) -> Result<(), BackendError> {
        let body = inbound.encode()?;
        self.push_raw(inbound.channel().name(), body)
    }
}
