//! Bridge between the host shell and the core state machine.
//!
//! Inbound, the bridge decodes snapshot payloads and turns each into exactly
//! one [`Event`]. Snapshots are independent: a vote snapshot may arrive before
//! any candidate snapshot, and each one simply replaces its list.
//!
//! Outbound, the bridge owns the one command the widget issues. It never
//! touches the state: the app applies `SubmitRequested` at the moment of
//! submission and hands the resulting effect over. With nothing selected there
//! is no effect, so a submit racing a deselect never reaches the host.

use ballot_core::{Candidate, Effect, Event, Vote};
use ballot_proto::{Inbound, ProtocolError, PublishVote};
use tracing::{debug, info, warn};

/// Translates host messages into core events and core effects into
/// outbound commands.
#[derive(Debug, Clone, Default)]
pub struct Bridge {
    dropped: u64,
    published: u64,
}

impl Bridge {
    /// Create a new bridge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of host messages dropped because they could not be decoded.
    pub fn dropped_messages(&self) -> u64 {
        self.dropped
    }

    /// Number of `on_publish_vote` commands produced.
    pub fn published_votes(&self) -> u64 {
        self.published
    }

    /// Decode a host message into a core event.
    ///
    /// Unknown channels and malformed payloads are logged and dropped.
    pub fn inbound(&mut self, channel: &str, payload: &[u8]) -> Option<Event> {
        match Inbound::decode(channel, payload) {
            Ok(inbound) => Some(Self::to_event(inbound)),
            Err(err) => {
                self.dropped += 1;
                match &err {
                    ProtocolError::UnknownChannel(_) => {
                        debug!(channel, "ignoring message on unknown channel");
                    },
                    _ => warn!(channel, error = %err, "dropping malformed host payload"),
                }
                None
            },
        }
    }

    /// Map a decoded snapshot onto the event that replaces its list.
    pub fn to_event(inbound: Inbound) -> Event {
        match inbound {
            Inbound::Languages(payload) => Event::CandidatesReplaced(
                payload.languages.into_iter().map(|record| Candidate::new(record.name)).collect(),
            ),
            Inbound::Votes(payload) => Event::VotesReplaced(
                payload.votes.into_iter().map(|record| Vote::new(record.name)).collect(),
            ),
        }
    }

    /// Map the effect of a `SubmitRequested` transition onto the outbound
    /// command.
    ///
    /// Returns `None` when the transition produced no effect.
    pub fn outbound(&mut self, effect: Option<Effect>) -> Option<PublishVote> {
        match effect {
            Some(Effect::SubmitVote(candidate)) => {
                self.published += 1;
                info!(candidate = candidate.name(), "publishing vote");
                Some(PublishVote { name: candidate.name().to_string() })
            },
            None => {
                debug!("submit ignored, nothing selected");
                None
            },
        }
    }
}
