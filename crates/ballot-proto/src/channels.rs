//! Channel names shared with the host shell.

use std::{fmt, str::FromStr};

use crate::ProtocolError;

/// Inbound channel carrying the candidate list snapshot.
pub const GET_LANGUAGES: &str = "get_languages";

/// Inbound channel carrying the vote list snapshot.
pub const GET_VOTES: &str = "get_votes";

/// Outbound command casting a vote for the current selection.
pub const ON_PUBLISH_VOTE: &str = "on_publish_vote";

/// Outbound request asking the host to push both snapshots.
pub const PING: &str = "ping";

/// Channels the widget listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Full candidate list replacement.
    GetLanguages,
    /// Full vote list replacement.
    GetVotes,
}

impl Channel {
    /// Wire name of the channel.
    pub fn name(self) -> &'static str {
        match self {
            Self::GetLanguages => GET_LANGUAGES,
            Self::GetVotes => GET_VOTES,
        }
    }
}

impl FromStr for Channel {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GET_LANGUAGES => Ok(Self::GetLanguages),
            GET_VOTES => Ok(Self::GetVotes),
            other => Err(ProtocolError::UnknownChannel(other.to_string())),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
