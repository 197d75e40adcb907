//! JSON payload types for each channel.
//!
//! Every inbound payload is a full snapshot. The host wraps the list in a
//! single-key object (`{"languages": [...]}`, `{"votes": [...]}`); records only
//! need a `name`, and any other field the host sends along is ignored.

use serde::{Deserialize, Serialize};

use crate::{
    Channel, ProtocolError, Result,
    channels::{GET_LANGUAGES, GET_VOTES, ON_PUBLISH_VOTE},
};

/// A candidate as the host describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Candidate name, the only identity a candidate has.
    pub name: String,
}

/// Candidate list snapshot (`get_languages`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguagesPayload {
    /// Candidates in display order.
    pub languages: Vec<CandidateRecord>,
}

/// A single vote record.
///
/// The host keeps a local sequence number and a visibility flag next to each
/// vote. The widget only reads `name`; the other fields are carried so the
/// host's records decode without loss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Host-local sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Name of the candidate the vote was cast for.
    pub name: String,
    /// Whether the host has shared this vote.
    #[serde(default)]
    pub public: bool,
}

impl VoteRecord {
    /// Vote record carrying only a candidate name.
    pub fn named(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into(), public: false }
    }
}

/// Vote list snapshot (`get_votes`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VotesPayload {
    /// Votes in the order the host recorded them.
    pub votes: Vec<VoteRecord>,
}

/// Argument of the `on_publish_vote` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishVote {
    /// Name of the selected candidate.
    pub name: String,
}

impl PublishVote {
    /// Serialize to the JSON body the host command expects.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self)
            .map_err(|source| ProtocolError::Encode { channel: ON_PUBLISH_VOTE, source })
    }
}

/// A decoded message pushed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    /// Candidate snapshot.
    Languages(LanguagesPayload),
    /// Vote snapshot.
    Votes(VotesPayload),
}

impl Inbound {
    /// Decode a payload received on the named channel.
    ///
    /// # Errors
    ///
    /// - `UnknownChannel` if the widget does not listen on `channel`
    /// - `Decode` if the payload does not match the channel's shape
    pub fn decode(channel: &str, payload: &[u8]) -> Result<Self> {
        match channel.parse::<Channel>()? {
            Channel::GetLanguages => serde_json::from_slice(payload)
                .map(Self::Languages)
                .map_err(|source| ProtocolError::Decode { channel: GET_LANGUAGES, source }),
            Channel::GetVotes => serde_json::from_slice(payload)
                .map(Self::Votes)
                .map_err(|source| ProtocolError::Decode { channel: GET_VOTES, source }),
        }
    }

    /// Channel this message travels on.
    pub fn channel(&self) -> Channel {
        match self {
            Self::Languages(_) => Channel::GetLanguages,
            Self::Votes(_) => Channel::GetVotes,
        }
    }

    /// Serialize the payload body (without the channel name).
    pub fn encode(&self) -> Result<Vec<u8>> {
        let channel = self.channel().name();
        let encoded = match self {
            Self::Languages(payload) => serde_json::to_vec(payload),
            Self::Votes(payload) => serde_json::to_vec(payload),
        };
        encoded.map_err(|source| ProtocolError::Encode { channel, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_languages_in_order() {
        let inbound = Inbound::decode(
            "get_languages",
            br#"{"languages":[{"name":"Rust"},{"name":"Go"},{"name":"Elm"}]}"#,
        )
        .unwrap();

        let Inbound::Languages(payload) = inbound else { panic!("expected languages") };
        let names: Vec<_> = payload.languages.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Rust", "Go", "Elm"]);
    }

    #[test]
    fn decodes_host_vote_records_with_extra_fields() {
        let inbound = Inbound::decode(
            "get_votes",
            br#"{"votes":[{"id":0,"name":"Rust","public":false},{"name":"Go","extra":1}]}"#,
        )
        .unwrap();

        assert_eq!(
            inbound,
            Inbound::Votes(VotesPayload {
                votes: vec![
                    VoteRecord { id: Some(0), name: "Rust".into(), public: false },
                    VoteRecord::named("Go"),
                ]
            })
        );
    }

    #[test]
    fn decodes_empty_snapshots() {
        assert_eq!(
            Inbound::decode("get_votes", br#"{"votes":[]}"#).unwrap(),
            Inbound::Votes(VotesPayload::default())
        );
        assert_eq!(
            Inbound::decode("get_languages", br#"{"languages":[]}"#).unwrap(),
            Inbound::Languages(LanguagesPayload::default())
        );
    }

    #[test]
    fn rejects_unknown_channel() {
        let err = Inbound::decode("new", br#"{}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownChannel(name) if name == "new"));
    }

    #[test]
    fn rejects_malformed_payload() {
        let err = Inbound::decode("get_votes", br#"{"votes":[{"id":3}]}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::Decode { channel: "get_votes", .. }));

        let err = Inbound::decode("get_languages", b"not json").unwrap_err();
        assert!(matches!(err, ProtocolError::Decode { channel: "get_languages", .. }));
    }

    #[test]
    fn publish_vote_body() {
        let body = PublishVote { name: "Go".into() }.encode().unwrap();
        insta::assert_snapshot!(String::from_utf8(body).unwrap(), @r#"{"name":"Go"}"#);
    }

    #[test]
    fn votes_snapshot_body() {
        let inbound = Inbound::Votes(VotesPayload {
            votes: vec![
                VoteRecord { id: Some(0), name: "Rust".into(), public: false },
                VoteRecord::named("Go"),
            ],
        });
        let body = inbound.encode().unwrap();
        insta::assert_snapshot!(
            String::from_utf8(body).unwrap(),
            @r#"{"votes":[{"id":0,"name":"Rust","public":false},{"name":"Go","public":false}]}"#
        );
    }

    #[test]
    fn encoded_snapshot_decodes_on_its_channel() {
        let inbound = Inbound::Languages(LanguagesPayload {
            languages: vec![CandidateRecord { name: "Rust".into() }],
        });
        let body = inbound.encode().unwrap();
        assert_eq!(Inbound::decode(inbound.channel().name(), &body).unwrap(), inbound);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn decode_never_panics(channel in "[a-z_]{0,16}", bytes in prop::collection::vec(any::<u8>(), 0..256)) {
                let _ = Inbound::decode(&channel, &bytes);
            }

            #[test]
            fn candidate_names_survive_unchanged(names in prop::collection::vec(".{0,12}", 0..8)) {
                let payload = LanguagesPayload {
                    languages: names.iter().map(|n| CandidateRecord { name: n.clone() }).collect(),
                };
                let body = Inbound::Languages(payload.clone()).encode().unwrap();
                prop_assert_eq!(Inbound::decode("get_languages", &body).unwrap(), Inbound::Languages(payload));
            }
        }
    }
}
