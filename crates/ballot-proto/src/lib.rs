//! Wire format for the ballot widget's host shell channels.
//!
//! The host shell talks to the widget through named channels carrying JSON
//! payloads. Two channels are pushed to the widget (`get_languages` and
//! `get_votes`, each a full snapshot), and the widget invokes one command
//! (`on_publish_vote`) plus a `ping` that asks the host to push both
//! snapshots.
//!
//! This crate only knows about shapes and names. Turning payloads into state
//! transitions is the job of the application layer.
#![forbid(unsafe_code)]

pub mod channels;
pub mod errors;
pub mod payloads;

pub use channels::Channel;
pub use errors::{ProtocolError, Result};
pub use payloads::{CandidateRecord, Inbound, LanguagesPayload, PublishVote, VoteRecord, VotesPayload};
