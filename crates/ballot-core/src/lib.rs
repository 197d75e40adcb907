//! Ballot widget core logic
//!
//! Pure state machine for the voting widget, completely decoupled from I/O.
//!
//! # Architecture
//!
//! A single owned [`State`] holds the current selection and the last candidate
//! and vote snapshots. It changes only through [`State::apply`] (or the
//! by-value [`transition`]), one [`Event`] at a time. Transitions never fail
//! and never perform effects; the one outbound intent (casting a vote) is
//! returned to the caller as an [`Effect`] for a runtime to execute.
//!
//! Everything the view needs is derived on demand by the query methods on
//! [`State`]; vote counts and percentages are never stored.
//!
//! # Components
//!
//! - [`candidate`]: candidate and vote values
//! - [`event`]: inbound events and outbound effects
//! - [`state`]: the state and its transition function
//! - [`tally`]: vote share arithmetic and the tally projection

pub mod candidate;
pub mod event;
pub mod state;
pub mod tally;

pub use candidate::{Candidate, Vote};
pub use event::{Effect, Event};
pub use state::{State, transition};
pub use tally::{TallyRow, percentage};
