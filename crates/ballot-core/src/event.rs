//! Events consumed and effects produced by the state machine.

use crate::{Candidate, Vote};

/// Inputs to the transition function. This is a closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User clicked a candidate: select it, or deselect it if it is the
    /// current selection.
    ToggleSelection(Candidate),

    /// A candidate snapshot arrived. Replaces the whole list.
    CandidatesReplaced(Vec<Candidate>),

    /// A vote snapshot arrived. Replaces the whole list.
    VotesReplaced(Vec<Vote>),

    /// User asked to cast a vote for the current selection.
    SubmitRequested,
}

/// Effects requested by a transition, for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Cast one vote for this candidate.
    SubmitVote(Candidate),
}
