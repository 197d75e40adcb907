//! Widget state and its transition function.
//!
//! # Transitions
//!
//! ```text
//!  ToggleSelection(c)      selection == Some(c) ? None : Some(c)
//!  CandidatesReplaced(cs)  candidates = cs        (selection untouched)
//!  VotesReplaced(vs)       votes = vs
//!  SubmitRequested         no change; Effect::SubmitVote(selection) if any
//! ```
//!
//! The selection is a copy of the candidate value, not a reference into
//! `candidates`. A later candidate snapshot that drops the selected candidate
//! leaves the selection in place; [`State::is_selection_listed`] reports this
//! without changing it.

use crate::{Candidate, Effect, Event, TallyRow, Vote, percentage};

/// Everything the widget knows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    selection: Option<Candidate>,
    candidates: Vec<Candidate>,
    votes: Vec<Vote>,
}

impl State {
    /// Empty state: no candidates, no votes, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection, if any.
    pub fn selection(&self) -> Option<&Candidate> {
        self.selection.as_ref()
    }

    /// Last candidate snapshot, in the order it arrived.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Last vote snapshot, in the order it arrived.
    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    /// Apply one event.
    ///
    /// Returns the effect the event asks for, if any. Only
    /// [`Event::SubmitRequested`] with a selection produces one.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::ToggleSelection(candidate) => {
                if self.is_selected(&candidate) {
                    self.selection = None;
                } else {
                    self.selection = Some(candidate);
                }
                None
            },
            Event::CandidatesReplaced(candidates) => {
                self.candidates = candidates;
                None
            },
            Event::VotesReplaced(votes) => {
                self.votes = votes;
                None
            },
            Event::SubmitRequested => self.selection.clone().map(Effect::SubmitVote),
        }
    }

    /// Number of votes cast for `candidate`, by exact name match.
    ///
    /// Works whether or not `candidate` is in the current candidate list.
    pub fn count_votes_for(&self, candidate: &Candidate) -> usize {
        self.votes.iter().filter(|vote| vote.is_for(candidate)).count()
    }

    /// Number of vote records, including votes for unlisted candidates.
    pub fn total_votes(&self) -> usize {
        self.votes.len()
    }

    /// Vote share of `candidate` in whole percent (0 when no votes exist).
    pub fn percentage(&self, candidate: &Candidate) -> u8 {
        percentage(self.count_votes_for(candidate), self.total_votes())
    }

    /// Whether `candidate` is the current selection.
    pub fn is_selected(&self, candidate: &Candidate) -> bool {
        self.selection.as_ref() == Some(candidate)
    }

    /// Whether a submission would produce a vote.
    pub fn can_submit(&self) -> bool {
        self.selection.is_some()
    }

    /// Whether the selection names a candidate in the current list.
    ///
    /// `true` when nothing is selected.
    pub fn is_selection_listed(&self) -> bool {
        self.selection.as_ref().is_none_or(|selected| self.candidates.contains(selected))
    }

    /// One row per listed candidate, in snapshot order.
    pub fn tally(&self) -> Vec<TallyRow> {
        self.candidates
            .iter()
            .map(|candidate| TallyRow {
                candidate: candidate.clone(),
                votes: self.count_votes_for(candidate),
                percentage: self.percentage(candidate),
                selected: self.is_selected(candidate),
            })
            .collect()
    }
}

/// By-value form of [`State::apply`] for callers that do not need the effect.
pub fn transition(mut state: State, event: Event) -> State {
    let _ = state.apply(event);
    state
}
