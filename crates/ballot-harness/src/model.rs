//! Reference model for model-based testing.
//!
//! [`ModelWorld`] is a deliberately naive restatement of what the widget and
//! the in-memory backend should do together, using plain strings and no
//! shared code with the real implementation. Tests apply the same
//! [`Operation`] sequence to the model and to a [`crate::World`] and compare
//! what each reports.

use std::collections::BTreeMap;

/// Operations applied to both the model and the real world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// User toggles a candidate.
    Toggle(String),
    /// User presses the vote button.
    Submit,
    /// Host replaces its catalog and pushes it.
    ReplaceCatalog(Vec<String>),
    /// Host pushes a vote snapshot that does not come from its store.
    InjectVotes(Vec<String>),
    /// Host pushes its stored votes.
    PushStoredVotes,
}

/// Reference model of widget plus backend.
#[derive(Debug, Clone, Default)]
pub struct ModelWorld {
    selection: Option<String>,
    shown_candidates: Vec<String>,
    shown_votes: Vec<String>,
    stored_votes: Vec<String>,
    published: Vec<String>,
}

impl ModelWorld {
    /// Model after start-up against a backend holding `catalog` and
    /// `initial_votes`.
    pub fn new(catalog: &[String], initial_votes: &[String]) -> Self {
        Self {
            shown_candidates: catalog.to_vec(),
            shown_votes: initial_votes.to_vec(),
            stored_votes: initial_votes.to_vec(),
            ..Self::default()
        }
    }

    /// Apply one operation.
    pub fn apply(&mut self, op: &Operation) {
        match op {
            Operation::Toggle(name) => {
                if self.selection.as_ref() == Some(name) {
                    self.selection = None;
                } else {
                    self.selection = Some(name.clone());
                }
            },
            Operation::Submit => {
                if let Some(name) = &self.selection {
                    self.published.push(name.clone());
                    self.stored_votes.push(name.clone());
                    self.shown_votes = self.stored_votes.clone();
                }
            },
            Operation::ReplaceCatalog(names) => self.shown_candidates = names.clone(),
            Operation::InjectVotes(names) => self.shown_votes = names.clone(),
            Operation::PushStoredVotes => self.shown_votes = self.stored_votes.clone(),
        }
    }

    /// Selected candidate name.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Candidate names the widget should show.
    pub fn shown_candidates(&self) -> &[String] {
        &self.shown_candidates
    }

    /// Vote count per name in the snapshot the widget should hold.
    pub fn shown_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for name in &self.shown_votes {
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Total votes in the snapshot the widget should hold.
    pub fn shown_total(&self) -> usize {
        self.shown_votes.len()
    }

    /// Names the widget should have sent, in order.
    pub fn published(&self) -> &[String] {
        &self.published
    }
}
