//! Candidate and vote values.

use std::fmt;

/// An item voters can select and vote for.
///
/// Identity is the name, compared exactly (case-sensitive, no trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Candidate {
    name: String,
}

impl Candidate {
    /// Create a candidate with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Candidate name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Candidate {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Candidate {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single cast ballot.
///
/// Carries only the name it was cast for: no voter identity, no timestamp.
/// Two votes for the same candidate are indistinguishable and both count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vote {
    candidate_name: String,
}

impl Vote {
    /// A vote cast for the named candidate.
    pub fn new(candidate_name: impl Into<String>) -> Self {
        Self { candidate_name: candidate_name.into() }
    }

    /// Name the vote was cast for.
    pub fn candidate_name(&self) -> &str {
        &self.candidate_name
    }

    /// Whether this vote counts towards `candidate`.
    pub fn is_for(&self, candidate: &Candidate) -> bool {
        self.candidate_name == candidate.name
    }
}

impl From<&Candidate> for Vote {
    fn from(candidate: &Candidate) -> Self {
        Self::new(candidate.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_equality_is_by_exact_name() {
        assert_eq!(Candidate::new("Rust"), Candidate::from("Rust"));
        assert_ne!(Candidate::new("Rust"), Candidate::new("rust"));
        assert_ne!(Candidate::new("Rust"), Candidate::new("Rust "));
    }

    #[test]
    fn vote_matches_exact_name_only() {
        let rust = Candidate::new("Rust");
        assert!(Vote::new("Rust").is_for(&rust));
        assert!(!Vote::new("RUST").is_for(&rust));
        assert!(!Vote::new(" Rust").is_for(&rust));
    }
}
