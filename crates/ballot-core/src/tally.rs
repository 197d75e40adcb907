//! Vote share arithmetic and the tally projection.

use crate::Candidate;

/// Share of `total` that `count` represents, in whole percent.
///
/// Rounds to nearest with halves rounding up (`1/8` is 13). When no votes have
/// been cast at all the share is reported as 0 rather than left undefined.
///
/// The result is clamped to 100, so a `count` larger than `total` cannot
/// produce an out-of-range figure.
pub fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }

    // round(count / total * 100) in integers: floor((200 * count + total) / (2 * total))
    let share = (count.saturating_mul(200).saturating_add(total)) / total.saturating_mul(2);
    share.min(100) as u8
}

/// One line of the rendered tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyRow {
    /// The candidate this row describes.
    pub candidate: Candidate,
    /// Votes cast for the candidate.
    pub votes: usize,
    /// Vote share in whole percent.
    pub percentage: u8,
    /// Whether the candidate is the current selection.
    pub selected: bool,
}
