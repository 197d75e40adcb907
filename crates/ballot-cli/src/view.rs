//! Text projection of the widget state.

use std::fmt::Write as _;

use ballot_core::State;

/// Render the tally as plain text lines, without a trailing newline.
pub fn render(state: &State) -> String {
    let rows = state.tally();
    let mut out = String::new();

    if rows.is_empty() {
        out.push_str("(waiting for candidates)\n");
    }

    let width = rows.iter().map(|row| row.candidate.name().chars().count()).max().unwrap_or(0);
    for row in &rows {
        let mark = if row.selected { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] {name:<width$}  {votes:>3} votes  {percentage:>3}%",
            name = row.candidate.name(),
            votes = row.votes,
            percentage = row.percentage,
        );
    }

    let _ = writeln!(out, "total: {} votes", state.total_votes());

    match state.selection() {
        Some(selected) if state.is_selection_listed() => {
            let _ = write!(out, "selected: {selected}");
        },
        Some(selected) => {
            let _ = write!(out, "selected: {selected} (no longer listed)");
        },
        None => out.push_str("nothing selected"),
    }

    out
}
