//! Reusable oracle helpers.

use crate::scenario::{OracleFn, World};

/// The selection is exactly `expected` (`None` for nothing selected).
pub fn selection_is(expected: Option<&str>) -> OracleFn {
    let expected = expected.map(str::to_string);
    Box::new(move |world: &World| {
        let actual = world.state().selection().map(|c| c.name().to_string());
        if actual == expected {
            Ok(())
        } else {
            Err(format!("selection: expected {expected:?}, got {actual:?}"))
        }
    })
}

/// The backend received exactly these votes, in order.
pub fn published(expected: &[&str]) -> OracleFn {
    let expected: Vec<String> = expected.iter().map(|name| (*name).to_string()).collect();
    Box::new(move |world: &World| {
        let actual: Vec<String> = world.published().into_iter().map(|vote| vote.name).collect();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("published: expected {expected:?}, got {actual:?}"))
        }
    })
}

/// The widget counts `count` votes for `name`, at `percentage` percent.
pub fn tally_of(name: &str, count: usize, percentage: u8) -> OracleFn {
    let candidate = ballot_core::Candidate::new(name);
    Box::new(move |world: &World| {
        let state = world.state();
        let actual = (state.count_votes_for(&candidate), state.percentage(&candidate));
        if actual == (count, percentage) {
            Ok(())
        } else {
            Err(format!(
                "tally of {candidate}: expected {count} votes at {percentage}%, got {} at {}%",
                actual.0, actual.1
            ))
        }
    })
}

/// Every oracle passes. Stops at the first failure.
pub fn all_of(oracles: Vec<OracleFn>) -> OracleFn {
    Box::new(move |world: &World| oracles.into_iter().try_for_each(|oracle| oracle(world)))
}
