//! Scenario testing with mandatory oracles.
//!
//! A scenario wires the production [`ballot_app::Runtime`] to the in-memory
//! backend, plays a script of user and host steps against it, and hands the
//! final [`World`] to an oracle. A scenario without an oracle cannot run.

mod builder;
pub mod oracle;
mod world;

pub use builder::{RunnableScenario, Scenario};
pub use world::World;

/// Verification function run against the final world.
pub type OracleFn = Box<dyn FnOnce(&World) -> Result<(), String>>;
