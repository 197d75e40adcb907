//! Deterministic harness for ballot widget testing.
//!
//! An in-memory stand-in for the host shell plus a channel-backed
//! [`ballot_app::Driver`], so the production runtime can be exercised end to
//! end without a window, a process, or a clock.

#![forbid(unsafe_code)]

pub mod backend;
pub mod model;
pub mod scenario;
pub mod sim_driver;

pub use backend::{BackendConfig, BackendError, LANGUAGES, MemoryBackend};
pub use model::{ModelWorld, Operation};
pub use scenario::{OracleFn, RunnableScenario, Scenario, World};
pub use sim_driver::{SimDriver, SimError};
