//! Application layer for the ballot widget
//!
//! Bridge adapter and generic runtime around the pure [`ballot_core`] state
//! machine. The same orchestration code runs behind the terminal frontend and
//! inside the deterministic test harness.
//!
//! # Components
//!
//! - [`App`]: owns the single [`ballot_core::State`] and turns events into
//!   actions
//! - [`Bridge`]: translates host messages into core events and the core's
//!   submit intent into the outbound `on_publish_vote` command
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: the dispatcher loop over a `Driver`
//! - [`channel`]: the ordered event queue and the outbound command channel

mod action;
mod app;
mod bridge;
pub mod channel;
mod driver;
mod event;
mod runtime;

pub use action::AppAction;
pub use app::App;
pub use bridge::Bridge;
pub use channel::{EventQueue, HostCommand, HostHandle};
pub use driver::Driver;
pub use event::AppEvent;
pub use runtime::{Runtime, RuntimeConfig, RuntimeError};
