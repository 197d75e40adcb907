//! Terminal frontend for the ballot widget
//!
//! A thin shell over [`ballot_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`ballot_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod commands;
pub mod input;
pub mod terminal;
pub mod view;

pub use ballot_app::{App, AppAction, AppEvent, Bridge, Driver, Runtime};
pub use commands::Command;
pub use terminal::{TerminalDriver, TerminalError};
