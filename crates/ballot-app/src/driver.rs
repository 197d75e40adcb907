//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use ballot_proto::PublishVote;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`crate::Runtime`] handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal frontend and in
/// simulation.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next events, in arrival order.
    ///
    /// Returns `Ok(None)` when the event source is closed for good.
    fn poll_events(
        &mut self,
    ) -> impl Future<Output = Result<Option<Vec<AppEvent>>, Self::Error>> + Send;

    /// Ask the host to push both snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be dispatched.
    fn request_snapshots(&mut self) -> Result<(), Self::Error>;

    /// Dispatch `on_publish_vote` without waiting for the host.
    ///
    /// # Errors
    ///
    /// Returns an error if the command could not be dispatched. The runtime
    /// logs it and carries on; there is no retry.
    fn publish_vote(&mut self, vote: PublishVote) -> Result<(), Self::Error>;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop and clean up resources.
    fn stop(&mut self);
}
