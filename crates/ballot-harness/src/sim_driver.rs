//! Channel-backed driver for simulation.
//!
//! Events come from an [`EventQueue`]; outbound commands go onto an unbounded
//! channel the [`crate::MemoryBackend`] reads. Renders are captured as tally
//! snapshots instead of being drawn.

use ballot_app::{App, AppEvent, Driver, EventQueue, HostCommand};
use ballot_core::TallyRow;
use ballot_proto::PublishVote;
use thiserror::Error;
use tokio::sync::mpsc;

/// Simulation driver errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    /// The backend stopped reading commands.
    #[error("host backend gone")]
    HostGone,
}

/// Driver connecting a runtime to in-memory channels.
#[derive(Debug)]
pub struct SimDriver {
    events: EventQueue,
    commands: Option<mpsc::UnboundedSender<HostCommand>>,
    frames: Vec<Vec<TallyRow>>,
}

impl SimDriver {
    /// Create a driver reading `events` and sending to `commands`.
    pub fn new(events: EventQueue, commands: mpsc::UnboundedSender<HostCommand>) -> Self {
        Self { events, commands: Some(commands), frames: Vec::new() }
    }

    /// Take every queued event without waiting.
    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        self.events.drain()
    }

    /// Every rendered tally, oldest first.
    pub fn frames(&self) -> &[Vec<TallyRow>] {
        &self.frames
    }

    /// Whether [`Driver::stop`] has run.
    pub fn is_stopped(&self) -> bool {
        self.commands.is_none()
    }

    fn send(&self, command: HostCommand) -> Result<(), SimError> {
        let sender = self.commands.as_ref().ok_or(SimError::HostGone)?;
        sender.send(command).map_err(|_| SimError::HostGone)
    }
}

impl Driver for SimDriver {
    type Error = SimError;

    async fn poll_events(&mut self) -> Result<Option<Vec<AppEvent>>, Self::Error> {
        Ok(self.events.next_batch().await)
    }

    fn request_snapshots(&mut self) -> Result<(), Self::Error> {
        self.send(HostCommand::Ping)
    }

    fn publish_vote(&mut self, vote: PublishVote) -> Result<(), Self::Error> {
        self.send(HostCommand::PublishVote(vote))
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.frames.push(app.state().tally());
        Ok(())
    }

    fn stop(&mut self) {
        self.commands = None;
    }
}
