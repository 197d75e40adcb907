//! Terminal driver.
//!
//! Reads events from the shared [`EventQueue`], sends host commands on an
//! unbounded channel, and prints the tally to a writer after every change.

use std::io::{self, Write};

use ballot_app::{App, AppEvent, Driver, EventQueue, HostCommand};
use ballot_proto::PublishVote;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::view;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The host backend stopped accepting commands.
    #[error("host backend gone")]
    HostGone,
}

/// Driver printing to a terminal.
pub struct TerminalDriver<W> {
    events: EventQueue,
    commands: Option<mpsc::UnboundedSender<HostCommand>>,
    out: W,
}

impl<W: Write + Send> TerminalDriver<W> {
    /// Create a driver.
    pub fn new(events: EventQueue, commands: mpsc::UnboundedSender<HostCommand>, out: W) -> Self {
        Self { events, commands: Some(commands), out }
    }

    /// The output writer.
    pub fn output(&self) -> &W {
        &self.out
    }

    fn send(&self, command: HostCommand) -> Result<(), TerminalError> {
        let sender = self.commands.as_ref().ok_or(TerminalError::HostGone)?;
        sender.send(command).map_err(|_| TerminalError::HostGone)
    }
}

impl<W: Write + Send> Driver for TerminalDriver<W> {
    type Error = TerminalError;

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
        writeln!(self.out, "{}\n", view::render(app.state()))?;
        self.out.flush()?;
        Ok(())
    }

    fn stop(&mut self) {
        self.commands = None;
    }
}
