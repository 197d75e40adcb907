//! World state for scenario execution.
//!
//! The World owns the runtime under test, the backend it talks to, and both
//! channels between them. Nothing moves until the world is pumped, so tests
//! control exactly when host pushes and widget commands are delivered.

use std::ops::ControlFlow;

use ballot_app::{
    App, Driver, HostCommand, HostHandle, Runtime, RuntimeConfig,
    channel::{command_channel, event_queue},
};
use ballot_core::{State, TallyRow};
use ballot_proto::PublishVote;
use tokio::sync::mpsc;

use crate::{BackendConfig, MemoryBackend, SimDriver};

/// Runtime, backend, and the channels between them.
pub struct World {
    runtime: Runtime<SimDriver>,
    backend: MemoryBackend,
    commands: mpsc::UnboundedReceiver<HostCommand>,
    user: HostHandle,
    processed: usize,
    quit: bool,
}

impl World {
    /// Build a world. Nothing runs until [`World::start`].
    pub fn new(backend: BackendConfig, runtime: RuntimeConfig) -> Self {
        let (host, events) = event_queue();
        let (command_tx, command_rx) = command_channel();
        let driver = SimDriver::new(events, command_tx);

        Self {
            runtime: Runtime::with_config(driver, App::new(), runtime),
            backend: MemoryBackend::new(backend, host.clone()),
            commands: command_rx,
            user: host,
            processed: 0,
            quit: false,
        }
    }

    /// Run the start-up actions and settle.
    pub fn start(&mut self) -> Result<(), String> {
        let flow = self.runtime.start().map_err(|e| format!("runtime start failed: {e}"))?;
        if flow.is_break() {
            self.stop();
        }
        self.settle()
    }

    /// Handle standing in for the user and the host listeners.
    pub fn user(&self) -> &HostHandle {
        &self.user
    }

    /// Process every queued event. Returns how many were processed.
    pub fn process_events(&mut self) -> Result<usize, String> {
        let events = self.runtime.driver_mut().drain_events();
        let mut count = 0;
        for event in events {
            if self.quit {
                break;
            }
            let flow = self.runtime.process(event).map_err(|e| format!("runtime failed: {e}"))?;
            count += 1;
            if let ControlFlow::Break(()) = flow {
                self.stop();
            }
        }
        self.processed += count;
        Ok(count)
    }

    /// Deliver every pending widget command to the backend.
    pub fn deliver_commands(&mut self) -> Result<usize, String> {
        let mut count = 0;
        while let Ok(command) = self.commands.try_recv() {
            self.backend.handle(command).map_err(|e| format!("backend failed: {e}"))?;
            count += 1;
        }
        Ok(count)
    }

    /// Pump events and commands until both sides are idle.
    pub fn settle(&mut self) -> Result<(), String> {
        loop {
            let events = self.process_events()?;
            let commands = self.deliver_commands()?;
            if events == 0 && commands == 0 {
                return Ok(());
            }
        }
    }

    /// Widget state.
    pub fn state(&self) -> &State {
        self.runtime.app().state()
    }

    /// Application state machine.
    pub fn app(&self) -> &App {
        self.runtime.app()
    }

    /// The backend.
    pub fn backend(&self) -> &MemoryBackend {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut MemoryBackend {
        &mut self.backend
    }

    /// Every vote the backend received from the widget.
    pub fn published(&self) -> Vec<PublishVote> {
        self.backend.published()
    }

    /// Every rendered tally.
    pub fn frames(&self) -> &[Vec<TallyRow>] {
        self.runtime.driver().frames()
    }

    /// Number of events processed so far.
    pub fn events_processed(&self) -> usize {
        self.processed
    }

    /// Whether the runtime has stopped.
    pub fn has_quit(&self) -> bool {
        self.quit
    }

    fn stop(&mut self) {
        self.quit = true;
        self.runtime.driver_mut().stop();
    }
}
