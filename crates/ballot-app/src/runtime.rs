//! Generic orchestration loop.
//!
//! The [`Runtime`] pulls events from a [`Driver`], feeds them one at a time to
//! the [`App`], and executes the resulting actions. Events are never
//! reordered, coalesced, or debounced.
//!
//! Outbound commands are fire-and-forget: a dispatch failure is logged and the
//! loop moves on. Only failures of the event source or the renderer stop it.

use std::ops::ControlFlow;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{App, AppAction, AppEvent, Driver};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Send a `ping` before the first event so the host pushes both
    /// snapshots.
    pub request_snapshots_on_start: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { request_snapshots_on_start: true }
    }
}

/// Errors that stop the runtime.
#[derive(Debug, Error)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// The driver could not deliver events.
    #[error("event source failed: {0}")]
    Events(#[source] E),

    /// The driver could not render.
    #[error("render failed: {0}")]
    Render(#[source] E),
}

/// Dispatcher loop over a [`Driver`].
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    config: RuntimeConfig,
}

impl<D: Driver> Runtime<D> {
    /// Create a runtime with the default configuration.
    pub fn new(driver: D, app: App) -> Self {
        Self::with_config(driver, app, RuntimeConfig::default())
    }

    /// Create a runtime with an explicit configuration.
    pub fn with_config(driver: D, app: App, config: RuntimeConfig) -> Self {
        Self { driver, app, config }
    }

    /// The application state machine.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the driver.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Consume the runtime, returning its parts.
    pub fn into_parts(self) -> (D, App) {
        (self.driver, self.app)
    }

    /// Run until a quit event or until the driver's event source closes.
    pub async fn run(&mut self) -> Result<(), RuntimeError<D::Error>> {
        let result = self.run_inner().await;
        self.driver.stop();
        result
    }

    async fn run_inner(&mut self) -> Result<(), RuntimeError<D::Error>> {
        if self.start()?.is_break() {
            return Ok(());
        }

        loop {
            let Some(events) = self.driver.poll_events().await.map_err(RuntimeError::Events)?
            else {
                debug!("event source closed");
                return Ok(());
            };

            for event in events {
                if self.process(event)?.is_break() {
                    info!("quit requested");
                    return Ok(());
                }
            }
        }
    }

    /// Execute the start-up actions (initial `ping`, first render).
    ///
    /// [`Runtime::run`] calls this itself; harnesses that pump events by hand
    /// with [`Runtime::process`] call it once before the first event.
    pub fn start(&mut self) -> Result<ControlFlow<()>, RuntimeError<D::Error>> {
        for action in self.app.start(&self.config) {
            if self.execute(action)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Handle one event and execute the actions it produces.
    ///
    /// Returns `Break` if the event asked the runtime to stop.
    pub fn process(&mut self, event: AppEvent) -> Result<ControlFlow<()>, RuntimeError<D::Error>> {
        for action in self.app.handle(event) {
            if self.execute(action)?.is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn execute(&mut self, action: AppAction) -> Result<ControlFlow<()>, RuntimeError<D::Error>> {
        match action {
            AppAction::RequestSnapshots => {
                if let Err(err) = self.driver.request_snapshots() {
                    warn!(error = %err, "snapshot request failed");
                }
            },
            AppAction::PublishVote(vote) => {
                let name = vote.name.clone();
                if let Err(err) = self.driver.publish_vote(vote) {
                    warn!(candidate = %name, error = %err, "vote dispatch failed");
                }
            },
            AppAction::Render => self.driver.render(&self.app).map_err(RuntimeError::Render)?,
            AppAction::Quit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }
}
