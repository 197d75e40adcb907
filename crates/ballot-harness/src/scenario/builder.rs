//! Scenario builder API.
//!
//! Provides a declarative API for constructing scenario tests that enforce
//! the Oracle Pattern.

use ballot_app::RuntimeConfig;

use crate::{
    BackendConfig,
    scenario::{OracleFn, World},
};

/// One scripted step.
#[derive(Debug, Clone)]
enum Step {
    Toggle(String),
    Submit,
    Quit,
    Emit { channel: String, payload: Vec<u8> },
    Catalog(Vec<String>),
    PushVotes,
}

/// Scenario builder.
///
/// Configure the backend, add steps, then call `.oracle()` to get a
/// [`RunnableScenario`]. The world settles after every step.
pub struct Scenario {
    name: String,
    backend: BackendConfig,
    runtime: RuntimeConfig,
    steps: Vec<Step>,
}

impl Scenario {
    /// Create a new scenario with the given name.
    ///
    /// The backend starts with the default catalog and no votes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backend: BackendConfig::default(),
            runtime: RuntimeConfig::default(),
            steps: Vec::new(),
        }
    }

    /// Set the backend's catalog.
    pub fn candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backend.candidates = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the votes the backend holds before start-up.
    pub fn votes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.backend.initial_votes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Skip the start-up `ping`; the widget starts with empty lists.
    pub fn without_initial_snapshot(mut self) -> Self {
        self.runtime.request_snapshots_on_start = false;
        self
    }

    /// User toggles a candidate.
    pub fn toggle(mut self, name: impl Into<String>) -> Self {
        self.steps.push(Step::Toggle(name.into()));
        self
    }

    /// User presses the vote button.
    pub fn submit(mut self) -> Self {
        self.steps.push(Step::Submit);
        self
    }

    /// User closes the widget.
    pub fn quit(mut self) -> Self {
        self.steps.push(Step::Quit);
        self
    }

    /// Host pushes a raw payload.
    pub fn emit(mut self, channel: impl Into<String>, payload: impl Into<Vec<u8>>) -> Self {
        self.steps.push(Step::Emit { channel: channel.into(), payload: payload.into() });
        self
    }

    /// Host replaces its catalog and pushes it.
    pub fn catalog<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step::Catalog(names.into_iter().map(Into::into).collect()));
        self
    }

    /// Host pushes its recorded votes unprompted.
    pub fn push_votes(mut self) -> Self {
        self.steps.push(Step::PushVotes);
        self
    }

    /// Set the oracle function and return a runnable scenario.
    ///
    /// The oracle is mandatory - you cannot run a scenario without
    /// verification.
    pub fn oracle(self, oracle: OracleFn) -> RunnableScenario {
        RunnableScenario { scenario: self, oracle }
    }
}

/// A scenario with an oracle function that can be executed.
pub struct RunnableScenario {
    scenario: Scenario,
    oracle: OracleFn,
}

impl RunnableScenario {
    /// Execute the scenario.
    ///
    /// Starts the runtime, settles, plays each step followed by a settle, and
    /// finally runs the oracle against the world.
    pub fn run(self) -> Result<(), String> {
        let Scenario { name, backend, runtime, steps } = self.scenario;
        let mut world = World::new(backend, runtime);

        world.start().map_err(|e| format!("Scenario '{name}': {e}"))?;

        for (index, step) in steps.into_iter().enumerate() {
            let delivered = match &step {
                Step::Toggle(candidate) => world.user().toggle(candidate.clone()),
                Step::Submit => world.user().submit(),
                Step::Quit => world.user().quit(),
                Step::Emit { channel, payload } => world.user().emit(channel, payload.clone()),
                Step::Catalog(names) => {
                    world.backend_mut().set_candidates(names.clone());
                    world.backend().push_languages().is_ok()
                },
                Step::PushVotes => world.backend().push_votes().is_ok(),
            };

            if !delivered {
                return Err(format!("Scenario '{name}': step {index} ({step:?}) could not be delivered"));
            }

            world.settle().map_err(|e| format!("Scenario '{name}': step {index} ({step:?}): {e}"))?;
        }

        (self.oracle)(&world).map_err(|e| format!("Scenario '{name}': {e}"))
    }
}
