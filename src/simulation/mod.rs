// src/simulation/mod.rs

//! Runs the Hf recurrence for a `SimulationConfig`.
//! This module contains the `Simulator` entry point and the internal
//! `RecurrenceEngine` that owns the growth and reset transition.

mod observer;
mod results;
pub(crate) mod engine;

pub use observer::{NoopObserver, ResetObserver, TracingObserver};
pub use results::SimulationResult;

use crate::core::{HfError, SimulationConfig};
use engine::RecurrenceEngine;

/// Drives the recurrence and forwards reset events to an observer.
///
/// The simulator holds no state between runs besides its observer, so a
/// single instance may run many configurations.
#[derive(Debug, Default)]
pub struct Simulator<O = NoopObserver> {
    observer: O,
}

impl Simulator {
    /// Creates a simulator with the no-op observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: ResetObserver> Simulator<O> {
    /// Creates a simulator that notifies `observer` on each reset.
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Runs `config.step_count` steps of the recurrence.
    ///
    /// # Returns
    /// * `Ok(SimulationResult)` with complete, index-aligned traces.
    /// * `Err(HfError::InvalidConfiguration)` if the configuration is rejected.
    ///   No step runs and the observer is not called in that case.
    pub fn run(&mut self, config: &SimulationConfig) -> Result<SimulationResult, HfError> {
        let engine = RecurrenceEngine::init(config)?;
        let mut result = SimulationResult::with_capacity(engine.steps());

        for record in engine {
            result.record_step(&record);
            if record.was_reset {
                self.observer.on_reset(record.time, record.hf);
            }
        }

        Ok(result)
    }

    /// Gives the observer back, e.g. to inspect what it collected.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

/// Runs a simulation with no observer attached.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, HfError> {
    Simulator::new().run(config)
}
