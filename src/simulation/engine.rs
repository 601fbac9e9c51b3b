// src/simulation/engine.rs
use crate::core::{HfError, NOISE_AMPLITUDE, NOISE_FREQUENCY, SimulationConfig, StepRecord};
use crate::validation::validate_config;

/// Deterministic oscillatory perturbation added at step `t`.
pub(crate) fn perturbation(t: usize) -> f64 {
    NOISE_AMPLITUDE * (t as f64 * NOISE_FREQUENCY).sin()
}

/// Unbounded growth of `hf_prev` over step `t`, before the divergence check.
pub(crate) fn raw_growth(hf_prev: f64, growth_rate: f64, t: usize) -> f64 {
    hf_prev * growth_rate + perturbation(t)
}

/// The state machine that advances Hf one step at a time.
///
/// Carries only the current Hf and the next step index. Yields exactly
/// `step_count` records and then stops. Each transition:
/// 1. grows Hf and adds the perturbation for `t`,
/// 2. replaces the result with `reset_value` if it is strictly above
///    `reset_threshold` (equality does not reset),
/// 3. derives EP from the stored value.
///
/// (Internal visibility)
pub(crate) struct RecurrenceEngine<'a> {
    config: &'a SimulationConfig,
    /// Hf carried into the next step.
    hf: f64,
    /// Index of the next step to emit.
    time: usize,
    /// Total number of steps, validated positive.
    steps: usize,
}

impl<'a> RecurrenceEngine<'a> {
    /// Validates `config` and positions the engine before step 0.
    pub(crate) fn init(config: &'a SimulationConfig) -> Result<Self, HfError> {
        validate_config(config)?;
        let steps = usize::try_from(config.step_count)
            .map_err(|_| HfError::invalid("step_count", "does not fit in the address space"))?;
        Ok(Self { config, hf: config.initial_hf, time: 0, steps })
    }

    /// Number of steps this engine will emit in total.
    pub(crate) fn steps(&self) -> usize {
        self.steps
    }

    /// Hf currently carried by the engine.
    #[cfg(test)]
    pub(crate) fn hf(&self) -> f64 {
        self.hf
    }

    /// Applies one transition unconditionally and returns its record.
    pub(crate) fn advance(&mut self) -> StepRecord {
        let t = self.time;
        let raw = raw_growth(self.hf, self.config.growth_rate, t);
        let was_reset = raw > self.config.reset_threshold;
        let hf = if was_reset { self.config.reset_value } else { raw };

        self.hf = hf;
        self.time += 1;
        StepRecord { time: t, hf, ep: self.config.ep_for(hf), was_reset }
    }
}

impl Iterator for RecurrenceEngine<'_> {
    type Item = StepRecord;

    fn next(&mut self) -> Option<StepRecord> {
        if self.time >= self.steps {
            return None;
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.saturating_sub(self.time);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecurrenceEngine<'_> {}
