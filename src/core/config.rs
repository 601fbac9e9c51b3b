// src/core/config.rs

use super::constants::hf_constants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable parameters of a single simulation run.
///
/// Fields are deliberately not clamped or reordered: a `reset_value` at or
/// above `reset_threshold` is accepted and simply makes the recurrence reset
/// on every step once growth crosses the threshold. Only non-finite numbers
/// and non-positive step counts are rejected (see `validation::validate_config`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Baseline offset of the derived EP signal.
    pub science_factor: f64,
    /// Hf before step 0. Never compared against the threshold.
    pub initial_hf: f64,
    /// Multiplicative growth per step.
    pub growth_rate: f64,
    /// Divergence trigger (strict `>`).
    pub reset_threshold: f64,
    /// Value Hf is forced to when the trigger fires.
    pub reset_value: f64,
    /// Number of steps. Signed so that bad counts can be reported rather than wrapped.
    pub step_count: i64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            science_factor: hf_constants::SCIENCE_FACTOR,
            initial_hf: hf_constants::INITIAL_HF,
            growth_rate: hf_constants::GROWTH_RATE,
            reset_threshold: hf_constants::RESET_THRESHOLD,
            reset_value: hf_constants::RESET_VALUE,
            step_count: hf_constants::STEP_COUNT,
        }
    }
}

impl SimulationConfig {
    /// Starts a builder seeded with the compiled-in defaults.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::new()
    }

    /// Derived EP value for a given Hf.
    pub fn ep_for(&self, hf: f64) -> f64 {
        self.science_factor + hf
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sc={} Hf0={} growth={} threshold={} reset={} steps={}",
            self.science_factor,
            self.initial_hf,
            self.growth_rate,
            self.reset_threshold,
            self.reset_value,
            self.step_count
        )
    }
}

/// Builder for `SimulationConfig`. Unset fields keep their compiled-in defaults.
#[derive(Debug, Default, Clone)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn science_factor(mut self, value: f64) -> Self {
        self.config.science_factor = value;
        self
    }

    pub fn initial_hf(mut self, value: f64) -> Self {
        self.config.initial_hf = value;
        self
    }

    pub fn growth_rate(mut self, value: f64) -> Self {
        self.config.growth_rate = value;
        self
    }

    pub fn reset_threshold(mut self, value: f64) -> Self {
        self.config.reset_threshold = value;
        self
    }

    pub fn reset_value(mut self, value: f64) -> Self {
        self.config.reset_value = value;
        self
    }

    pub fn step_count(mut self, value: i64) -> Self {
        self.config.step_count = value;
        self
    }

    /// Returns the configuration. Validation happens when it is run.
    pub fn build(self) -> SimulationConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = SimulationConfig::default();
        assert_eq!(config.science_factor, 1.0);
        assert_eq!(config.initial_hf, 0.05);
        assert_eq!(config.growth_rate, 1.12);
        assert_eq!(config.reset_threshold, 8.0);
        assert_eq!(config.reset_value, 0.05);
        assert_eq!(config.step_count, 200);
    }

    #[test]
    fn test_builder_overrides_only_named_fields() {
        let config = SimulationConfig::builder().step_count(10).reset_value(9.0).build();
        assert_eq!(config.step_count, 10);
        // Not clamped even though it sits above the threshold
        assert_eq!(config.reset_value, 9.0);
        assert_eq!(config.growth_rate, SimulationConfig::default().growth_rate);
    }
}
