//! Compiled-in constants of the Hf recurrence.

/// Default run parameters. These seed `SimulationConfig::default()`.
pub mod hf_constants {
    /// Science factor: fixed offset of the derived EP signal.
    pub const SCIENCE_FACTOR: f64 = 1.0;
    /// Starting Hf value.
    pub const INITIAL_HF: f64 = 0.05;
    /// Multiplicative Hf growth per step.
    pub const GROWTH_RATE: f64 = 1.12;
    /// Raw growth strictly above this triggers a reset.
    pub const RESET_THRESHOLD: f64 = 8.0;
    /// Value Hf is forced to on reset.
    pub const RESET_VALUE: f64 = 0.05;
    /// Number of simulated steps.
    pub const STEP_COUNT: i64 = 200;
}

/// Fixed parameters of the oscillatory perturbation. Part of the growth
/// rule itself, never caller-configurable.
pub mod noise_constants {
    /// Amplitude of `sin(t * NOISE_FREQUENCY)`.
    pub const NOISE_AMPLITUDE: f64 = 0.1;
    /// Angular step applied to the step index.
    pub const NOISE_FREQUENCY: f64 = 0.5;
}
