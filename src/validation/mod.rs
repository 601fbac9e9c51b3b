// src/validation/mod.rs

//! Validates configurations before a run and checks trace invariants after one.

use crate::core::{HfError, SimulationConfig};
use crate::simulation::SimulationResult;

// --- Helper Functions ---

fn require_finite(field: &'static str, value: f64) -> Result<(), HfError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(HfError::invalid(field, format!("must be finite, got {}", value)))
    }
}

fn violation(time: usize, message: String) -> HfError {
    HfError::InvariantViolation { time, message }
}

// --- Public Validation Functions ---

/// Checks a configuration before any step executes.
///
/// Rejects non-finite numeric fields and non-positive step counts. The first
/// offending field, in declaration order, is reported. Orderings such as
/// `reset_value >= reset_threshold` are accepted as-is.
///
/// # Returns
/// * `Ok(())` if the configuration can be run.
/// * `Err(HfError::InvalidConfiguration)` naming the offending field otherwise.
pub fn validate_config(config: &SimulationConfig) -> Result<(), HfError> {
    require_finite("science_factor", config.science_factor)?;
    require_finite("initial_hf", config.initial_hf)?;
    require_finite("growth_rate", config.growth_rate)?;
    require_finite("reset_threshold", config.reset_threshold)?;
    require_finite("reset_value", config.reset_value)?;
    if config.step_count <= 0 {
        return Err(HfError::invalid(
            "step_count",
            format!("must be positive, got {}", config.step_count),
        ));
    }
    Ok(())
}

/// Checks that both traces hold exactly `step_count` entries.
pub fn check_trace_lengths(result: &SimulationResult, config: &SimulationConfig) -> Result<(), HfError> {
    let expected = usize::try_from(config.step_count).unwrap_or(0);
    let (hf_len, ep_len) = (result.hf_trace().len(), result.ep_trace().len());
    if hf_len != expected || ep_len != expected {
        return Err(violation(
            hf_len.min(ep_len),
            format!("trace lengths Hf={} EP={} differ from step count {}", hf_len, ep_len, expected),
        ));
    }
    Ok(())
}

/// Checks `ep[t] == science_factor + hf[t]` exactly at every step.
pub fn check_ep_derivation(result: &SimulationResult, config: &SimulationConfig) -> Result<(), HfError> {
    for (t, (&hf, &ep)) in result.hf_trace().iter().zip(result.ep_trace()).enumerate() {
        let expected = config.ep_for(hf);
        if ep.to_bits() != expected.to_bits() {
            return Err(violation(t, format!("EP {} != Sc + Hf = {}", ep, expected)));
        }
    }
    Ok(())
}

/// Checks that reset events are in strictly increasing time order, lie
/// inside the trace, and carry exactly `reset_value`.
pub fn check_reset_exactness(result: &SimulationResult, config: &SimulationConfig) -> Result<(), HfError> {
    let mut previous: Option<usize> = None;
    for &t in result.reset_events() {
        if previous.is_some_and(|p| p >= t) {
            return Err(violation(t, "reset events are not strictly increasing".to_string()));
        }
        previous = Some(t);

        let hf = result
            .hf_trace()
            .get(t)
            .ok_or_else(|| violation(t, "reset event outside the trace".to_string()))?;
        if hf.to_bits() != config.reset_value.to_bits() {
            return Err(violation(t, format!("Hf {} after reset != reset value {}", hf, config.reset_value)));
        }
    }
    Ok(())
}

/// Checks that no stored Hf exceeds the threshold.
///
/// Only meaningful when `reset_value < reset_threshold`; for any other
/// ordering the reset itself may store a value above the threshold, so the
/// check passes trivially.
pub fn check_boundedness(result: &SimulationResult, config: &SimulationConfig) -> Result<(), HfError> {
    if config.reset_value >= config.reset_threshold {
        return Ok(());
    }
    match result.hf_trace().iter().position(|&hf| hf > config.reset_threshold) {
        Some(t) => Err(violation(
            t,
            format!("Hf {} exceeds threshold {}", result.hf_trace()[t], config.reset_threshold),
        )),
        None => Ok(()),
    }
}

/// Runs every post-run check against a finished result.
pub fn validate_result(result: &SimulationResult, config: &SimulationConfig) -> Result<(), HfError> {
    check_trace_lengths(result, config)?;
    check_ep_derivation(result, config)?;
    check_reset_exactness(result, config)?;
    check_boundedness(result, config)?;
    Ok(())
}
