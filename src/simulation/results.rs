// src/simulation/results.rs
use crate::core::{HfError, StepRecord};
use crate::statistics::{self, Summary};
use serde::Serialize;
use std::fmt;

/// Upper bound on the trace capacity reserved before the first step.
const MAX_PREALLOCATED_STEPS: usize = 1 << 16;

/// Holds the traces produced by one simulation run.
///
/// The Hf and EP traces are index-aligned with step time and have no gaps.
/// `reset_events` lists, in increasing order, the steps whose growth was
/// replaced by the reset value. Only the simulator builds results, so the
/// type is serializable but not deserializable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    hf_trace: Vec<f64>,
    ep_trace: Vec<f64>,
    reset_events: Vec<usize>,
}

impl SimulationResult {
    /// Creates an empty result expecting `steps` records. Capacity is capped;
    /// longer traces grow as records arrive. (Internal visibility)
    pub(crate) fn with_capacity(steps: usize) -> Self {
        let reserved = steps.min(MAX_PREALLOCATED_STEPS);
        Self {
            hf_trace: Vec::with_capacity(reserved),
            ep_trace: Vec::with_capacity(reserved),
            reset_events: Vec::new(),
        }
    }

    /// Appends the next record. Records must arrive in time order. (Internal visibility)
    pub(crate) fn record_step(&mut self, record: &StepRecord) {
        debug_assert_eq!(record.time, self.hf_trace.len());
        self.hf_trace.push(record.hf);
        self.ep_trace.push(record.ep);
        if record.was_reset {
            self.reset_events.push(record.time);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(hf_trace: Vec<f64>, ep_trace: Vec<f64>, reset_events: Vec<usize>) -> Self {
        Self { hf_trace, ep_trace, reset_events }
    }

    /// Hf after growth and any reset, one value per step.
    pub fn hf_trace(&self) -> &[f64] {
        &self.hf_trace
    }

    /// Derived EP, one value per step.
    pub fn ep_trace(&self) -> &[f64] {
        &self.ep_trace
    }

    /// Step indices at which a reset was applied.
    pub fn reset_events(&self) -> &[usize] {
        &self.reset_events
    }

    /// Number of simulated steps.
    pub fn len(&self) -> usize {
        self.hf_trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hf_trace.is_empty()
    }

    /// Rebuilds the record for step `time`, or `None` past the end of the run.
    pub fn record(&self, time: usize) -> Option<StepRecord> {
        let hf = *self.hf_trace.get(time)?;
        let ep = *self.ep_trace.get(time)?;
        let was_reset = self.reset_events.binary_search(&time).is_ok();
        Some(StepRecord { time, hf, ep, was_reset })
    }

    /// Iterates over all records in time order.
    pub fn records(&self) -> impl Iterator<Item = StepRecord> + '_ {
        (0..self.len()).filter_map(move |t| self.record(t))
    }

    /// Mean and population standard deviation of the EP trace.
    pub fn ep_summary(&self) -> Result<Summary<f64>, HfError> {
        statistics::summarize(&self.ep_trace)
    }

    /// Mean and population standard deviation of the Hf trace.
    pub fn hf_summary(&self) -> Result<Summary<f64>, HfError> {
        statistics::summarize(&self.hf_trace)
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Results:")?;
        writeln!(f, "  Steps: {}", self.len())?;
        match self.ep_summary() {
            Ok(summary) => writeln!(f, "  EP {}", summary)?,
            Err(_) => writeln!(f, "  EP: no steps recorded.")?,
        }
        if self.reset_events.is_empty() {
            writeln!(f, "  No resets occurred.")?;
        } else {
            writeln!(f, "  Resets ({}):", self.reset_events.len())?;
            for &t in &self.reset_events {
                match self.hf_trace.get(t) {
                    Some(hf) => writeln!(f, "    Reset at t={}: Hf={:.2}", t, hf)?,
                    None => writeln!(f, "    Reset at t={}: outside the trace", t)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationResult {
        let mut result = SimulationResult::with_capacity(3);
        for (time, hf, was_reset) in [(0, 2.0, false), (1, 0.5, true), (2, 1.0, false)] {
            result.record_step(&StepRecord { time, hf, ep: 1.0 + hf, was_reset });
        }
        result
    }

    #[test]
    fn test_record_step_builds_aligned_traces() {
        let result = sample();
        assert_eq!(result.hf_trace(), &[2.0, 0.5, 1.0]);
        assert_eq!(result.ep_trace(), &[3.0, 1.5, 2.0]);
        assert_eq!(result.reset_events(), &[1]);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_record_lookup() {
        let result = sample();
        assert_eq!(result.record(1), Some(StepRecord { time: 1, hf: 0.5, ep: 1.5, was_reset: true }));
        assert_eq!(result.record(2).map(|r| r.was_reset), Some(false));
        assert_eq!(result.record(3), None);
        assert_eq!(result.records().count(), 3);
    }

    #[test]
    fn test_display_lists_resets() {
        let text = sample().to_string();
        assert!(text.contains("Steps: 3"));
        assert!(text.contains("Reset at t=1: Hf=0.50"));
    }

    #[test]
    fn test_display_tolerates_reset_outside_trace() {
        let result = SimulationResult::from_parts(vec![0.05], vec![1.05], vec![5]);
        let text = result.to_string();
        assert!(text.contains("Reset at t=5: outside the trace"));
        assert_eq!(result.record(5), None);
    }

    #[test]
    fn test_huge_step_count_does_not_reserve_everything() {
        let result = SimulationResult::with_capacity(usize::MAX);
        assert!(result.is_empty());
        assert!(result.hf_trace.capacity() <= 2 * MAX_PREALLOCATED_STEPS);
    }

    #[test]
    fn test_display_empty() {
        let text = SimulationResult::with_capacity(0).to_string();
        assert!(text.contains("no steps recorded"));
        assert!(text.contains("No resets occurred."));
    }
}
