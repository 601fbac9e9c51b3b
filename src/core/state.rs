// src/core/state.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of one transition of the recurrence.
///
/// `hf` is the value *after* growth and after any reset applied at this
/// step; the unbounded pre-reset growth value is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 0-based step index.
    pub time: usize,
    /// Hf carried out of this step.
    pub hf: f64,
    /// `science_factor + hf`.
    pub ep: f64,
    /// True iff raw growth exceeded the threshold and was replaced.
    pub was_reset: bool,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} Hf={:.4} EP={:.4}", self.time, self.hf, self.ep)?;
        if self.was_reset {
            write!(f, " (reset)")?;
        }
        Ok(())
    }
}
