// src/simulation/observer.rs

//! Reset notification hook.
//!
//! The recurrence reports each reset through a `ResetObserver` instead of
//! printing from inside the loop. Observers are called synchronously, in
//! time order, once per reset, and cannot influence the run.

/// Receives a notification for every reset applied during a run.
pub trait ResetObserver {
    /// Called with the step index and the post-reset Hf value.
    fn on_reset(&mut self, time: usize, reset_value: f64);
}

/// Any `FnMut(usize, f64)` closure (or `&mut` to one) is an observer.
impl<F> ResetObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_reset(&mut self, time: usize, reset_value: f64) {
        self(time, reset_value)
    }
}

/// Observer that ignores every notification. The default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopObserver;

impl ResetObserver for NoopObserver {
    fn on_reset(&mut self, _time: usize, _reset_value: f64) {}
}

/// Emits each reset as a structured `tracing` event at INFO level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TracingObserver;

impl ResetObserver for TracingObserver {
    fn on_reset(&mut self, time: usize, reset_value: f64) {
        tracing::info!(time, hf = reset_value, "divergence detected, Hf reset");
    }
}
