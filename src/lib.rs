// src/lib.rs

//! `hfsim` - Hf divergence simulation with a hard reset
//!
//! A scalar "Human Factor" (Hf) grows geometrically under a deterministic
//! oscillatory perturbation and is forced back to a baseline whenever it
//! exceeds a divergence threshold. A derived signal, EP, is the science
//! factor plus the stored Hf at each step.
//!
//! The library is pure: it performs no I/O and holds no global state.
//! Reset notifications go through a caller-supplied [`ResetObserver`].

pub mod core;
pub mod simulation;
pub mod statistics;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{HfError, SimulationConfig, SimulationConfigBuilder, StepRecord};
pub use simulation::{
    NoopObserver, ResetObserver, SimulationResult, Simulator, TracingObserver, run_simulation,
};
pub use statistics::{Summary, summarize};
pub use validation::{validate_config, validate_result};

// Example: default run with a reset observer
// Runs the compiled-in configuration, collects resets through a closure and
// summarizes the EP trace.
/// ```
/// use hfsim::{HfError, SimulationConfig, Simulator};
///
/// let config = SimulationConfig::default();
/// let mut resets = Vec::new();
///
/// let result = Simulator::with_observer(|t: usize, hf: f64| resets.push((t, hf)))
///     .run(&config)?;
///
/// assert_eq!(result.hf_trace().len(), 200);
/// assert_eq!(result.ep_trace().len(), 200);
/// assert_eq!(resets.len(), result.reset_events().len());
///
/// // Every stored Hf respects the threshold, and resets carry the baseline exactly
/// assert!(result.hf_trace().iter().all(|&hf| hf <= config.reset_threshold));
/// for (t, hf) in &resets {
///     assert_eq!(result.hf_trace()[*t], *hf);
///     assert_eq!(*hf, config.reset_value);
/// }
///
/// let summary = result.ep_summary()?;
/// println!("EP {}", summary);
/// # Ok::<(), HfError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example: rejected configuration
/// ```
/// use hfsim::{HfError, SimulationConfig, run_simulation};
///
/// let config = SimulationConfig::builder().step_count(0).build();
/// match run_simulation(&config) {
///     Err(HfError::InvalidConfiguration { field, .. }) => assert_eq!(field, "step_count"),
///     other => panic!("expected a configuration error, got {:?}", other),
/// }
/// ```
#[doc(hidden)]
const _: () = ();
