// src/core/mod.rs

//! Core data structures and types

pub mod config;
pub mod error;
pub mod state;

pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::HfError;
pub use state::StepRecord;

pub mod constants;
pub use constants::noise_constants::{NOISE_AMPLITUDE, NOISE_FREQUENCY};
