//! Error handling logic

use thiserror::Error;

/// Error types raised by the simulation and its reductions.
///
/// Configuration problems are detected before the first step runs, so a
/// failed call never leaves a partial result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HfError {
    /// A configuration field is out of its valid domain.
    #[error("Invalid configuration: `{field}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending `SimulationConfig` field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A reduction was asked to summarize a zero-length sequence.
    #[error("Cannot reduce an empty sequence")]
    EmptySequence,

    /// A finished result breaks one of the trace invariants.
    #[error("Invariant violated at t={time}: {message}")]
    InvariantViolation {
        /// Step index where the violation was observed.
        time: usize,
        /// InvariantViolation failure message
        message: String,
    },

    /// A finished result could not be rendered for output.
    #[error("Serialization failed: {message}")]
    Serialization {
        /// Serialization failure message
        message: String,
    },
}

impl HfError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        HfError::InvalidConfiguration { field, reason: reason.into() }
    }

    /// Name of the offending configuration field, if this is a configuration error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            HfError::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = HfError::invalid("step_count", "must be positive, got 0");
        assert_eq!(err.to_string(), "Invalid configuration: `step_count` must be positive, got 0");
        assert_eq!(err.field(), Some("step_count"));
        assert_eq!(HfError::EmptySequence.field(), None);
    }
}
