// src/statistics/mod.rs

//! Reductions over finished traces.
//!
//! Every function here is a pure function of its input slice: no shared
//! state, so the same trace may be summarized repeatedly or from several
//! threads at once.

use crate::core::HfError;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mean and population standard deviation of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary<T> {
    pub mean: T,
    pub stddev: T,
}

impl<T: Float + fmt::Display> fmt::Display for Summary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mean: {:.3}, Std: {:.3}", self.mean, self.stddev)
    }
}

/// Element count lifted into `T`, built by repeated addition so no cast can fail.
fn count<T: Float>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |n, _| n + T::one())
}

/// Arithmetic mean of all elements.
///
/// # Returns
/// * `Err(HfError::EmptySequence)` if `values` is empty.
pub fn mean<T: Float>(values: &[T]) -> Result<T, HfError> {
    if values.is_empty() {
        return Err(HfError::EmptySequence);
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    Ok(sum / count(values))
}

/// Population standard deviation (divisor N, not N - 1) around the mean.
///
/// # Returns
/// * `Err(HfError::EmptySequence)` if `values` is empty.
pub fn standard_deviation<T: Float>(values: &[T]) -> Result<T, HfError> {
    let mu = mean(values)?;
    Ok(deviation_around(values, mu))
}

fn deviation_around<T: Float>(values: &[T], mu: T) -> T {
    let squares = values.iter().fold(T::zero(), |acc, &v| {
        let d = v - mu;
        acc + d * d
    });
    (squares / count(values)).sqrt()
}

/// Computes mean and standard deviation in one pass over the mean.
pub fn summarize<T: Float>(values: &[T]) -> Result<Summary<T>, HfError> {
    let mu = mean(values)?;
    Ok(Summary { mean: mu, stddev: deviation_around(values, mu) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_constant_sequence() -> Result<(), HfError> {
        let summary = summarize(&[5.0, 5.0, 5.0, 5.0])?;
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.stddev, 0.0);
        Ok(())
    }

    #[test]
    fn test_population_divisor() -> Result<(), HfError> {
        let summary = summarize(&[1.0, 2.0, 3.0])?;
        assert_eq!(summary.mean, 2.0);
        assert!((summary.stddev - (2.0f64 / 3.0).sqrt()).abs() < TEST_TOLERANCE);
        // Sample stddev would be exactly 1.0 here
        assert!((summary.stddev - 1.0).abs() > 0.1);
        Ok(())
    }

    #[test]
    fn test_empty_sequence() {
        let empty: [f64; 0] = [];
        assert_eq!(mean(&empty), Err(HfError::EmptySequence));
        assert_eq!(standard_deviation(&empty), Err(HfError::EmptySequence));
        assert_eq!(summarize(&empty), Err(HfError::EmptySequence));
    }

    #[test]
    fn test_summarize_matches_individual_reductions() -> Result<(), HfError> {
        let values = [0.3, 1.7, -2.25, 4.0, 0.0];
        let summary = summarize(&values)?;
        assert_eq!(summary.mean, mean(&values)?);
        assert_eq!(summary.stddev, standard_deviation(&values)?);
        Ok(())
    }

    #[test]
    fn test_single_precision() -> Result<(), HfError> {
        let summary = summarize(&[2.0f32, 4.0])?;
        assert_eq!(summary.mean, 3.0f32);
        assert_eq!(summary.stddev, 1.0f32);
        Ok(())
    }

    #[test]
    fn test_display_three_decimals() {
        let summary = Summary { mean: 1.23456, stddev: 0.5 };
        assert_eq!(summary.to_string(), "Mean: 1.235, Std: 0.500");
    }
}
