//! information::errors — error type for mutual-information estimation.
//!
//! Purpose
//! -------
//! Collect construction-time and estimate-time failures of the
//! mutual-information estimator under one enum, [`MIError`], wrapping the
//! lower-level [`ModelError`] and [`NoiseError`] values unchanged.
//!
//! Conventions
//! -----------
//! - Multi-dimensional stimulus spaces are reported as *not implemented*
//!   rather than as invalid input.
//! - Non-finite estimates are **not** errors; they are reported through
//!   `MIOutcome::n_non_finite` and a log warning instead.
//! - At the Python boundary every variant maps onto `ValueError`, except
//!   the not-implemented case which maps onto `NotImplementedError`.

use crate::encoding::errors::ModelError;
use crate::noise::errors::NoiseError;

#[cfg(feature = "python-bindings")]
use pyo3::{
    PyErr,
    exceptions::{PyNotImplementedError, PyValueError},
};

/// Result alias for mutual-information operations.
pub type MIResult<T> = Result<T, MIError>;

/// MIError — mutual-information estimator failures.
///
/// Variants
/// --------
/// - `MultidimensionalStimulus { n_columns }`
///   The stimulus has more than one column; only scalar stimuli are
///   implemented.
/// - `EmptyStimulusRange`
///   The stimulus grid has no points.
/// - `NonFiniteStimulus { index, value }`
///   A grid value is NaN/±∞.
/// - `InvalidGridSpec { reason }`
///   An evenly spaced grid was requested with unusable bounds or count.
/// - `InvalidSampleCount { n }`
///   The Monte Carlo sample count must be at least 1.
/// - `UnitCountMismatch { model_units, omega_dim }`
///   The model's unit count disagrees with the covariance dimension.
/// - `PredictionShapeMismatch { expected, actual }`
///   The model's predictions are not `(n_stimuli, n_units)`.
/// - `LikelihoodShapeMismatch { expected, actual }`
///   The model's likelihood is not `(n_samples, n_stimuli)`.
/// - `Model(ModelError)` / `Noise(NoiseError)`
///   Wrapped lower-level failures.
#[derive(Debug, Clone, PartialEq)]
pub enum MIError {
    // ---- Stimulus grid ----
    MultidimensionalStimulus { n_columns: usize },
    EmptyStimulusRange,
    NonFiniteStimulus { index: usize, value: f64 },
    InvalidGridSpec { reason: &'static str },

    // ---- Estimation ----
    InvalidSampleCount { n: usize },
    UnitCountMismatch { model_units: usize, omega_dim: usize },
    PredictionShapeMismatch { expected: (usize, usize), actual: (usize, usize) },
    LikelihoodShapeMismatch { expected: (usize, usize), actual: (usize, usize) },

    // ---- Wrapped ----
    Model(ModelError),
    Noise(NoiseError),
}

impl std::error::Error for MIError {}

impl std::fmt::Display for MIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MIError::MultidimensionalStimulus { n_columns } => {
                write!(
                    f,
                    "Not implemented: multi-dimensional stimuli are unsupported (got {n_columns} columns)."
                )
            }
            MIError::EmptyStimulusRange => {
                write!(f, "Stimulus range must contain at least one value.")
            }
            MIError::NonFiniteStimulus { index, value } => {
                write!(f, "Stimulus value at index {index} is non-finite: {value}")
            }
            MIError::InvalidGridSpec { reason } => {
                write!(f, "Invalid stimulus grid specification: {reason}")
            }
            MIError::InvalidSampleCount { n } => {
                write!(f, "Number of Monte Carlo samples must be >= 1; got: {n}")
            }
            MIError::UnitCountMismatch { model_units, omega_dim } => {
                write!(
                    f,
                    "Model has {model_units} units but the noise covariance is {omega_dim}x{omega_dim}."
                )
            }
            MIError::PredictionShapeMismatch { expected, actual } => {
                write!(f, "Model predictions must be shaped {expected:?}; got {actual:?}")
            }
            MIError::LikelihoodShapeMismatch { expected, actual } => {
                write!(f, "Model likelihood must be shaped {expected:?}; got {actual:?}")
            }
            MIError::Model(err) => write!(f, "{err}"),
            MIError::Noise(err) => write!(f, "{err}"),
        }
    }
}

impl From<ModelError> for MIError {
    fn from(err: ModelError) -> MIError {
        MIError::Model(err)
    }
}

impl From<NoiseError> for MIError {
    fn from(err: NoiseError) -> MIError {
        MIError::Noise(err)
    }
}

impl From<std::convert::Infallible> for MIError {
    fn from(err: std::convert::Infallible) -> MIError {
        match err {}
    }
}

#[cfg(feature = "python-bindings")]
impl From<MIError> for PyErr {
    fn from(err: MIError) -> PyErr {
        match err {
            MIError::MultidimensionalStimulus { .. } => {
                PyNotImplementedError::new_err(err.to_string())
            }
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover `Display` payloads and the `From` conversions. The
    // PyO3 conversion is left to Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The multi-dimensional stimulus error must read as "not implemented"
    // and report the offending column count.
    fn multidimensional_stimulus_reads_as_not_implemented() {
        // Arrange
        let err = MIError::MultidimensionalStimulus { n_columns: 2 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.starts_with("Not implemented"), "Got: {msg}");
        assert!(msg.contains('2'), "Got: {msg}");
    }

    #[test]
    fn wrapped_errors_keep_their_messages() {
        let noise = NoiseError::NotPositiveDefinite { dim: 2 };
        let wrapped: MIError = ModelError::from(noise.clone()).into();

        assert_eq!(wrapped, MIError::Model(ModelError::Noise(noise.clone())));
        assert_eq!(wrapped.to_string(), noise.to_string());
        assert_eq!(MIError::from(noise.clone()).to_string(), noise.to_string());
    }

    #[test]
    fn invalid_sample_count_includes_payload_in_display() {
        let msg = MIError::InvalidSampleCount { n: 0 }.to_string();
        assert!(msg.contains('0'), "Got: {msg}");
    }
}
