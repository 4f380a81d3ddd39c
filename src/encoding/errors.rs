//! encoding::errors — failures raised by encoding models.
//!
//! Covers parameter-table validation, weight-table shape checks, and shape
//! disagreements between predictions and simulated data. Residual-noise
//! failures are wrapped verbatim in [`ModelError::Noise`].

use crate::noise::errors::NoiseError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for encoding-model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// ModelError — encoding-model failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Parameter table ----
    /// Parameter table has no rows.
    EmptyParameters,

    /// Parameter table has the wrong number of columns.
    ParameterWidthMismatch { expected: usize, actual: usize },

    /// A parameter entry is NaN/±∞.
    NonFiniteParameter { row: usize, label: &'static str, value: f64 },

    /// Receptive-field widths must be strictly positive.
    InvalidWidth { row: usize, value: f64 },

    // ---- Weights ----
    /// Weight table rows must match the number of basis functions.
    WeightRowsMismatch { expected: usize, actual: usize },

    /// Weight table has no columns (no units).
    EmptyWeights,

    /// A weight entry is NaN/±∞.
    NonFiniteWeight { row: usize, col: usize, value: f64 },

    // ---- Predictions / data ----
    /// Predictions are not shaped `(n_stimuli, n_units)` as the data requires.
    PredictionShapeMismatch { expected: (usize, usize), actual: (usize, usize) },

    // ---- Residual noise ----
    Noise(NoiseError),
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::EmptyParameters => {
                write!(f, "Parameter table must contain at least one row.")
            }
            ModelError::ParameterWidthMismatch { expected, actual } => {
                write!(f, "Parameter table must have {expected} columns; got {actual}.")
            }
            ModelError::NonFiniteParameter { row, label, value } => {
                write!(f, "Parameter '{label}' in row {row} is non-finite: {value}")
            }
            ModelError::InvalidWidth { row, value } => {
                write!(f, "Receptive-field width in row {row} must be > 0; got: {value}")
            }
            ModelError::WeightRowsMismatch { expected, actual } => {
                write!(
                    f,
                    "Weight table must have one row per basis function: expected {expected}, got {actual}"
                )
            }
            ModelError::EmptyWeights => {
                write!(f, "Weight table must map onto at least one unit.")
            }
            ModelError::NonFiniteWeight { row, col, value } => {
                write!(f, "Weight entry ({row}, {col}) is non-finite: {value}")
            }
            ModelError::PredictionShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Predictions must be shaped {expected:?} (stimuli, units); got {actual:?}"
                )
            }
            ModelError::Noise(err) => write!(f, "{err}"),
        }
    }
}

impl From<NoiseError> for ModelError {
    fn from(err: NoiseError) -> ModelError {
        ModelError::Noise(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<ModelError> for PyErr {
    fn from(err: ModelError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
