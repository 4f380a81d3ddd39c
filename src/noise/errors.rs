//! noise::errors — error type for covariance factorization and residual laws.
//!
//! Purpose
//! -------
//! Describe every failure that can occur while turning a noise covariance
//! `omega` into a Cholesky factor, or while building, sampling from, and
//! evaluating a residual distribution.
//!
//! Conventions
//! -----------
//! - Matrix indices are 0-based (row, col).
//! - Messages are phrased in terms of the violated constraint rather than
//!   the low-level linear-algebra routine that detected it.
//! - At the Python boundary every variant maps onto `ValueError`.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Result alias for noise-model operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// NoiseError — covariance and residual-distribution failures.
///
/// Variants
/// --------
/// - `EmptyCovariance`
///   `omega` has zero rows or columns.
/// - `NonSquareCovariance { rows, cols }`
///   `omega` is not square.
/// - `NonFiniteCovariance { row, col, value }`
///   An entry of `omega` is NaN or ±∞.
/// - `NonSymmetricCovariance { row, col }`
///   `omega[row, col]` and `omega[col, row]` differ.
/// - `NotPositiveDefinite { dim }`
///   The Cholesky decomposition of `omega` failed.
/// - `InvalidDof { value }`
///   Degrees of freedom must be finite and strictly positive.
/// - `DimensionMismatch { expected, actual }`
///   A unit count, sample width, or residual width disagrees with the
///   dimension of the Cholesky factor.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseError {
    // ---- Covariance ----
    EmptyCovariance,
    NonSquareCovariance { rows: usize, cols: usize },
    NonFiniteCovariance { row: usize, col: usize, value: f64 },
    NonSymmetricCovariance { row: usize, col: usize },
    NotPositiveDefinite { dim: usize },

    // ---- Residual distribution ----
    InvalidDof { value: f64 },
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::error::Error for NoiseError {}

impl std::fmt::Display for NoiseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseError::EmptyCovariance => {
                write!(f, "Noise covariance must have at least one row and one column.")
            }
            NoiseError::NonSquareCovariance { rows, cols } => {
                write!(f, "Noise covariance must be square; got {rows}x{cols}.")
            }
            NoiseError::NonFiniteCovariance { row, col, value } => {
                write!(f, "Noise covariance entry ({row}, {col}) is non-finite: {value}")
            }
            NoiseError::NonSymmetricCovariance { row, col } => {
                write!(f, "Noise covariance must be symmetric; entries ({row}, {col}) and ({col}, {row}) differ.")
            }
            NoiseError::NotPositiveDefinite { dim } => {
                write!(
                    f,
                    "Noise covariance ({dim}x{dim}) is not positive-definite; Cholesky decomposition failed."
                )
            }
            NoiseError::InvalidDof { value } => {
                write!(f, "Degrees of freedom must be finite and > 0; got: {value}")
            }
            NoiseError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Residual dimension mismatch: Cholesky factor has {expected} units, got {actual}"
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<NoiseError> for PyErr {
    fn from(err: NoiseError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
