//! noise::validation — input guards for covariance matrices and dof.
//!
//! Purpose
//! -------
//! Check the cheap structural preconditions on `omega` and on the optional
//! degrees of freedom before any factorization or sampling happens, so that
//! failures surface as descriptive [`NoiseError`] values instead of opaque
//! linear-algebra results.
//!
//! Invariants & assumptions
//! ------------------------
//! - A validated covariance is non-empty, square, finite, and symmetric up
//!   to [`SYMMETRY_RTOL`]. Positive-definiteness is left to the Cholesky
//!   decomposition.
//! - A validated `dof` is finite and strictly positive.

use crate::noise::errors::{NoiseError, NoiseResult};
use ndarray::ArrayView2;

/// Relative tolerance for `|Ωᵢⱼ − Ωⱼᵢ|`, scaled by `max(1, |Ωᵢⱼ|, |Ωⱼᵢ|)`.
pub const SYMMETRY_RTOL: f64 = 1e-10;

/// Validate the shape and finiteness of a covariance matrix.
///
/// Parameters
/// ----------
/// - `omega`: `ArrayView2<f64>`
///   Candidate `d×d` residual covariance.
///
/// Returns
/// -------
/// `NoiseResult<usize>`
///   The dimension `d` on success.
///
/// Errors
/// ------
/// - `NoiseError::EmptyCovariance` when `omega` has no rows or columns.
/// - `NoiseError::NonSquareCovariance` when `rows != cols`.
/// - `NoiseError::NonFiniteCovariance` for the first NaN/±∞ entry in
///   row-major order.
/// - `NoiseError::NonSymmetricCovariance` for the first upper-triangle
///   entry that disagrees with its mirror.
pub fn validate_covariance(omega: ArrayView2<f64>) -> NoiseResult<usize> {
    let (rows, cols) = omega.dim();
    if rows == 0 || cols == 0 {
        return Err(NoiseError::EmptyCovariance);
    }
    if rows != cols {
        return Err(NoiseError::NonSquareCovariance { rows, cols });
    }
    if let Some(((row, col), &value)) = omega.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(NoiseError::NonFiniteCovariance { row, col, value });
    }
    for row in 0..rows {
        for col in (row + 1)..cols {
            let (upper, lower) = (omega[[row, col]], omega[[col, row]]);
            let scale = upper.abs().max(lower.abs()).max(1.0);
            if (upper - lower).abs() > SYMMETRY_RTOL * scale {
                return Err(NoiseError::NonSymmetricCovariance { row, col });
            }
        }
    }
    Ok(rows)
}

/// Validate optional degrees of freedom.
///
/// `None` passes through unchanged (Gaussian residuals). `Some(v)` must be
/// finite and strictly positive.
///
/// # Errors
/// Returns [`NoiseError::InvalidDof`] otherwise.
pub fn validate_dof(dof: Option<f64>) -> NoiseResult<Option<f64>> {
    match dof {
        Some(value) if !value.is_finite() || value <= 0.0 => Err(NoiseError::InvalidDof { value }),
        other => Ok(other),
    }
}
