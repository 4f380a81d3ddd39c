//! noise::cholesky — lower-triangular factor of the residual covariance.
//!
//! Purpose
//! -------
//! Factorize a residual covariance `Ω = L Lᵀ` exactly once and expose the
//! handful of triangular operations that sampling and density evaluation
//! need: `L z` (colouring), `L⁻¹ x` (whitening) and `Σ log Lᵢᵢ`.
//!
//! Key behaviors
//! -------------
//! - Copy the `ndarray` covariance into a `nalgebra::DMatrix` and run its
//!   Cholesky decomposition; failure maps to
//!   [`NoiseError::NotPositiveDefinite`].
//! - Keep the factor as a `DMatrix` for triangular solves
//!   (`solve_lower_triangular`) and mirror it in `ndarray` form for
//!   colouring batches of draws.
//! - Cache `Σ log Lᵢᵢ` (half the log-determinant of `Ω`).
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower` is `d×d`, lower-triangular, with strictly positive diagonal.
//! - `Ω` is checked for symmetry before factorizing, so the lower triangle
//!   read by the decomposition describes the whole matrix.
//!
//! Downstream usage
//! ----------------
//! - `MutualInformationEstimator::new` builds one factor and hands it to
//!   the encoding model's residual-distribution factory and likelihood on
//!   every estimate.

use crate::noise::{
    errors::{NoiseError, NoiseResult},
    validation::validate_covariance,
};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// CholeskyFactor — `L` such that `Ω = L Lᵀ`.
#[derive(Debug, Clone, PartialEq)]
pub struct CholeskyFactor {
    factor: DMatrix<f64>,
    lower: Array2<f64>,
    half_log_det: f64,
}

impl CholeskyFactor {
    /// Factorize a residual covariance matrix.
    ///
    /// Parameters
    /// ----------
    /// - `omega`: `ArrayView2<f64>`
    ///   Symmetric positive-definite `d×d` covariance.
    ///
    /// Returns
    /// -------
    /// `NoiseResult<CholeskyFactor>`
    ///
    /// Errors
    /// ------
    /// - Any error from [`validate_covariance`] (empty, non-square,
    ///   non-finite, non-symmetric).
    /// - `NoiseError::NotPositiveDefinite` when the decomposition fails.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use neural_information::noise::cholesky::CholeskyFactor;
    /// let chol = CholeskyFactor::from_covariance(array![[4.0, 0.0], [0.0, 9.0]].view()).unwrap();
    /// assert_eq!(chol.lower()[[0, 0]], 2.0);
    /// assert_eq!(chol.lower()[[1, 1]], 3.0);
    /// ```
    pub fn from_covariance(omega: ArrayView2<f64>) -> NoiseResult<Self> {
        let dim = validate_covariance(omega)?;
        let mut omega_nalg = DMatrix::<f64>::zeros(dim, dim);
        fill_dmatrix(omega, &mut omega_nalg);

        let factor = omega_nalg.cholesky().ok_or(NoiseError::NotPositiveDefinite { dim })?.unpack();
        let lower = Array2::from_shape_fn((dim, dim), |(i, j)| factor[(i, j)]);
        let half_log_det = factor.diagonal().iter().map(|d| d.ln()).sum();

        Ok(CholeskyFactor { factor, lower, half_log_det })
    }

    /// Number of units `d`.
    pub fn dim(&self) -> usize {
        self.lower.nrows()
    }

    /// The lower-triangular factor `L`.
    pub fn lower(&self) -> ArrayView2<'_, f64> {
        self.lower.view()
    }

    /// `Σᵢ log Lᵢᵢ = ½ log det Ω`.
    pub fn half_log_det(&self) -> f64 {
        self.half_log_det
    }

    /// Reconstruct `Ω = L Lᵀ`.
    pub fn covariance(&self) -> Array2<f64> {
        self.lower.dot(&self.lower.t())
    }

    /// Colour a standard-normal draw: `L z`.
    ///
    /// # Panics
    /// Panics if `z.len() != self.dim()`; callers check widths first.
    pub fn colour(&self, z: ArrayView1<f64>) -> Array1<f64> {
        self.lower.dot(&z)
    }

    /// Whiten a residual: solve `L z = x`.
    ///
    /// # Errors
    /// Returns [`NoiseError::DimensionMismatch`] if `x.len() != self.dim()`.
    pub fn whiten(&self, x: ArrayView1<f64>) -> NoiseResult<Array1<f64>> {
        let dim = self.dim();
        if x.len() != dim {
            return Err(NoiseError::DimensionMismatch { expected: dim, actual: x.len() });
        }
        let z = self
            .factor
            .solve_lower_triangular(&to_dvector(x))
            .ok_or(NoiseError::NotPositiveDefinite { dim })?;
        Ok(Array1::from_iter(z.iter().copied()))
    }

    /// Squared norm of the whitened residual, `‖L⁻¹ x‖²`.
    ///
    /// Callers guarantee `x.len() == self.dim()`. NaN if the solve fails,
    /// which a positive diagonal rules out.
    pub(crate) fn whitened_norm_sq(&self, x: ArrayView1<f64>) -> f64 {
        self.factor
            .solve_lower_triangular(&to_dvector(x))
            .map_or(f64::NAN, |z| z.norm_squared())
    }
}

// ---- Helper methods ----

fn to_dvector(x: ArrayView1<f64>) -> DVector<f64> {
    DVector::from_iterator(x.len(), x.iter().copied())
}

/// Copy a square `ndarray` matrix into a preallocated `DMatrix`.
fn fill_dmatrix(src: ArrayView2<f64>, dst: &mut DMatrix<f64>) {
    for ((i, j), &value) in src.indexed_iter() {
        dst[(i, j)] = value;
    }
}
