//! encoding::gaussian_prf — Gaussian population receptive-field model.
//!
//! Purpose
//! -------
//! Provide a concrete [`EncodingModel`] for scalar stimuli: each receptive
//! field responds as
//!
//! `f(s) = baseline + amplitude · exp(-½ ((s − mu) / sd)²)`.
//!
//! Without weights every receptive field is one recorded unit. With a
//! `(n_basis × n_units)` weight table the receptive fields act as basis
//! functions and unit responses are their weighted sums, `F · W`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Parameter rows are `[mu, sd, amplitude, baseline]` with `sd > 0`, all
//!   finite (checked by [`validate_prf_parameters`]).
//! - When present, weights have one row per parameter row.
//! - `n_units` is the weight table's column count when weights are present,
//!   otherwise the parameter table's row count.

use crate::encoding::{
    errors::{ModelError, ModelResult},
    traits::EncodingModel,
    validation::{validate_prf_parameters, validate_weights},
};
use ndarray::{Array2, ArrayView1, ArrayView2};

/// GaussianPrf — Gaussian receptive fields with optional basis weights.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianPrf {
    parameters: Array2<f64>,
    weights: Option<Array2<f64>>,
}

impl GaussianPrf {
    /// Build an unweighted model from a `(n_units × 4)` parameter table.
    ///
    /// # Errors
    /// Returns the first violation found by [`validate_prf_parameters`].
    ///
    /// # Examples
    /// ```rust
    /// # use ndarray::array;
    /// # use neural_information::encoding::{EncodingModel, GaussianPrf};
    /// let model = GaussianPrf::new(array![[2.0, 1.0, 1.0, 0.0], [8.0, 1.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!(model.n_units(), 2);
    /// assert!(model.weights().is_none());
    /// ```
    pub fn new(parameters: Array2<f64>) -> ModelResult<Self> {
        validate_prf_parameters(parameters.view())?;
        Ok(GaussianPrf { parameters, weights: None })
    }

    /// Build an unweighted model from per-unit parameter vectors.
    ///
    /// # Errors
    /// - `ModelError::ParameterWidthMismatch` if the vectors differ in length
    ///   (reported against `mu.len()`).
    /// - Any error from [`GaussianPrf::new`].
    pub fn from_columns(
        mu: &[f64], sd: &[f64], amplitude: &[f64], baseline: &[f64],
    ) -> ModelResult<Self> {
        let n = mu.len();
        for other in [sd, amplitude, baseline] {
            if other.len() != n {
                return Err(ModelError::ParameterWidthMismatch {
                    expected: n,
                    actual: other.len(),
                });
            }
        }
        let parameters = Array2::from_shape_fn((n, 4), |(i, j)| match j {
            0 => mu[i],
            1 => sd[i],
            2 => amplitude[i],
            _ => baseline[i],
        });
        Self::new(parameters)
    }

    /// Attach a `(n_basis × n_units)` weight table.
    ///
    /// # Errors
    /// Returns the first violation found by [`validate_weights`].
    pub fn with_weights(mut self, weights: Array2<f64>) -> ModelResult<Self> {
        validate_weights(weights.view(), self.parameters.nrows())?;
        self.weights = Some(weights);
        Ok(self)
    }
}

impl EncodingModel for GaussianPrf {
    fn parameters(&self) -> ArrayView2<'_, f64> {
        self.parameters.view()
    }

    fn weights(&self) -> Option<ArrayView2<'_, f64>> {
        self.weights.as_ref().map(|w| w.view())
    }

    fn n_units(&self) -> usize {
        match &self.weights {
            Some(w) => w.ncols(),
            None => self.parameters.nrows(),
        }
    }

    fn predict(
        &self, stimuli: ArrayView1<f64>, parameters: ArrayView2<f64>,
        weights: Option<ArrayView2<f64>>,
    ) -> ModelResult<Array2<f64>> {
        validate_prf_parameters(parameters)?;
        let basis = gaussian_basis(stimuli, parameters);
        match weights {
            None => Ok(basis),
            Some(w) => {
                validate_weights(w, parameters.nrows())?;
                Ok(basis.dot(&w))
            }
        }
    }
}

// ---- Helper methods ----

/// Evaluate every receptive field at every stimulus, shaped `(k, n_rows)`.
fn gaussian_basis(stimuli: ArrayView1<f64>, parameters: ArrayView2<f64>) -> Array2<f64> {
    let mut out = Array2::<f64>::zeros((stimuli.len(), parameters.nrows()));
    for (mut row, &s) in out.outer_iter_mut().zip(stimuli.iter()) {
        for (y, p) in row.iter_mut().zip(parameters.rows()) {
            let z = (s - p[0]) / p[1];
            *y = p[3] + p[2] * (-0.5 * z * z).exp();
        }
    }
    out
}
