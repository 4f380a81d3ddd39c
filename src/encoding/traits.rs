//! encoding::traits — the capability set an encoding model exposes.
//!
//! Purpose
//! -------
//! Define [`EncodingModel`], the seam between a parametric model of neural
//! responses and the estimators that consume it. A model maps scalar
//! stimuli to noiseless per-unit predictions and, together with a residual
//! distribution, to response likelihoods.
//!
//! Key behaviors
//! -------------
//! - Five operations mirror what an estimator needs: the parameter table,
//!   the optional weight table, a residual-distribution factory, a
//!   noiseless prediction, and a likelihood of observed responses.
//! - `residual_dist` and `likelihood` have default implementations built on
//!   [`ResidualDist`], so a model only has to provide its parameters and a
//!   prediction function.
//! - `&M` implements [`EncodingModel`] whenever `M` does, so estimators can
//!   either own or borrow their model.
//!
//! Conventions
//! -----------
//! - Stimuli are a 1-D array of length `k`.
//! - Predictions are shaped `(k, n_units)`.
//! - Simulated responses are shaped `(n_samples, k, n_units)`; likelihoods
//!   are shaped `(n_samples, k)`.
//! - Parameters and weights are passed explicitly so callers may evaluate
//!   the model at tables other than the fitted ones.

use crate::encoding::errors::{ModelError, ModelResult};
use crate::noise::{cholesky::CholeskyFactor, residual_dist::ResidualDist};
use ndarray::{Array2, ArrayView1, ArrayView2, ArrayView3, Axis};

/// EncodingModel — parametric stimulus → response model with residual noise.
pub trait EncodingModel {
    /// Parameter table, one row per unit (or basis function), read-only.
    fn parameters(&self) -> ArrayView2<'_, f64>;

    /// Optional weight table mapping basis functions onto units.
    ///
    /// Models without weights return `None`; downstream calls then receive
    /// `None` as well rather than a substituted default.
    fn weights(&self) -> Option<ArrayView2<'_, f64>> {
        None
    }

    /// Number of response units; defaults to the parameter table's rows.
    fn n_units(&self) -> usize {
        self.parameters().nrows()
    }

    /// Residual distribution over `n_units` correlated units.
    ///
    /// # Errors
    /// Propagates [`ResidualDist::new`] failures (unit-count mismatch,
    /// invalid `dof`) as [`ModelError::Noise`].
    fn residual_dist(
        &self, n_units: usize, omega_chol: &CholeskyFactor, dof: Option<f64>,
    ) -> ModelResult<ResidualDist> {
        Ok(ResidualDist::new(n_units, omega_chol, dof)?)
    }

    /// Noiseless predictions for every stimulus, shaped `(k, n_units)`.
    fn predict(
        &self, stimuli: ArrayView1<f64>, parameters: ArrayView2<f64>,
        weights: Option<ArrayView2<f64>>,
    ) -> ModelResult<Array2<f64>>;

    /// Likelihood of `data` given that row `j` was generated by `stimuli[j]`.
    ///
    /// Parameters
    /// ----------
    /// - `stimuli`: `ArrayView1<f64>`
    ///   Generating stimulus for each column of `data` (length `k`).
    /// - `data`: `ArrayView3<f64>`
    ///   Responses shaped `(n_samples, k, n_units)`.
    /// - `parameters`, `weights`
    ///   Tables forwarded to [`EncodingModel::predict`].
    /// - `omega_chol`, `dof`
    ///   Residual law forwarded to [`EncodingModel::residual_dist`].
    ///
    /// Returns
    /// -------
    /// `ModelResult<Array2<f64>>`
    ///   Densities `p(data[i, j] | stimuli[j])`, shaped `(n_samples, k)`.
    ///
    /// Errors
    /// ------
    /// - `ModelError::PredictionShapeMismatch` when predictions are not
    ///   `(k, n_units)` for the data provided.
    /// - Any error from `predict` or `residual_dist`.
    fn likelihood(
        &self, stimuli: ArrayView1<f64>, data: ArrayView3<f64>, parameters: ArrayView2<f64>,
        weights: Option<ArrayView2<f64>>, omega_chol: &CholeskyFactor, dof: Option<f64>,
    ) -> ModelResult<Array2<f64>> {
        let (_, n_stimuli, n_units) = data.dim();
        let predictions = self.predict(stimuli, parameters, weights)?;
        if predictions.dim() != (n_stimuli, n_units) {
            return Err(ModelError::PredictionShapeMismatch {
                expected: (n_stimuli, n_units),
                actual: predictions.dim(),
            });
        }
        let residuals = &data - &predictions.view().insert_axis(Axis(0));
        let dist = self.residual_dist(n_units, omega_chol, dof)?;
        Ok(dist.prob(residuals.view())?)
    }
}

impl<M: EncodingModel + ?Sized> EncodingModel for &M {
    fn parameters(&self) -> ArrayView2<'_, f64> {
        (**self).parameters()
    }

    fn weights(&self) -> Option<ArrayView2<'_, f64>> {
        (**self).weights()
    }

    fn n_units(&self) -> usize {
        (**self).n_units()
    }

    fn residual_dist(
        &self, n_units: usize, omega_chol: &CholeskyFactor, dof: Option<f64>,
    ) -> ModelResult<ResidualDist> {
        (**self).residual_dist(n_units, omega_chol, dof)
    }

    fn predict(
        &self, stimuli: ArrayView1<f64>, parameters: ArrayView2<f64>,
        weights: Option<ArrayView2<f64>>,
    ) -> ModelResult<Array2<f64>> {
        (**self).predict(stimuli, parameters, weights)
    }

    fn likelihood(
        &self, stimuli: ArrayView1<f64>, data: ArrayView3<f64>, parameters: ArrayView2<f64>,
        weights: Option<ArrayView2<f64>>, omega_chol: &CholeskyFactor, dof: Option<f64>,
    ) -> ModelResult<Array2<f64>> {
        (**self).likelihood(stimuli, data, parameters, weights, omega_chol, dof)
    }
}
