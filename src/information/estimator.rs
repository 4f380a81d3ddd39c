//! information::estimator — Monte Carlo mutual information for encoding models.
//!
//! Purpose
//! -------
//! Estimate the mutual information (in bits) between a discretized scalar
//! stimulus `S`, uniform over a finite grid, and the response `X` simulated
//! from an [`EncodingModel`] with correlated residual noise.
//!
//! Key behaviors
//! -------------
//! - At construction: coerce the stimulus grid, reject multi-dimensional
//!   stimuli, record the unit count and uniform prior, factorize the noise
//!   covariance `Ω` once, and snapshot the model's weights.
//! - Per estimate:
//!   1. draw `n` residual vectors `εᵢ` from the model's residual law;
//!   2. simulate `x_{ij} = f(s_j) + εᵢ` for every grid stimulus `s_j`;
//!   3. `p_joint[i, j] = p(x_{ij} | s_j) · p_s` via the model likelihood;
//!   4. `p_data[i, j] = (1/k) Σ_h p_ε(x_{ij} − f(s_h))`;
//!   5. `MI = (1/n) Σ_{i,j} p_joint · log2(p_joint / (p_data · p_s))`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The grid prior is uniform, `p_s = 1/k`; step 4 divides by the literal
//!   hypothetical count, which coincides with the prior weighting only
//!   because of that.
//! - The Cholesky factor of `Ω` is computed once and never per estimate.
//! - Estimation takes `&self`; the estimator is never mutated after
//!   construction. All randomness comes from the caller's generator.
//!
//! Conventions
//! -----------
//! - Densities are not clamped. If `p_data` underflows to zero the
//!   estimate becomes non-finite; this is reported through
//!   [`MIOutcome::n_non_finite`] and a `warn` log record, not as an error.
//! - `p_joint` is a density times `p_s`, not a probability, so the estimate
//!   is not capped by the stimulus entropy `log2(k)`. When residual
//!   densities exceed 1 (small `Ω`) it grows without bound.
//! - Working arrays: noise `(n, u)`, predictions `(k, u)`, simulated data
//!   `(n, k, u)`, residuals against every hypothesis `(n, k, k, u)`.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use ndarray::array;
//! use neural_information::encoding::GaussianPrf;
//! use neural_information::information::{MIOptions, MutualInformationEstimator, StimulusGrid};
//!
//! let model = GaussianPrf::from_columns(&[2.0, 8.0], &[2.5, 2.5], &[10.0, 10.0], &[0.0, 0.0])?;
//! let grid = StimulusGrid::linspace(0.0, 10.0, 5)?;
//! let omega = array![[1.0, 0.0], [0.0, 1.0]];
//!
//! let estimator = MutualInformationEstimator::new(model, grid, omega.view(), None)?;
//! let outcome = estimator.estimate_mi_with(&MIOptions::new(2000, Some(7))?)?;
//! assert!(outcome.mi().is_finite() && outcome.mi() >= 0.0);
//! # Ok::<(), neural_information::information::MIError>(())
//! ```

use crate::encoding::traits::EncodingModel;
use crate::information::{
    errors::{MIError, MIResult},
    options::{MIOptions, validate_sample_count},
    outcome::MIOutcome,
    stimulus::StimulusGrid,
};
use crate::noise::{cholesky::CholeskyFactor, validation::validate_dof};
use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// MutualInformationEstimator — plug-in Monte Carlo MI estimator.
///
/// Fields
/// ------
/// - `model`: `M`
///   Encoding model (owned, or borrowed via `&M`).
/// - `stimulus_range`: [`StimulusGrid`]
///   Finite hypothesis space of scalar stimuli.
/// - `n_units`: `usize`
///   Response width recorded from the model.
/// - `p_stimulus`: `f64`
///   Uniform prior `1/k`.
/// - `omega_chol`: [`CholeskyFactor`]
///   Factor of the residual covariance, computed once.
/// - `dof`: `Option<f64>`
///   `None` for Gaussian residuals, `Some(ν)` for Student's-t.
/// - `weights`: `Option<Array2<f64>>`
///   Snapshot of the model's weights at construction, or `None`.
#[derive(Debug, Clone)]
pub struct MutualInformationEstimator<M: EncodingModel> {
    model: M,
    stimulus_range: StimulusGrid,
    n_units: usize,
    p_stimulus: f64,
    omega_chol: CholeskyFactor,
    dof: Option<f64>,
    weights: Option<Array2<f64>>,
}

impl<M: EncodingModel> MutualInformationEstimator<M> {
    /// Build an estimator for `model` over `stimulus_range`.
    ///
    /// Parameters
    /// ----------
    /// - `model`: `M`
    ///   Any [`EncodingModel`]; pass `&model` to keep ownership.
    /// - `stimulus_range`: `S`
    ///   Anything convertible into a [`StimulusGrid`]: a grid, a flat
    ///   `&[f64]`/`Vec<f64>`/`Array1<f64>`, or a single-column `Array2<f64>`.
    /// - `omega`: `ArrayView2<f64>`
    ///   Residual covariance, `n_units × n_units`, positive-definite.
    /// - `dof`: `Option<f64>`
    ///   Degrees of freedom for Student's-t residuals; `None` for Gaussian.
    ///
    /// Errors
    /// ------
    /// - `MIError::MultidimensionalStimulus` for stimuli with more than one
    ///   column (not implemented).
    /// - `MIError::EmptyStimulusRange` / `MIError::NonFiniteStimulus`.
    /// - `MIError::Noise(NoiseError::NotPositiveDefinite)` (and the other
    ///   covariance shape checks) when `Ω` cannot be factorized.
    /// - `MIError::UnitCountMismatch` when `Ω` is not `n_units × n_units`.
    /// - `MIError::Noise(NoiseError::InvalidDof)` for non-positive `dof`.
    pub fn new<S>(
        model: M, stimulus_range: S, omega: ArrayView2<f64>, dof: Option<f64>,
    ) -> MIResult<Self>
    where
        S: TryInto<StimulusGrid>,
        MIError: From<S::Error>,
    {
        let stimulus_range: StimulusGrid = stimulus_range.try_into()?;
        let n_units = model.n_units();
        let p_stimulus = stimulus_range.p_stimulus();

        let omega_chol = CholeskyFactor::from_covariance(omega)?;
        if omega_chol.dim() != n_units {
            return Err(MIError::UnitCountMismatch {
                model_units: n_units,
                omega_dim: omega_chol.dim(),
            });
        }
        let dof = validate_dof(dof)?;
        let weights = model.weights().map(|w| w.to_owned());

        log::debug!(
            "MI estimator: {} stimuli, {} units, dof = {:?}, weighted = {}",
            stimulus_range.len(),
            n_units,
            dof,
            weights.is_some()
        );

        Ok(MutualInformationEstimator {
            model,
            stimulus_range,
            n_units,
            p_stimulus,
            omega_chol,
            dof,
            weights,
        })
    }

    /// Estimate mutual information in bits from `n` Monte Carlo samples.
    ///
    /// # Errors
    /// - `MIError::InvalidSampleCount` if `n == 0`.
    /// - Model and noise failures raised while sampling, predicting, or
    ///   evaluating likelihoods.
    pub fn estimate_mi<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> MIResult<f64> {
        Ok(self.estimate_mi_outcome(n, rng)?.mi())
    }

    /// Estimate mutual information and report Monte Carlo diagnostics.
    ///
    /// Same computation as [`estimate_mi`](Self::estimate_mi); the returned
    /// [`MIOutcome`] also carries the standard error and the number of
    /// non-finite per-sample contributions.
    pub fn estimate_mi_outcome<R: Rng + ?Sized>(
        &self, n: usize, rng: &mut R,
    ) -> MIResult<MIOutcome> {
        let contributions = self.sample_contributions(n, rng)?;
        let outcome = MIOutcome::from_contributions(contributions.view());

        if outcome.n_non_finite() > 0 {
            log::warn!(
                "MI estimate has {} non-finite sample contributions out of {}; \
                 the marginal density likely underflowed",
                outcome.n_non_finite(),
                n
            );
        }
        log::debug!(
            "MI estimate: {:.6} bits (se {:.6}, n = {})",
            outcome.mi(),
            outcome.std_error(),
            n
        );
        Ok(outcome)
    }

    /// Estimate mutual information with [`MIOptions`].
    ///
    /// Seeds a `StdRng` from `opts.random_seed`, or from OS entropy when it
    /// is `None`, and draws `opts.n_samples` samples.
    pub fn estimate_mi_with(&self, opts: &MIOptions) -> MIResult<MIOutcome> {
        let mut rng = match opts.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.estimate_mi_outcome(opts.n_samples, &mut rng)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn stimulus_range(&self) -> &StimulusGrid {
        &self.stimulus_range
    }

    pub fn n_units(&self) -> usize {
        self.n_units
    }

    /// Uniform prior probability of each grid stimulus, `1/k`.
    pub fn p_stimulus(&self) -> f64 {
        self.p_stimulus
    }

    pub fn omega_chol(&self) -> &CholeskyFactor {
        &self.omega_chol
    }

    pub fn dof(&self) -> Option<f64> {
        self.dof
    }

    /// Weight snapshot taken at construction.
    pub fn weights(&self) -> Option<ArrayView2<'_, f64>> {
        self.weights.as_ref().map(|w| w.view())
    }

    // Per-sample contributions cᵢ = Σⱼ p_joint[i, j] · log2(p_joint / (p_data · p_s)).
    fn sample_contributions<R: Rng + ?Sized>(
        &self, n: usize, rng: &mut R,
    ) -> MIResult<Array1<f64>> {
        let n = validate_sample_count(n)?;
        let parameters = self.model.parameters();
        let weights = self.weights();
        let stimuli = self.stimulus_range.values();
        let k = stimuli.len();

        let resid_dist = self.model.residual_dist(self.n_units, &self.omega_chol, self.dof)?;
        let noise = resid_dist.sample(n, rng)?;

        let predictions = self.model.predict(stimuli, parameters, weights)?;
        if predictions.dim() != (k, self.n_units) {
            return Err(MIError::PredictionShapeMismatch {
                expected: (k, self.n_units),
                actual: predictions.dim(),
            });
        }

        // n samples x actual stimuli x units
        let neural_data =
            &predictions.view().insert_axis(Axis(0)) + &noise.view().insert_axis(Axis(1));

        let p_joint = self.model.likelihood(
            stimuli,
            neural_data.view(),
            parameters,
            weights,
            &self.omega_chol,
            self.dof,
        )? * self.p_stimulus;
        if p_joint.dim() != (n, k) {
            return Err(MIError::LikelihoodShapeMismatch {
                expected: (n, k),
                actual: p_joint.dim(),
            });
        }

        // n samples x simulated stimuli x hypothetical stimuli x units
        let residuals = &neural_data.view().insert_axis(Axis(2))
            - &predictions.view().insert_axis(Axis(0)).insert_axis(Axis(0));
        let p_data = resid_dist.prob(residuals.view())?.sum_axis(Axis(2)) / k as f64;

        let log_ratio = (&p_joint / &(p_data * self.p_stimulus)).mapv_into(f64::log2);
        Ok((&p_joint * &log_ratio).sum_axis(Axis(1)))
    }
}
