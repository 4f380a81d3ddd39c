//! noise::residual_dist — correlated residual laws for encoding models.
//!
//! Purpose
//! -------
//! Model the cross-unit noise that is added to an encoding model's noiseless
//! predictions. Two zero-mean families are supported, both parameterized by
//! a lower-triangular scale `L` (see [`CholeskyFactor`]):
//!
//! - multivariate normal, `x = L z` with `z ~ N(0, I)`;
//! - multivariate Student's-t with `ν` degrees of freedom,
//!   `x = L z / √(g/ν)` with `g ~ χ²(ν)`.
//!
//! Key behaviors
//! -------------
//! - [`ResidualDist::sample`] draws `n` rows of residuals from an explicit,
//!   caller-owned random generator.
//! - [`ResidualDist::log_prob`] / [`ResidualDist::prob`] evaluate the joint
//!   density along the **last** axis of an array of any rank, so a batch of
//!   residuals shaped `(…, n_units)` yields densities shaped `(…)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - The last axis of every evaluated array has length `n_units`.
//! - Normalizing constants (including `½ log det Ω` and the log-gamma terms
//!   of the Student's-t law) are computed once at construction.
//!
//! Conventions
//! -----------
//! - Densities are returned as-is; they may exceed 1 and may underflow to 0.
//! - For the Student's-t family `L Lᵀ` is the *scale* matrix, not the
//!   covariance; the covariance is `ν/(ν−2) · L Lᵀ` for `ν > 2`.

use crate::noise::{
    cholesky::CholeskyFactor,
    errors::{NoiseError, NoiseResult},
    validation::validate_dof,
};
use ndarray::{Array, Array1, Array2, ArrayView, ArrayView1, Axis, RemoveAxis};
use rand::Rng;
use rand_distr::{ChiSquared, Distribution, StandardNormal};
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;

/// Residual family, selected by the presence of degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResidualFamily {
    Gaussian,
    StudentT { dof: f64 },
}

/// ResidualDist — zero-mean correlated residual distribution.
///
/// Fields
/// ------
/// - `family`: [`ResidualFamily`]
///   Gaussian or Student's-t (with its `ν`).
/// - `chol`: [`CholeskyFactor`]
///   Lower-triangular scale `L`.
/// - `log_norm`: `f64`
///   Log normalizing constant of the density.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualDist {
    family: ResidualFamily,
    chol: CholeskyFactor,
    log_norm: f64,
}

impl ResidualDist {
    /// Build the residual distribution used by an encoding model.
    ///
    /// Parameters
    /// ----------
    /// - `n_units`: `usize`
    ///   Expected response width; must equal `chol.dim()`.
    /// - `chol`: `&CholeskyFactor`
    ///   Precomputed scale factor (cloned into the distribution).
    /// - `dof`: `Option<f64>`
    ///   `None` for Gaussian residuals, `Some(ν)` with `ν > 0` for
    ///   Student's-t residuals.
    ///
    /// Errors
    /// ------
    /// - `NoiseError::DimensionMismatch` if `n_units != chol.dim()`.
    /// - `NoiseError::InvalidDof` if `ν` is non-finite or `≤ 0`.
    pub fn new(n_units: usize, chol: &CholeskyFactor, dof: Option<f64>) -> NoiseResult<Self> {
        if n_units != chol.dim() {
            return Err(NoiseError::DimensionMismatch { expected: chol.dim(), actual: n_units });
        }
        match validate_dof(dof)? {
            None => Ok(Self::gaussian(chol.clone())),
            Some(dof) => Self::student_t(chol.clone(), dof),
        }
    }

    /// Multivariate normal residuals with scale `L`.
    pub fn gaussian(chol: CholeskyFactor) -> Self {
        let d = chol.dim() as f64;
        let log_norm = -0.5 * d * (2.0 * PI).ln() - chol.half_log_det();
        ResidualDist { family: ResidualFamily::Gaussian, chol, log_norm }
    }

    /// Multivariate Student's-t residuals with scale `L` and `ν` dof.
    ///
    /// # Errors
    /// Returns [`NoiseError::InvalidDof`] unless `ν` is finite and positive.
    pub fn student_t(chol: CholeskyFactor, dof: f64) -> NoiseResult<Self> {
        validate_dof(Some(dof))?;
        let d = chol.dim() as f64;
        let log_norm = ln_gamma(0.5 * (dof + d))
            - ln_gamma(0.5 * dof)
            - 0.5 * d * (dof * PI).ln()
            - chol.half_log_det();
        Ok(ResidualDist { family: ResidualFamily::StudentT { dof }, chol, log_norm })
    }

    pub fn family(&self) -> ResidualFamily {
        self.family
    }

    pub fn n_units(&self) -> usize {
        self.chol.dim()
    }

    pub fn chol(&self) -> &CholeskyFactor {
        &self.chol
    }

    /// Draw `n` independent residual vectors.
    ///
    /// Returns
    /// -------
    /// `NoiseResult<Array2<f64>>`
    ///   Array shaped `(n, n_units)`; row `i` is the `i`-th draw.
    ///
    /// Notes
    /// -----
    /// - Consumes exactly `n_units` standard-normal draws per row, plus one
    ///   χ² draw per row for the Student's-t family, so a seeded generator
    ///   reproduces the same matrix bit-for-bit.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> NoiseResult<Array2<f64>> {
        let d = self.n_units();
        let mixing = match self.family {
            ResidualFamily::Gaussian => None,
            ResidualFamily::StudentT { dof } => Some((
                dof,
                ChiSquared::new(dof).map_err(|_| NoiseError::InvalidDof { value: dof })?,
            )),
        };

        let mut out = Array2::<f64>::zeros((n, d));
        let mut z = Array1::<f64>::zeros(d);
        for mut row in out.outer_iter_mut() {
            for zi in z.iter_mut() {
                *zi = StandardNormal.sample(rng);
            }
            let mut x = self.chol.colour(z.view());
            if let Some((dof, chi2)) = &mixing {
                let g: f64 = chi2.sample(rng);
                x *= (dof / g).sqrt();
            }
            row.assign(&x);
        }
        Ok(out)
    }

    /// Log density of a single residual vector.
    ///
    /// # Errors
    /// Returns [`NoiseError::DimensionMismatch`] if `x.len() != n_units`.
    pub fn log_density(&self, x: ArrayView1<f64>) -> NoiseResult<f64> {
        let z = self.chol.whiten(x)?;
        Ok(self.log_density_from_maha(z.dot(&z)))
    }

    /// Log density along the last axis of `x`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `ArrayView<f64, D>`
    ///   Residuals shaped `(…, n_units)`.
    ///
    /// Returns
    /// -------
    /// `NoiseResult<Array<f64, D::Smaller>>`
    ///   Log densities shaped `(…)`.
    ///
    /// Errors
    /// ------
    /// - `NoiseError::DimensionMismatch` if `x` is zero-dimensional or its
    ///   last axis is not `n_units` long.
    pub fn log_prob<D>(&self, x: ArrayView<f64, D>) -> NoiseResult<Array<f64, D::Smaller>>
    where
        D: RemoveAxis,
    {
        let d = self.n_units();
        let last = match x.shape().last() {
            Some(&len) if len == d => x.ndim() - 1,
            Some(&len) => return Err(NoiseError::DimensionMismatch { expected: d, actual: len }),
            None => return Err(NoiseError::DimensionMismatch { expected: d, actual: 0 }),
        };
        Ok(x.map_axis(Axis(last), |lane| {
            self.log_density_from_maha(self.chol.whitened_norm_sq(lane))
        }))
    }

    /// Density along the last axis of `x`; `exp` of [`Self::log_prob`].
    pub fn prob<D>(&self, x: ArrayView<f64, D>) -> NoiseResult<Array<f64, D::Smaller>>
    where
        D: RemoveAxis,
    {
        Ok(self.log_prob(x)?.mapv_into(f64::exp))
    }

    // Density as a function of the squared Mahalanobis norm `zᵀz`.
    #[inline]
    fn log_density_from_maha(&self, maha: f64) -> f64 {
        match self.family {
            ResidualFamily::Gaussian => self.log_norm - 0.5 * maha,
            ResidualFamily::StudentT { dof } => {
                let d = self.n_units() as f64;
                self.log_norm - 0.5 * (dof + d) * (maha / dof).ln_1p()
            }
        }
    }
}
