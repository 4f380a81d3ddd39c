//! noise — residual covariance factorization and correlated noise laws.
//!
//! Purpose
//! -------
//! Everything an encoding model needs to add, and score, correlated noise
//! across recorded units: a once-computed Cholesky factor of the residual
//! covariance `Ω`, Gaussian and Student's-t residual distributions built on
//! that factor, input guards, and the [`NoiseError`] type.
//!
//! Key behaviors
//! -------------
//! - [`CholeskyFactor::from_covariance`] validates `Ω` and fails early when it
//!   is not positive-definite.
//! - [`ResidualDist`] samples `(n, n_units)` residual blocks from an explicit
//!   RNG and evaluates densities along the last axis of arbitrary batches.
//!
//! Downstream usage
//! ----------------
//! - `encoding::EncodingModel::residual_dist` builds a [`ResidualDist`] from
//!   a [`CholeskyFactor`] and optional degrees of freedom.
//! - `information::MutualInformationEstimator` owns the factor for its whole
//!   lifetime.

pub mod cholesky;
pub mod errors;
pub mod residual_dist;
pub mod validation;

pub use self::cholesky::CholeskyFactor;
pub use self::errors::{NoiseError, NoiseResult};
pub use self::residual_dist::{ResidualDist, ResidualFamily};
