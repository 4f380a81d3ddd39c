//! information — Monte Carlo mutual information between stimuli and responses.
//!
//! Purpose
//! -------
//! Quantify how much a simulated population response tells about the
//! stimulus that caused it. Given an [`EncodingModel`](crate::encoding::EncodingModel),
//! a finite stimulus grid with a uniform prior, and a residual covariance
//! `Ω`, [`MutualInformationEstimator`] returns a plug-in Monte Carlo estimate
//! of `I(S; X)` in bits.
//!
//! Key behaviors
//! -------------
//! - [`StimulusGrid`] coerces flat or single-column stimulus arrays and
//!   rejects multi-dimensional stimuli as not implemented.
//! - [`MutualInformationEstimator::new`] validates inputs and factorizes `Ω`
//!   once; every estimate reuses that factor.
//! - [`MutualInformationEstimator::estimate_mi`] draws all randomness from
//!   a caller-supplied generator, so a fixed seed reproduces an estimate
//!   exactly. [`MIOptions`] bundles the sample count and seed.
//! - [`MIOutcome`] reports the estimate with its Monte Carlo standard error
//!   and a count of non-finite sample contributions.
//!
//! Invariants & assumptions
//! ------------------------
//! - Stimuli are scalar and the prior over the grid is uniform (`1/k`).
//! - Densities are never clamped; underflow shows up as a non-finite
//!   estimate, not as an error.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use neural_information::encoding::GaussianPrf;
//! use neural_information::information::prelude::*;
//! use ndarray::Array2;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let model = GaussianPrf::from_columns(&[2.0, 8.0], &[2.5, 2.5], &[10.0, 10.0], &[0.0, 0.0])?;
//! let omega = Array2::<f64>::eye(2);
//! let est = MutualInformationEstimator::new(&model, vec![0.0, 2.5, 5.0, 7.5, 10.0], omega.view(), None)?;
//!
//! let mi = est.estimate_mi(1000, &mut StdRng::seed_from_u64(0))?;
//! assert!(mi.is_finite());
//! # Ok::<(), MIError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`estimator`] cross-check the vectorized computation
//!   against a direct loop, and cover reproducibility, the zero-information
//!   limit, monotonicity in noise, and shape errors.
//! - `tests/integration_mi_pipeline.rs` exercises the public surface end to
//!   end.

pub mod errors;
pub mod estimator;
pub mod options;
pub mod outcome;
pub mod stimulus;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{MIError, MIResult};
pub use self::estimator::MutualInformationEstimator;
pub use self::options::{DEFAULT_N_SAMPLES, MIOptions};
pub use self::outcome::MIOutcome;
pub use self::stimulus::StimulusGrid;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use neural_information::information::prelude::*;
//
// to import the main estimation surface in a single line.

pub mod prelude {
    pub use super::errors::{MIError, MIResult};
    pub use super::estimator::MutualInformationEstimator;
    pub use super::options::MIOptions;
    pub use super::outcome::MIOutcome;
    pub use super::stimulus::StimulusGrid;
}
