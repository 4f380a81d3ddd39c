//! encoding — parametric stimulus → response models.
//!
//! Purpose
//! -------
//! Define the [`EncodingModel`] capability consumed by information
//! estimators, together with a concrete Gaussian population receptive-field
//! model ([`GaussianPrf`]) that may optionally mix its receptive fields into
//! units through a weight table.
//!
//! Key behaviors
//! -------------
//! - [`EncodingModel`] exposes parameters, optional weights, a residual
//!   distribution factory, noiseless predictions, and response likelihoods.
//! - Default `residual_dist`/`likelihood` implementations delegate to
//!   [`crate::noise::ResidualDist`], so new models only implement
//!   `parameters` and `predict`.
//! - Model failures are reported as [`ModelError`] and wrap noise errors.
//!
//! Conventions
//! -----------
//! - Predictions are `(n_stimuli, n_units)`; simulated data
//!   `(n_samples, n_stimuli, n_units)`; likelihoods `(n_samples, n_stimuli)`.

pub mod errors;
pub mod gaussian_prf;
pub mod traits;
pub mod validation;

pub use self::errors::{ModelError, ModelResult};
pub use self::gaussian_prf::GaussianPrf;
pub use self::traits::EncodingModel;
