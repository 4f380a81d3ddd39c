//! neural_information — Monte Carlo mutual information for neural encoding models, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the mutual-information estimator to Python via the `_neural_information`
//! extension module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing class used by the `neural_information` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`encoding`, `information`, `noise`) as
//!   the public crate surface.
//! - Define the `MutualInformation` `#[pyclass]` wrapper and the `#[pymodule]`
//!   initializer for the `_neural_information` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - The Python class wraps a [`GaussianPrf`](encoding::GaussianPrf) model;
//!   Rust callers can plug any [`EncodingModel`](encoding::EncodingModel)
//!   into [`MutualInformationEstimator`](information::MutualInformationEstimator).
//!
//! Conventions
//! -----------
//! - Errors from core Rust code propagate as rich error types internally and
//!   are converted to `PyErr` values at the PyO3 boundary: `ValueError` for
//!   invalid input, `NotImplementedError` for multi-dimensional stimuli.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends directly on the inner modules and can ignore the
//!   PyO3 items guarded by the `python-bindings` feature.
//! - Library diagnostics go through the `log` facade; install any logger
//!   (e.g. `env_logger`) in the host application to see them.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by `tests/integration_mi_pipeline.rs`.

pub mod encoding;
pub mod information;
pub mod noise;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use rand::{SeedableRng, rngs::StdRng};

#[cfg(feature = "python-bindings")]
use crate::{
    encoding::gaussian_prf::GaussianPrf,
    information::{estimator::MutualInformationEstimator, options::DEFAULT_N_SAMPLES},
    utils::{build_gaussian_prf, extract_f64_matrix, extract_stimulus_range},
};

/// MutualInformation — Python-facing wrapper for the Monte Carlo MI estimator.
///
/// Purpose
/// -------
/// Expose [`MutualInformationEstimator`] over a [`GaussianPrf`] model to
/// Python callers while preserving the core Rust invariants and error
/// handling.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `MutualInformation(parameters, stimulus_range, omega, dof=None, weights=None)`:
/// - `parameters`: `&PyAny`
///   `(n_basis, 4)` array-like of `mu, sd, amplitude, baseline` rows.
/// - `stimulus_range`: `&PyAny`
///   1-D or single-column 2-D array-like of scalar stimuli.
/// - `omega`: `&PyAny`
///   `(n_units, n_units)` positive-definite residual covariance.
/// - `dof`: `Option<f64>`
///   Student's-t degrees of freedom; Gaussian residuals when `None`.
/// - `weights`: `Option<&PyAny>`
///   Optional `(n_basis, n_units)` weight table.
///
/// Fields
/// ------
/// - `inner`: [`MutualInformationEstimator<GaussianPrf>`]
///   Fully validated estimator with its covariance factor precomputed.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "neural_information")]
pub struct MutualInformation {
    inner: MutualInformationEstimator<GaussianPrf>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MutualInformation {
    #[new]
    #[pyo3(
        signature = (parameters, stimulus_range, omega, dof = None, weights = None),
        text_signature = "(parameters, stimulus_range, omega, /, dof=None, weights=None)"
    )]
    pub fn new<'py>(
        py: Python<'py>, parameters: &Bound<'py, PyAny>, stimulus_range: &Bound<'py, PyAny>,
        omega: &Bound<'py, PyAny>, dof: Option<f64>, weights: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Self> {
        let model = build_gaussian_prf(parameters, weights)?;
        let grid = extract_stimulus_range(py, stimulus_range)?;
        let omega = extract_f64_matrix(omega, "omega")?;
        let inner = MutualInformationEstimator::new(model, grid, omega.view(), dof)?;
        Ok(MutualInformation { inner })
    }

    /// Estimate mutual information in bits from `n` Monte Carlo samples.
    ///
    /// A fixed `seed` reproduces the estimate exactly; `None` seeds from OS
    /// entropy.
    #[pyo3(signature = (n = DEFAULT_N_SAMPLES, seed = None), text_signature = "(n=1000, seed=None)")]
    pub fn estimate_mi(&self, n: usize, seed: Option<u64>) -> PyResult<f64> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(self.inner.estimate_mi(n, &mut rng)?)
    }

    /// Uniform prior probability of each stimulus, `1/k`.
    #[getter]
    pub fn p_stimulus(&self) -> f64 {
        self.inner.p_stimulus()
    }

    #[getter]
    pub fn n_units(&self) -> usize {
        self.inner.n_units()
    }

    #[getter]
    pub fn dof(&self) -> Option<f64> {
        self.inner.dof()
    }
}

/// _neural_information — PyO3 module initializer for the Python extension.
///
/// Registers the `MutualInformation` class. Invoked automatically by Python
/// when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _neural_information<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<MutualInformation>()?;
    Ok(())
}
