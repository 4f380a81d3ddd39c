#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    encoding::gaussian_prf::GaussianPrf,
    information::{errors::MIError, stimulus::StimulusGrid},
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
    PyReadonlyArray2,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a 2-D numpy array, DataFrame, or nested sequence of floats into an
/// owned `Array2<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_matrix<'py>(raw_data: &Bound<'py, PyAny>, name: &str) -> PyResult<Array2<f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray2<f64>>() {
        return Ok(arr_ro.as_array().to_owned());
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(frame_ro) = obj.extract::<PyReadonlyArray2<f64>>() {
            return Ok(frame_ro.as_array().to_owned());
        }
    }

    let rows: Vec<Vec<f64>> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 2-D numpy.ndarray, pandas.DataFrame, or nested sequence of float64"
        ))
    })?;
    let n_cols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|r| r.len() != n_cols) {
        return Err(PyValueError::new_err(format!("{name} rows must all have the same length")));
    }
    let n_rows = rows.len();
    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((n_rows, n_cols), flat)
        .map_err(|e| PyValueError::new_err(format!("{name}: {e}")))
}

/// Coerce a 1-D or single-column 2-D Python object into a [`StimulusGrid`].
///
/// Two-column input surfaces as `NotImplementedError` through
/// `From<MIError> for PyErr`.
#[cfg(feature = "python-bindings")]
pub fn extract_stimulus_range<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<StimulusGrid> {
    if let Ok(arr) = extract_f64_array(py, raw_data) {
        let values = arr
            .as_slice()
            .map_err(|_| PyValueError::new_err("stimulus_range must be contiguous"))?;
        return Ok(StimulusGrid::from_values(values)?);
    }
    let rows = extract_f64_matrix(raw_data, "stimulus_range")?;
    StimulusGrid::from_rows(rows.view()).map_err(|e: MIError| e.into())
}

/// Build a [`GaussianPrf`] from a `(n_basis, 4)` parameter matrix and
/// optional `(n_basis, n_units)` weights.
#[cfg(feature = "python-bindings")]
pub fn build_gaussian_prf<'py>(
    parameters: &Bound<'py, PyAny>, weights: Option<&Bound<'py, PyAny>>,
) -> PyResult<GaussianPrf> {
    let parameters = extract_f64_matrix(parameters, "parameters")?;
    let model = GaussianPrf::new(parameters)?;
    match weights {
        Some(raw) => {
            let weights = extract_f64_matrix(raw, "weights")?;
            Ok(model.with_weights(weights)?)
        }
        None => Ok(model),
    }
}
