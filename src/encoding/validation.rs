//! encoding::validation — guards for receptive-field parameter and weight tables.

use crate::encoding::errors::{ModelError, ModelResult};
use ndarray::ArrayView2;

/// Column labels of a Gaussian receptive-field parameter table.
pub const PRF_PARAMETER_LABELS: [&str; 4] = ["mu", "sd", "amplitude", "baseline"];

/// Validate a Gaussian receptive-field parameter table.
///
/// Parameters
/// ----------
/// - `parameters`: `ArrayView2<f64>`
///   One row per receptive field with columns
///   `[mu, sd, amplitude, baseline]`.
///
/// Errors
/// ------
/// - `ModelError::EmptyParameters` when there are no rows.
/// - `ModelError::ParameterWidthMismatch` when there are not 4 columns.
/// - `ModelError::NonFiniteParameter` for the first NaN/±∞ entry.
/// - `ModelError::InvalidWidth` when some `sd <= 0`.
pub fn validate_prf_parameters(parameters: ArrayView2<f64>) -> ModelResult<()> {
    let (rows, cols) = parameters.dim();
    if rows == 0 {
        return Err(ModelError::EmptyParameters);
    }
    if cols != PRF_PARAMETER_LABELS.len() {
        return Err(ModelError::ParameterWidthMismatch {
            expected: PRF_PARAMETER_LABELS.len(),
            actual: cols,
        });
    }
    for ((row, col), &value) in parameters.indexed_iter() {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteParameter {
                row,
                label: PRF_PARAMETER_LABELS[col],
                value,
            });
        }
    }
    if let Some((row, &value)) = parameters.column(1).indexed_iter().find(|(_, sd)| **sd <= 0.0) {
        return Err(ModelError::InvalidWidth { row, value });
    }
    Ok(())
}

/// Validate a weight table against the number of basis functions.
///
/// # Errors
/// - `ModelError::WeightRowsMismatch` if `weights.nrows() != n_basis`.
/// - `ModelError::EmptyWeights` if the table has no columns.
/// - `ModelError::NonFiniteWeight` for the first NaN/±∞ entry.
pub fn validate_weights(weights: ArrayView2<f64>, n_basis: usize) -> ModelResult<()> {
    let (rows, cols) = weights.dim();
    if rows != n_basis {
        return Err(ModelError::WeightRowsMismatch { expected: n_basis, actual: rows });
    }
    if cols == 0 {
        return Err(ModelError::EmptyWeights);
    }
    if let Some(((row, col), &value)) = weights.indexed_iter().find(|(_, w)| !w.is_finite()) {
        return Err(ModelError::NonFiniteWeight { row, col, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn validate_prf_parameters_accepts_well_formed_table() {
        let params = array![[0.0, 1.0, 2.0, 0.5], [5.0, 2.0, 1.0, 0.0]];
        assert_eq!(validate_prf_parameters(params.view()), Ok(()));
    }

    #[test]
    // Purpose
    // -------
    // Exercise each rejection branch of `validate_prf_parameters`.
    //
    // Given
    // -----
    // - An empty table, a 3-column table, a NaN amplitude, and a zero width.
    //
    // Expect
    // ------
    // - The matching `ModelError` variant for each case.
    fn validate_prf_parameters_rejects_malformed_tables() {
        // Arrange
        let empty = Array2::<f64>::zeros((0, 4));
        let narrow = array![[0.0, 1.0, 2.0]];
        let nan_amp = array![[0.0, 1.0, f64::NAN, 0.0]];
        let zero_sd = array![[0.0, 1.0, 1.0, 0.0], [1.0, 0.0, 1.0, 0.0]];

        // Act & Assert
        assert_eq!(validate_prf_parameters(empty.view()), Err(ModelError::EmptyParameters));
        assert_eq!(
            validate_prf_parameters(narrow.view()),
            Err(ModelError::ParameterWidthMismatch { expected: 4, actual: 3 })
        );
        match validate_prf_parameters(nan_amp.view()) {
            Err(ModelError::NonFiniteParameter { row: 0, label: "amplitude", .. }) => (),
            other => panic!("expected NonFiniteParameter for amplitude, got {other:?}"),
        }
        assert_eq!(
            validate_prf_parameters(zero_sd.view()),
            Err(ModelError::InvalidWidth { row: 1, value: 0.0 })
        );
    }

    #[test]
    fn validate_weights_checks_rows_and_columns() {
        let weights = array![[1.0, 0.0], [0.5, 0.5], [0.0, 1.0]];
        assert_eq!(validate_weights(weights.view(), 3), Ok(()));
        assert_eq!(
            validate_weights(weights.view(), 2),
            Err(ModelError::WeightRowsMismatch { expected: 2, actual: 3 })
        );
        assert_eq!(
            validate_weights(Array2::<f64>::zeros((3, 0)).view(), 3),
            Err(ModelError::EmptyWeights)
        );
    }
}
