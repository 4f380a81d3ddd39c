//! information::stimulus — the finite scalar stimulus grid.
//!
//! Purpose
//! -------
//! Hold the ordered set of candidate stimulus values over which mutual
//! information is computed, in column shape `(k, 1)`, and the uniform prior
//! `1/k` attached to it.
//!
//! Key behaviors
//! -------------
//! - Coerce flat sequences into one row per stimulus.
//! - Reject inputs with more than one column as not implemented
//!   ([`MIError::MultidimensionalStimulus`]).
//! - Reject empty grids and non-finite values.
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() >= 1` and every value is finite.
//! - The grid is immutable once constructed.

use crate::information::errors::{MIError, MIResult};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// StimulusGrid — ordered scalar stimulus values with a uniform prior.
#[derive(Debug, Clone, PartialEq)]
pub struct StimulusGrid {
    column: Array2<f64>,
}

impl StimulusGrid {
    /// Build a grid from a flat sequence of scalar stimuli.
    ///
    /// # Errors
    /// - [`MIError::EmptyStimulusRange`] if `values` is empty.
    /// - [`MIError::NonFiniteStimulus`] for the first NaN/±∞ value.
    pub fn from_values(values: &[f64]) -> MIResult<Self> {
        validate_values(values.iter().copied())?;
        let column = Array2::from_shape_fn((values.len(), 1), |(i, _)| values[i]);
        Ok(StimulusGrid { column })
    }

    /// Build a grid from a `(k, d)` array of stimulus rows.
    ///
    /// # Errors
    /// - [`MIError::MultidimensionalStimulus`] if `d > 1`.
    /// - [`MIError::EmptyStimulusRange`] if `k == 0` or `d == 0`.
    /// - [`MIError::NonFiniteStimulus`] for the first NaN/±∞ value.
    pub fn from_rows(rows: ArrayView2<f64>) -> MIResult<Self> {
        let (k, d) = rows.dim();
        if d > 1 {
            return Err(MIError::MultidimensionalStimulus { n_columns: d });
        }
        if k == 0 || d == 0 {
            return Err(MIError::EmptyStimulusRange);
        }
        validate_values(rows.iter().copied())?;
        Ok(StimulusGrid { column: rows.to_owned() })
    }

    /// `n` evenly spaced stimuli from `start` to `end` inclusive.
    ///
    /// # Errors
    /// - [`MIError::InvalidGridSpec`] if `n == 0` or a bound is non-finite.
    ///
    /// # Examples
    /// ```rust
    /// # use neural_information::information::StimulusGrid;
    /// let grid = StimulusGrid::linspace(0.0, 10.0, 5).unwrap();
    /// assert_eq!(grid.values().to_vec(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    /// assert_eq!(grid.p_stimulus(), 0.2);
    /// ```
    pub fn linspace(start: f64, end: f64, n: usize) -> MIResult<Self> {
        if n == 0 {
            return Err(MIError::InvalidGridSpec { reason: "at least one point is required" });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(MIError::InvalidGridSpec { reason: "bounds must be finite" });
        }
        let values = Array1::linspace(start, end, n);
        Self::from_values(&values.to_vec())
    }

    /// Number of grid points `k`.
    pub fn len(&self) -> usize {
        self.column.nrows()
    }

    /// Always `false` for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.column.nrows() == 0
    }

    /// Grid values as a flat view of length `k`.
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.column.column(0)
    }

    /// Grid values in column shape `(k, 1)`.
    pub fn as_column(&self) -> ArrayView2<'_, f64> {
        self.column.view()
    }

    /// Uniform prior probability of each grid point, `1/k`.
    pub fn p_stimulus(&self) -> f64 {
        1.0 / self.len() as f64
    }
}

impl TryFrom<&[f64]> for StimulusGrid {
    type Error = MIError;

    fn try_from(values: &[f64]) -> MIResult<Self> {
        StimulusGrid::from_values(values)
    }
}

impl TryFrom<Vec<f64>> for StimulusGrid {
    type Error = MIError;

    fn try_from(values: Vec<f64>) -> MIResult<Self> {
        StimulusGrid::from_values(&values)
    }
}

impl TryFrom<ArrayView1<'_, f64>> for StimulusGrid {
    type Error = MIError;

    fn try_from(values: ArrayView1<'_, f64>) -> MIResult<Self> {
        StimulusGrid::from_rows(values.insert_axis(ndarray::Axis(1)))
    }
}

impl TryFrom<Array1<f64>> for StimulusGrid {
    type Error = MIError;

    fn try_from(values: Array1<f64>) -> MIResult<Self> {
        StimulusGrid::try_from(values.view())
    }
}

impl TryFrom<ArrayView2<'_, f64>> for StimulusGrid {
    type Error = MIError;

    fn try_from(rows: ArrayView2<'_, f64>) -> MIResult<Self> {
        StimulusGrid::from_rows(rows)
    }
}

impl TryFrom<Array2<f64>> for StimulusGrid {
    type Error = MIError;

    fn try_from(rows: Array2<f64>) -> MIResult<Self> {
        StimulusGrid::from_rows(rows.view())
    }
}

// ---- Helper methods ----

fn validate_values(values: impl ExactSizeIterator<Item = f64>) -> MIResult<()> {
    if values.len() == 0 {
        return Err(MIError::EmptyStimulusRange);
    }
    for (index, value) in values.enumerate() {
        if !value.is_finite() {
            return Err(MIError::NonFiniteStimulus { index, value });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover coercion of flat and column inputs, the exact
    // uniform prior, and every rejection branch (multi-column, empty,
    // non-finite, bad linspace specs).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Flat and single-column inputs coerce to the same `(k, 1)` grid.
    //
    // Given
    // -----
    // - The values [1, 2, 3] as a slice, an `Array1`, and a 3x1 `Array2`.
    //
    // Expect
    // ------
    // - Equal grids with `as_column()` shaped (3, 1).
    fn flat_and_column_inputs_coerce_to_the_same_grid() {
        // Arrange
        let flat = [1.0, 2.0, 3.0];

        // Act
        let from_slice = StimulusGrid::try_from(&flat[..]).expect("valid grid");
        let from_array1 = StimulusGrid::try_from(array![1.0, 2.0, 3.0]).expect("valid grid");
        let from_rows = StimulusGrid::try_from(array![[1.0], [2.0], [3.0]]).expect("valid grid");

        // Assert
        assert_eq!(from_slice.as_column().dim(), (3, 1));
        assert_eq!(from_slice, from_array1);
        assert_eq!(from_slice, from_rows);
    }

    #[test]
    fn p_stimulus_is_exactly_one_over_k() {
        for k in [1_usize, 2, 5, 7, 64] {
            let grid = StimulusGrid::linspace(-1.0, 1.0, k).expect("valid grid");
            assert_eq!(grid.len(), k);
            assert_eq!(grid.p_stimulus(), 1.0 / k as f64);
        }
    }

    #[test]
    // Purpose
    // -------
    // Two-column stimuli are rejected as not implemented.
    fn two_column_stimuli_are_not_implemented() {
        let rows = array![[0.0, 1.0], [2.0, 3.0]];
        assert_eq!(
            StimulusGrid::from_rows(rows.view()),
            Err(MIError::MultidimensionalStimulus { n_columns: 2 })
        );
    }

    #[test]
    fn empty_and_non_finite_inputs_are_rejected() {
        assert_eq!(StimulusGrid::from_values(&[]), Err(MIError::EmptyStimulusRange));
        assert_eq!(
            StimulusGrid::from_rows(Array2::<f64>::zeros((0, 1)).view()),
            Err(MIError::EmptyStimulusRange)
        );
        match StimulusGrid::from_values(&[0.0, f64::NAN]) {
            Err(MIError::NonFiniteStimulus { index: 1, value }) => assert!(value.is_nan()),
            other => panic!("expected NonFiniteStimulus at index 1, got {other:?}"),
        }
        assert!(matches!(StimulusGrid::linspace(0.0, 1.0, 0), Err(MIError::InvalidGridSpec { .. })));
        assert!(matches!(
            StimulusGrid::linspace(0.0, f64::INFINITY, 3),
            Err(MIError::InvalidGridSpec { .. })
        ));
    }
}
