//! information::outcome — summary of a Monte Carlo MI estimate.
//!
//! Purpose
//! -------
//! Reduce the per-sample contributions `cᵢ = Σⱼ p_joint[i, j] · log2(…)`
//! into the MI estimate `(1/n) Σᵢ cᵢ` together with simple Monte Carlo
//! diagnostics.
//!
//! Conventions
//! -----------
//! - Non-finite contributions are counted but **not** filtered; the
//!   estimate and its standard error become non-finite with them.
//! - The standard error is `s / √n` with `s` the sample standard deviation
//!   (`n − 1` denominator). It is NaN when `n < 2`.

use ndarray::ArrayView1;

/// MIOutcome — mutual-information estimate and Monte Carlo diagnostics.
///
/// Fields
/// ------
/// - `mi`: `f64`
///   Estimate in bits.
/// - `std_error`: `f64`
///   Monte Carlo standard error of `mi`.
/// - `n_samples`: `usize`
///   Number of noise samples the estimate averages over.
/// - `n_non_finite`: `usize`
///   Number of samples whose contribution was NaN/±∞ (e.g. because the
///   marginal density underflowed to zero).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MIOutcome {
    mi: f64,
    std_error: f64,
    n_samples: usize,
    n_non_finite: usize,
}

impl MIOutcome {
    /// Summarize per-sample contributions.
    ///
    /// `contributions` must be non-empty; callers validate the sample count
    /// before estimating.
    pub fn from_contributions(contributions: ArrayView1<f64>) -> Self {
        let n = contributions.len();
        let n_f = n as f64;
        let mi = contributions.sum() / n_f;
        let n_non_finite = contributions.iter().filter(|c| !c.is_finite()).count();
        let std_error = if n < 2 {
            f64::NAN
        } else {
            let ss: f64 = contributions.iter().map(|c| (c - mi).powi(2)).sum();
            (ss / (n_f - 1.0) / n_f).sqrt()
        };
        MIOutcome { mi, std_error, n_samples: n, n_non_finite }
    }

    /// Mutual-information estimate in bits.
    pub fn mi(&self) -> f64 {
        self.mi
    }

    /// Monte Carlo standard error of [`mi`](Self::mi).
    pub fn std_error(&self) -> f64 {
        self.std_error
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_non_finite(&self) -> usize {
        self.n_non_finite
    }

    /// `true` when the estimate is finite.
    pub fn is_finite(&self) -> bool {
        self.mi.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Check mean and standard error on a hand-computable series.
    //
    // Given
    // -----
    // - Contributions [1, 2, 3, 4]: mean 2.5, sample variance 5/3.
    //
    // Expect
    // ------
    // - mi = 2.5, std_error = √(5/3 / 4), no non-finite samples.
    fn from_contributions_reports_mean_and_standard_error() {
        // Arrange
        let c = array![1.0, 2.0, 3.0, 4.0];

        // Act
        let outcome = MIOutcome::from_contributions(c.view());

        // Assert
        assert_relative_eq!(outcome.mi(), 2.5, epsilon = 1e-15);
        assert_relative_eq!(outcome.std_error(), (5.0_f64 / 3.0 / 4.0).sqrt(), epsilon = 1e-15);
        assert_eq!(outcome.n_samples(), 4);
        assert_eq!(outcome.n_non_finite(), 0);
    }

    #[test]
    fn non_finite_contributions_propagate_and_are_counted() {
        let outcome = MIOutcome::from_contributions(array![0.5, f64::NAN, 0.1].view());

        assert!(!outcome.is_finite());
        assert_eq!(outcome.n_non_finite(), 1);
    }

    #[test]
    fn single_sample_has_undefined_standard_error() {
        let outcome = MIOutcome::from_contributions(array![0.3].view());
        assert_relative_eq!(outcome.mi(), 0.3);
        assert!(outcome.std_error().is_nan());
    }
}
