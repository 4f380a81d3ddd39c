//! Integration tests for the mutual-information pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end estimation path: from a Gaussian receptive-field
//!   model and a stimulus grid, through covariance factorization and
//!   correlated noise simulation, to the Monte Carlo MI estimate and its
//!   diagnostics.
//! - Exercise realistic population settings (overlapping receptive fields,
//!   correlated noise, weighted mixtures, heavy-tailed residuals) rather
//!   than toy edge cases only.
//!
//! Coverage
//! --------
//! - `encoding::GaussianPrf`:
//!   - Unweighted and weighted construction, used owned and borrowed.
//! - `information::MutualInformationEstimator`:
//!   - Construction from flat and linspace grids, estimates through
//!     `estimate_mi`, `estimate_mi_outcome`, and `estimate_mi_with`.
//! - `information::MIOutcome`:
//!   - Standard-error scaling with the sample count.
//! - `noise::ResidualDist`:
//!   - Gaussian and Student's-t residual paths.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of building blocks (covariance checks,
//!   parameter guards, density formulas); these are covered by unit tests.
//! - Python bindings; those are expected to be tested from Python.
use ndarray::{Array2, array};
use neural_information::{
    encoding::{EncodingModel, GaussianPrf},
    information::{MIError, MIOptions, MutualInformationEstimator, StimulusGrid},
};
use rand::{SeedableRng, rngs::StdRng};

/// Purpose
/// -------
/// Two units with receptive fields centred at 2 and 8 over a `[0, 10]`
/// stimulus axis, unit baseline, amplitude 10, width 2.5.
fn two_unit_model() -> GaussianPrf {
    GaussianPrf::from_columns(&[2.0, 8.0], &[2.5, 2.5], &[10.0, 10.0], &[1.0, 1.0])
        .expect("GaussianPrf::from_columns should accept finite parameters with sd > 0")
}

/// Purpose
/// -------
/// Five evenly spaced stimuli on `[0, 10]`.
fn five_point_grid() -> StimulusGrid {
    StimulusGrid::linspace(0.0, 10.0, 5).expect("linspace should accept finite bounds and n > 0")
}

/// Purpose
/// -------
/// Mildly correlated 2x2 residual covariance.
fn correlated_omega() -> Array2<f64> {
    array![[1.0, 0.3], [0.3, 1.0]]
}

#[test]
// Purpose
// -------
// The reference scenario: two units, a five-point grid, unit noise.
//
// Given
// -----
// - `two_unit_model()`, `five_point_grid()`, identity Ω.
// - n = 5000 samples, seed 2024, run twice.
//
// Expect
// ------
// - A finite, non-negative estimate with no non-finite contributions.
// - p_stimulus = 0.2 and a bit-identical repeat under the same seed.
fn reference_scenario_gives_finite_non_negative_reproducible_information() {
    // Arrange
    let omega = Array2::<f64>::eye(2);
    let est = MutualInformationEstimator::new(two_unit_model(), five_point_grid(), omega.view(), None)
        .expect("estimator construction should succeed for a PD covariance");

    // Act
    let outcome = est
        .estimate_mi_outcome(5000, &mut StdRng::seed_from_u64(2024))
        .expect("estimation should succeed");
    let repeat = est
        .estimate_mi_outcome(5000, &mut StdRng::seed_from_u64(2024))
        .expect("estimation should succeed");

    // Assert
    assert_eq!(est.p_stimulus(), 0.2);
    assert!(outcome.is_finite(), "MI = {}", outcome.mi());
    assert!(outcome.mi() >= 0.0, "MI = {}", outcome.mi());
    assert_eq!(outcome.n_non_finite(), 0);
    assert_eq!(outcome.n_samples(), 5000);
    assert_eq!(outcome.mi().to_bits(), repeat.mi().to_bits());
}

#[test]
// Purpose
// -------
// The plug-in sum weights log-ratios by densities, not probabilities, so
// it is not capped by the stimulus entropy once densities exceed 1.
//
// Given
// -----
// - The reference model with Ω = 1e-4 · I (σ = 0.01), n = 2000, seed 8.
//
// Expect
// ------
// - A finite estimate well above log2(5) with no non-finite contributions.
fn low_noise_estimate_exceeds_stimulus_entropy() {
    // Arrange
    let omega = Array2::<f64>::eye(2) * 1e-4;
    let est = MutualInformationEstimator::new(two_unit_model(), five_point_grid(), omega.view(), None)
        .expect("estimator construction should succeed");

    // Act
    let outcome = est
        .estimate_mi_outcome(2000, &mut StdRng::seed_from_u64(8))
        .expect("estimation should succeed");

    // Assert
    assert!(outcome.is_finite(), "MI = {}", outcome.mi());
    assert_eq!(outcome.n_non_finite(), 0);
    assert!(outcome.mi() > 5.0_f64.log2(), "MI = {}", outcome.mi());
}

#[test]
// Purpose
// -------
// The Monte Carlo standard error shrinks like 1/√n.
//
// Given
// -----
// - The reference scenario at n = 500 and n = 8000 (a 16x increase).
//
// Expect
// ------
// - The standard-error ratio is near √16 = 4 (loose bounds 2.5..6.5).
fn standard_error_shrinks_with_sample_count() {
    // Arrange
    let omega = correlated_omega();
    let est = MutualInformationEstimator::new(two_unit_model(), five_point_grid(), omega.view(), None)
        .expect("estimator construction should succeed");

    // Act
    let small = est.estimate_mi_with(&MIOptions::new(500, Some(1)).expect("n > 0")).expect("estimate");
    let large = est.estimate_mi_with(&MIOptions::new(8000, Some(2)).expect("n > 0")).expect("estimate");

    // Assert
    let ratio = small.std_error() / large.std_error();
    assert!((2.5..6.5).contains(&ratio), "standard-error ratio {ratio}");
}

#[test]
// Purpose
// -------
// Independent large-sample estimates agree within their Monte Carlo error.
//
// Given
// -----
// - Two n = 20000 estimates of the reference scenario under different seeds.
//
// Expect
// ------
// - |MI₁ − MI₂| < 6 · √(se₁² + se₂²).
fn independent_estimates_agree_within_monte_carlo_error() {
    // Arrange
    let omega = correlated_omega();
    let model = two_unit_model();
    let est = MutualInformationEstimator::new(&model, five_point_grid(), omega.view(), None)
        .expect("estimator construction should succeed");

    // Act
    let a = est.estimate_mi_outcome(20_000, &mut StdRng::seed_from_u64(10)).expect("estimate");
    let b = est.estimate_mi_outcome(20_000, &mut StdRng::seed_from_u64(11)).expect("estimate");

    // Assert
    let tol = 6.0 * (a.std_error().powi(2) + b.std_error().powi(2)).sqrt();
    assert!((a.mi() - b.mi()).abs() < tol, "{} vs {} (tol {tol})", a.mi(), b.mi());
}

#[test]
// Purpose
// -------
// Student's-t residuals with a very large dof behave like Gaussian ones.
//
// Given
// -----
// - The reference scenario with dof = None and dof = 1e6, n = 20000 each.
//
// Expect
// ------
// - Both estimates finite and within 6 combined standard errors.
fn large_dof_student_t_matches_gaussian_residuals() {
    // Arrange
    let omega = correlated_omega();
    let model = two_unit_model();
    let gaussian = MutualInformationEstimator::new(&model, five_point_grid(), omega.view(), None)
        .expect("gaussian estimator");
    let student = MutualInformationEstimator::new(&model, five_point_grid(), omega.view(), Some(1e6))
        .expect("student-t estimator");

    // Act
    let g = gaussian.estimate_mi_outcome(20_000, &mut StdRng::seed_from_u64(3)).expect("estimate");
    let t = student.estimate_mi_outcome(20_000, &mut StdRng::seed_from_u64(4)).expect("estimate");

    // Assert
    assert!(g.is_finite() && t.is_finite());
    let tol = 6.0 * (g.std_error().powi(2) + t.std_error().powi(2)).sqrt();
    assert!((g.mi() - t.mi()).abs() < tol, "gaussian {} vs student-t {}", g.mi(), t.mi());
}

#[test]
// Purpose
// -------
// Weighted models feed their unit count and weights through the pipeline.
//
// Given
// -----
// - Two receptive fields mixed into three units; Ω = 0.5 · I₃.
//
// Expect
// ------
// - The estimator reports 3 units and the snapshotted weights.
// - A three-unit covariance is required; a two-unit one is rejected.
// - The estimate is finite and non-negative.
fn weighted_model_runs_end_to_end() {
    // Arrange
    let weights = array![[1.0, 0.0, 0.5], [0.0, 1.0, 0.5]];
    let model = two_unit_model()
        .with_weights(weights.clone())
        .expect("with_weights should accept a finite 2x3 table");
    let omega3 = Array2::<f64>::eye(3) * 0.5;
    let omega2 = Array2::<f64>::eye(2) * 0.5;

    // Act
    let est = MutualInformationEstimator::new(&model, five_point_grid(), omega3.view(), None)
        .expect("estimator construction should succeed");
    let rejected = MutualInformationEstimator::new(&model, five_point_grid(), omega2.view(), None);
    let mi = est.estimate_mi(3000, &mut StdRng::seed_from_u64(5)).expect("estimate");

    // Assert
    assert_eq!(model.n_units(), 3);
    assert_eq!(est.n_units(), 3);
    assert_eq!(est.weights(), Some(weights.view()));
    assert!(matches!(rejected, Err(MIError::UnitCountMismatch { model_units: 3, omega_dim: 2 })));
    assert!(mi.is_finite() && mi >= 0.0, "MI = {mi}");
}

#[test]
fn seeded_options_reproduce_estimates_across_estimators() {
    let omega = correlated_omega();
    let model = two_unit_model();
    let flat = MutualInformationEstimator::new(&model, vec![0.0, 2.5, 5.0, 7.5, 10.0], omega.view(), None)
        .expect("flat grid estimator");
    let spaced = MutualInformationEstimator::new(&model, five_point_grid(), omega.view(), None)
        .expect("linspace grid estimator");
    let opts = MIOptions::default().seeded(77);

    let a = flat.estimate_mi_with(&opts).expect("estimate");
    let b = spaced.estimate_mi_with(&opts).expect("estimate");

    assert_eq!(a, b);
    assert_eq!(a.n_samples(), 1000);
}

#[test]
fn multidimensional_stimuli_and_bad_covariances_fail_at_construction() {
    let model = two_unit_model();
    let stimuli = array![[0.0, 0.0], [1.0, 1.0]];
    let omega = correlated_omega();
    let singular = array![[1.0, 1.0], [1.0, 1.0]];

    let multi = MutualInformationEstimator::new(&model, stimuli, omega.view(), None);
    let not_pd = MutualInformationEstimator::new(&model, five_point_grid(), singular.view(), None);

    match multi {
        Err(err @ MIError::MultidimensionalStimulus { .. }) => {
            assert!(err.to_string().starts_with("Not implemented"));
        }
        other => panic!("expected MultidimensionalStimulus, got {other:?}"),
    }
    assert!(matches!(not_pd, Err(MIError::Noise(_))));
}
