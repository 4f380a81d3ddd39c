//! information::options — Monte Carlo settings for MI estimation.
//!
//! Bundles the sample count and the optional random seed used by
//! [`MutualInformationEstimator::estimate_mi_with`](crate::information::MutualInformationEstimator::estimate_mi_with).
//! A fixed seed makes an estimate reproducible bit-for-bit; `None` draws the
//! seed from operating-system entropy.

use crate::information::errors::{MIError, MIResult};

/// Default number of Monte Carlo samples.
pub const DEFAULT_N_SAMPLES: usize = 1000;

/// Configuration options for a Monte Carlo MI estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MIOptions {
    pub n_samples: usize,
    pub random_seed: Option<u64>,
}

impl MIOptions {
    /// Construct a new [`MIOptions`] instance.
    ///
    /// # Errors
    /// Returns [`MIError::InvalidSampleCount`] if `n_samples == 0`.
    pub fn new(n_samples: usize, random_seed: Option<u64>) -> MIResult<MIOptions> {
        let n_samples = validate_sample_count(n_samples)?;
        Ok(MIOptions { n_samples, random_seed })
    }

    /// Same options with a fixed seed.
    pub fn seeded(self, seed: u64) -> MIOptions {
        MIOptions { random_seed: Some(seed), ..self }
    }
}

impl Default for MIOptions {
    fn default() -> Self {
        MIOptions { n_samples: DEFAULT_N_SAMPLES, random_seed: None }
    }
}

/// Validate a Monte Carlo sample count (`n >= 1`).
pub fn validate_sample_count(n: usize) -> MIResult<usize> {
    if n == 0 {
        return Err(MIError::InvalidSampleCount { n });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_one_thousand_samples_and_no_seed() {
        let opts = MIOptions::default();
        assert_eq!(opts.n_samples, 1000);
        assert_eq!(opts.random_seed, None);
    }

    #[test]
    fn new_rejects_zero_samples() {
        assert_eq!(MIOptions::new(0, Some(1)), Err(MIError::InvalidSampleCount { n: 0 }));
        assert_eq!(
            MIOptions::new(250, None).map(|o| o.seeded(3)),
            Ok(MIOptions { n_samples: 250, random_seed: Some(3) })
        );
    }
}
