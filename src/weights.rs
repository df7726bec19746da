//! Weight vectors applied element-wise to each extracted window.

use std::ops::Deref;

use crate::offsets::ConfigurationError;

/// Validated per-position weight vector.
///
/// Used both as a tapering window function (multiplied into each chunk before
/// RMS or integral aggregation, e.g. a Blackman window to reduce edge leakage)
/// and as averaging weights (normalizing by the weight sum instead of the
/// window size). Its length must equal the window size of the kernel it is
/// passed to.
#[derive(Debug, Clone)]
pub struct Weights {
    weights: Vec<f64>,
}

impl Weights {
    /// Creates a new [`Weights`] from the provided slice.
    ///
    /// Conditions:
    /// - weight.len() == window_size
    pub fn new(weight: &[f64], window_size: usize) -> Result<Self, ConfigurationError> {
        if weight.len() != window_size {
            return Err(ConfigurationError::InvalidWeightsLength(
                window_size,
                weight.len(),
            ));
        }
        Ok(Self {
            weights: weight.to_vec(),
        })
    }

    /// Element-wise square of the weights.
    ///
    /// `(x * w)^2 == x^2 * w^2`, so the RMS kernel squares the taper once and
    /// reuses it against the pre-squared input instead of squaring every
    /// weighted chunk.
    pub fn squared(&self) -> Vec<f64> {
        self.weights.iter().map(|w| w * w).collect()
    }

    /// Sum of the weights, the normalizer for weighted averaging.
    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }
}

impl Deref for Weights {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.weights
    }
}
