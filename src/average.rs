//! Sliding-window average.

use crate::offsets::{ConfigurationError, enumerate_offsets};
use crate::weights::Weights;

/// Computes the mean of every `window_size`-element window over `data`,
/// shifting the window right by `shift_size` elements per step.
///
/// The number of windows is capped so the last window still holds
/// `window_size` elements. A sequence shorter than the window produces an
/// empty result.
///
/// `weights` optionally turns each reduction into a weighted mean: the
/// per-window dot product is normalized by the sum of the weights instead of
/// by `window_size`.
///
/// # Example
///
/// ```
/// let result = slidewin::average(&[1.0, 2.0, 3.0], 3, 1, None)?;
/// assert_eq!(result, vec![2.0]);
/// # Ok::<(), slidewin::ConfigurationError>(())
/// ```
pub fn average(
    data: &[f64],
    window_size: usize,
    shift_size: usize,
    weights: Option<&[f64]>,
) -> Result<Vec<f64>, ConfigurationError> {
    let offsets = enumerate_offsets(data.len(), window_size, shift_size)?;
    let weights = weights.map(|w| Weights::new(w, window_size)).transpose()?;
    if offsets.is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::with_capacity(offsets.len());
    match weights {
        Some(weights) => {
            // The normalizer is invariant across windows.
            let weight_sum = weights.sum();
            for &ofs in &offsets {
                let sum: f64 = data[ofs..ofs + window_size]
                    .iter()
                    .zip(weights.iter())
                    .map(|(x, w)| x * w)
                    .sum();
                result.push(sum / weight_sum);
            }
        }
        None => {
            // Sum then divide; cheaper than a mean per window.
            let n = window_size as f64;
            for &ofs in &offsets {
                let sum: f64 = data[ofs..ofs + window_size].iter().sum();
                result.push(sum / n);
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_input_yields_empty_result() {
        assert_eq!(average(&[], 500, 1, None).unwrap(), vec![]);
    }

    #[test]
    fn input_shorter_than_window_yields_empty_result() {
        assert_eq!(average(&[1.0], 500, 1, None).unwrap(), vec![]);
    }

    #[test]
    fn single_window_is_the_plain_mean() {
        let result = average(&[1.0, 2.0, 3.0], 3, 1, None).unwrap();
        assert_eq!(result, vec![2.0]);
    }

    #[test]
    fn shifted_windows_average_independently() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let result = average(&data, 3, 3, None).unwrap();
        assert_eq!(result, vec![2.0, 5.0]);
    }

    #[test]
    fn weighted_mean_normalizes_by_weight_sum() {
        let data = [1.0, 2.0, 3.0];
        let weights = [1.0, 1.0, 2.0];
        let result = average(&data, 3, 1, Some(&weights)).unwrap();
        // (1 + 2 + 6) / 4
        assert_abs_diff_eq!(result[0], 2.25, epsilon = 1e-12);
    }

    #[test]
    fn all_ones_weights_match_unweighted() {
        let data: Vec<f64> = (0..50).map(|i| (i as f64 * 0.3).sin()).collect();
        let ones = vec![1.0; 9];
        let plain = average(&data, 9, 4, None).unwrap();
        let weighted = average(&data, 9, 4, Some(&ones)).unwrap();
        assert_eq!(plain.len(), weighted.len());
        for (a, b) in plain.iter().zip(&weighted) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }

    #[test]
    fn mismatched_weights_length_is_an_error() {
        assert_eq!(
            average(&[1.0, 2.0, 3.0], 3, 1, Some(&[1.0, 1.0, 1.0, 1.0])).unwrap_err(),
            ConfigurationError::InvalidWeightsLength(3, 4)
        );
    }

    #[test]
    fn zero_sizes_are_errors() {
        assert_eq!(
            average(&[1.0], 0, 1, None).unwrap_err(),
            ConfigurationError::ZeroWindowSize
        );
        assert_eq!(
            average(&[1.0], 1, 0, None).unwrap_err(),
            ConfigurationError::ZeroShiftSize
        );
    }
}
