//! Sliding-window sum/integral.

use crate::offsets::{ConfigurationError, enumerate_offsets};
use crate::weights::Weights;

/// Computes the sum of every `window_size`-element window over `data`,
/// shifting the window right by `shift_size` elements per step.
///
/// The number of windows is capped so the last window still holds
/// `window_size` elements. A sequence shorter than the window produces an
/// empty result.
///
/// `window` optionally tapers each chunk with a window function before
/// summing, turning the reduction into a dot product. The tapered sum is
/// deliberately not normalized by the taper; an integral is not a mean.
///
/// # Example
///
/// ```
/// let result = slidewin::integral(&[1.0, 2.0, 3.0], 3, 1, None)?;
/// assert_eq!(result, vec![6.0]);
/// # Ok::<(), slidewin::ConfigurationError>(())
/// ```
pub fn integral(
    data: &[f64],
    window_size: usize,
    shift_size: usize,
    window: Option<&[f64]>,
) -> Result<Vec<f64>, ConfigurationError> {
    let offsets = enumerate_offsets(data.len(), window_size, shift_size)?;
    let window = window.map(|w| Weights::new(w, window_size)).transpose()?;
    if offsets.is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::with_capacity(offsets.len());
    match window {
        Some(window) => {
            for &ofs in &offsets {
                let sum: f64 = data[ofs..ofs + window_size]
                    .iter()
                    .zip(window.iter())
                    .map(|(x, w)| x * w)
                    .sum();
                result.push(sum);
            }
        }
        None => {
            for &ofs in &offsets {
                result.push(data[ofs..ofs + window_size].iter().sum());
            }
        }
    }

    Ok(result)
}
