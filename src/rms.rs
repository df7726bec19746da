//! Sliding-window RMS (root mean square).

use crate::offsets::{ConfigurationError, enumerate_offsets};
use crate::weights::Weights;

/// Computes the RMS of every `window_size`-element window over `data`,
/// shifting the window right by `shift_size` elements per step.
///
/// The number of windows is capped so the last window still holds
/// `window_size` elements. A sequence shorter than the window produces an
/// empty result.
///
/// `window` optionally tapers each chunk with a window function (e.g. a
/// Blackman window) before aggregation; it must hold exactly `window_size`
/// coefficients.
///
/// # Example
///
/// ```
/// let result = slidewin::rms(&[1.0, 2.0, 3.0], 3, 1, None)?;
/// approx::assert_abs_diff_eq!(result[0], (14.0f64 / 3.0).sqrt(), epsilon = 1e-12);
/// # Ok::<(), slidewin::ConfigurationError>(())
/// ```
pub fn rms(
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

    // Square the whole input once instead of once per window.
    let squared: Vec<f64> = data.iter().map(|x| x * x).collect();
    let n = window_size as f64;
    let mut result = Vec::with_capacity(offsets.len());

    match window {
        Some(window) => {
            // The taper is applied on the pre-squared input, so it is squared
            // once as well: (x * w)^2 == x^2 * w^2.
            let window_squared = window.squared();
            for &ofs in &offsets {
                let sum: f64 = squared[ofs..ofs + window_size]
                    .iter()
                    .zip(&window_squared)
                    .map(|(x, w)| x * w)
                    .sum();
                result.push((sum / n).sqrt());
            }
        }
        None => {
            for &ofs in &offsets {
                let sum: f64 = squared[ofs..ofs + window_size].iter().sum();
                result.push((sum / n).sqrt());
            }
        }
    }

    Ok(result)
}
