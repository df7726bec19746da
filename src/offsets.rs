//! Window offset enumeration shared by every sliding-window statistic.
//!
//! The offsets are the single source of truth for window placement: every
//! kernel in this crate derives its windows from [`enumerate_offsets`], so
//! results computed by different statistics over the same geometry are
//! directly alignable.

/// Errors in sliding-window configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The window size was zero.
    #[error("window size must not be zero")]
    ZeroWindowSize,
    /// The shift size was zero.
    #[error("shift size must not be zero")]
    ZeroShiftSize,
    /// The length of a provided weight vector does not match the window size.
    #[error("weights length is invalid; expected {0}, got {1}")]
    InvalidWeightsLength(usize, usize),
}

/// Enumerates the starting offsets of every full window of `window_size`
/// elements over a sequence of `length` elements, stepping by `shift_size`.
///
/// The offsets form the arithmetic sequence `0, shift_size, 2 * shift_size, …`
/// capped so that every window fits entirely within the sequence: each
/// returned offset `o` satisfies `o + window_size <= length`.
///
/// A sequence shorter than the window yields no offsets. This is not an
/// error; only a zero `window_size` or `shift_size` is.
///
/// # Example
///
/// ```
/// let offsets = slidewin::enumerate_offsets(5, 3, 1)?;
/// assert_eq!(offsets, vec![0, 1, 2]);
///
/// let offsets = slidewin::enumerate_offsets(5, 3, 2)?;
/// assert_eq!(offsets, vec![0, 2]);
/// # Ok::<(), slidewin::ConfigurationError>(())
/// ```
pub fn enumerate_offsets(
    length: usize,
    window_size: usize,
    shift_size: usize,
) -> Result<Vec<usize>, ConfigurationError> {
    if window_size == 0 {
        return Err(ConfigurationError::ZeroWindowSize);
    }
    if shift_size == 0 {
        return Err(ConfigurationError::ZeroShiftSize);
    }
    if length < window_size {
        return Ok(Vec::new());
    }
    Ok((0..=length - window_size).step_by(shift_size).collect())
}

/// Public front for chunk reconstruction.
///
/// Returns exactly the offsets the statistic kernels use, so a caller can
/// independently re-slice the source sequence into the same windows:
/// `chunks[i] == data[offsets[i]..offsets[i] + window_size]` and
/// `result[i]` is the reduction of `chunks[i]`.
pub fn window_offsets(
    length: usize,
    window_size: usize,
    shift_size: usize,
) -> Result<Vec<usize>, ConfigurationError> {
    enumerate_offsets(length, window_size, shift_size)
}
