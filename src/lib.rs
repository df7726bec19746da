//! Sliding-window summary statistics for 1-dimensional signals.
//!
//! Each kernel takes `window_size`-element chunks of the input, shifting the
//! window right by `shift_size` elements per step, and reduces every chunk to
//! one scalar. The number of chunks is capped so the last chunk also holds
//! `window_size` elements.
//!
//! All kernels place their windows with [`enumerate_offsets`], so their
//! results align element-for-element across statistics, and
//! [`window_offsets`] lets a caller re-slice the source into the exact chunks
//! a result was computed from.
//!
//! ```
//! let data = [1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let sums = slidewin::integral(&data, 3, 2, None)?;
//! assert_eq!(sums, vec![6.0, 12.0]);
//!
//! let offsets = slidewin::window_offsets(data.len(), 3, 2)?;
//! assert_eq!(offsets, vec![0, 2]);
//! assert_eq!(data[offsets[1]..offsets[1] + 3].iter().sum::<f64>(), sums[1]);
//! # Ok::<(), slidewin::ConfigurationError>(())
//! ```

pub mod average;
pub mod integral;
pub mod offsets;
pub mod rms;
pub mod weights;

pub use average::average;
pub use integral::integral;
pub use offsets::{ConfigurationError, enumerate_offsets, window_offsets};
pub use rms::rms;
pub use weights::Weights;
