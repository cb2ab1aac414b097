//! # lutbake-sample
//!
//! Grid sampling engine: turns a continuous color transform into the
//! ordered, discrete sample sequence a LUT file stores.
//!
//! # Contracts
//!
//! Downstream encodings depend on these properties bit-for-bit:
//!
//! - `sample_1d` returns exactly `2^bitdepth` triplets, ascending in input
//!   order, index 0 at `in_range.lo` and the last index at `in_range.hi`.
//! - `sample_3d` returns exactly `N^3` triplets with red varying fastest,
//!   then green, then blue.
//! - Quantization (truncate to integer) happens iff the preset's output
//!   range is integer-typed, per [`lutbake_core::Range::is_int`].
//!
//! The parallel 3D path ([`sampler::sample_3d_par`]) produces output
//! identical to the sequential walk; only wall-clock time differs.
//!
//! # Usage
//!
//! ```rust
//! use lutbake_core::{Identity, LutType, Preset, Range, Resolution};
//! use lutbake_sample::sampler;
//!
//! let preset = Preset {
//!     lut_type: LutType::ThreeD,
//!     extension: ".cube".into(),
//!     in_range: Range::float(0.0, 1.0),
//!     out_range: Range::float(0.0, 1.0),
//!     resolution: Resolution::CubeSize(17),
//!     title: "identity".into(),
//!     comment: String::new(),
//!     version: "1".into(),
//! };
//! let samples = sampler::sample_3d(&Identity, &preset).unwrap();
//! assert_eq!(samples.len(), 17 * 17 * 17);
//! ```
//!
//! # Dependencies
//!
//! - [`lutbake-core`] - Presets, ranges, the transform capability
//! - [`rayon`] - Parallel 3D sampling
//!
//! # Used By
//!
//! - `lutbake-formats` - Format writers obtain their data here

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod format;
pub mod sampler;

pub use format::{format_channel, format_r_line, format_rgb_line};
pub use sampler::{grid_values, sample_1d, sample_3d, sample_3d_par, sample_3d_with_progress};
