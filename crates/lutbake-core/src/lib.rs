//! # lutbake-core
//!
//! Core types for LUT baking.
//!
//! This crate provides the foundational types shared by every lutbake crate:
//!
//! - [`Rgb`] - A sampled color triplet
//! - [`Range`], [`Bound`] - Numeric ranges carrying their integer/float kind
//! - [`Preset`], [`LutType`], [`Resolution`] - Per-operation configuration
//! - [`RgbTransform`] - The opaque color-transform capability
//! - [`LutError`], [`LutResult`] - Unified error taxonomy
//!
//! ## Design Philosophy
//!
//! A LUT is a sampled rendition of a continuous color transform, and the
//! details downstream consumers depend on bit-for-bit (sample counts,
//! enumeration order, integer vs. float rendering) are all decided by the
//! types in this crate. In particular [`Range::is_int`] is the *single*
//! predicate that governs quantization everywhere: samplers and formatters
//! call it, nothing recomputes it.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of lutbake and has no internal dependencies.
//! All other lutbake crates depend on `lutbake-core`:
//!
//! ```text
//! lutbake-core (this crate)
//!    ^
//!    |
//!    +-- lutbake-transfer (colorspace transfer model)
//!    +-- lutbake-sample (grid sampler, line formatter)
//!    +-- lutbake-formats (format writers)
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error derive

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod preset;
pub mod range;
pub mod rgb;
pub mod transform;

pub use error::{LutError, LutResult};
pub use preset::{LutType, Preset, Resolution};
pub use range::{Bound, Range};
pub use rgb::Rgb;
pub use transform::{Identity, RgbTransform};
