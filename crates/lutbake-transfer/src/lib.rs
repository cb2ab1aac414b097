//! # lutbake-transfer
//!
//! Colorspace transfer functions and primaries.
//!
//! Each supported colorspace exposes chromaticity primaries, a white
//! point, and a forward/inverse transfer-function pair between linear
//! light and the encoded (gamma) representation.
//!
//! # Terminology
//!
//! - **lin_to_gamma**: Linear -> Encoded (OETF-style, e.g. for recording)
//! - **gamma_to_lin**: Encoded -> Linear (inverse)
//!
//! Both reference curves are piecewise: a linear segment near zero and a
//! power/log segment elsewhere, continuous at the breakpoint, with the
//! pair forming a mathematical inverse across the working domain.
//!
//! # Supported Colorspaces
//!
//! | Colorspace | Curve | Use case |
//! |------------|-------|----------|
//! | [`Rec709`](colorspace::Rec709) | BT.709 gamma law | HDTV broadcast |
//! | [`AlexaLogCV3`](colorspace::AlexaLogCV3) | ARRI LogC3 (EI 800) | Digital negative |
//!
//! # Usage
//!
//! ```rust
//! use lutbake_transfer::{colorspace, rec709, Colorspace};
//!
//! // Free functions for the hot path
//! let encoded = rec709::lin_to_gamma(0.18);
//!
//! // Polymorphic access through the registry
//! let cs = colorspace::colorspace("Rec709").unwrap();
//! let linear = cs.gamma_to_lin(encoded);
//! assert!((linear - 0.18).abs() < 1e-6);
//! ```
//!
//! A colorspace can also serve as the sampler's transform capability via
//! the [`colorspace::LinToGamma`] / [`colorspace::GammaToLin`] adapters.
//!
//! # Dependencies
//!
//! - [`lutbake-core`] - The `RgbTransform` capability trait
//!
//! # Used By
//!
//! - `lutbake-formats` - Baking encoding/decoding LUTs

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alexa_log_c;
pub mod colorspace;
pub mod primaries;
pub mod rec709;

pub use colorspace::{colorspace, colorspace_names, Colorspace, GammaToLin, LinToGamma};
pub use primaries::{Chromaticity, Primaries};
