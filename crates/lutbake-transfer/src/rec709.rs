//! Rec.709 (BT.709) transfer function.
//!
//! The BT.709 OETF pair: linear below the breakpoint, power law above.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Linear-domain breakpoint.
const CUT_LIN: f64 = 0.018;
/// Encoded-domain breakpoint (4.5 * CUT_LIN).
const CUT_GAMMA: f64 = 0.081;

/// Encodes linear light to Rec.709 gamma.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn lin_to_gamma(l: f64) -> f64 {
    if l < CUT_LIN {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Decodes Rec.709 gamma to linear light.
#[inline]
pub fn gamma_to_lin(v: f64) -> f64 {
    if v < CUT_GAMMA {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}
