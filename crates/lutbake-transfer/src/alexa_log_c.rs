//! ARRI ALEXA LogC (v3) transfer function.
//!
//! Logarithmic digital-negative encoding used by ARRI ALEXA cameras.
//! Constants are for EI 800, the most common exposure index.
//!
//! # Range
//!
//! - Encoded: [0, 1] signal range
//! - Linear: scene-referred relative exposure
//!
//! # Reference
//!
//! ARRI LogC3 specification

// LogC3 constants for EI 800.
const CUT: f64 = 0.010591;
const A: f64 = 5.555556;
const B: f64 = 0.052272;
const C: f64 = 0.247190;
const D: f64 = 0.385537;
const E: f64 = 5.367655;
const F: f64 = 0.092809;

/// Encodes linear scene light to LogC.
///
/// # Example
///
/// ```rust
/// use lutbake_transfer::alexa_log_c::lin_to_gamma;
///
/// // 18% gray lands near 0.391 in LogC
/// assert!((lin_to_gamma(0.18) - 0.391).abs() < 0.01);
/// ```
#[inline]
pub fn lin_to_gamma(l: f64) -> f64 {
    if l > CUT {
        C * (A * l + B).log10() + D
    } else {
        E * l + F
    }
}

/// Decodes LogC to linear scene light.
///
/// Exact algebraic inverse of [`lin_to_gamma`]; the branch threshold is
/// the encoded image of the linear-domain breakpoint.
#[inline]
pub fn gamma_to_lin(v: f64) -> f64 {
    if v > E * CUT + F {
        (10f64.powf((v - D) / C) - B) / A
    } else {
        (v - F) / E
    }
}
