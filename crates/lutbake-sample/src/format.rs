//! Line/value text formatting for sampled triplets.
//!
//! The single place numeric text policy is decided: integer-typed output
//! ranges render bare integers, everything else renders fixed 6-decimal
//! floats. Format writers call these helpers and never re-derive the
//! policy.

use lutbake_core::{Preset, Range, Rgb};

/// Renders one channel value under the range's numeric policy.
#[inline]
pub fn format_channel(out_range: &Range, v: f64) -> String {
    if out_range.is_int() {
        format!("{}", v as i64)
    } else {
        format!("{v:.6}")
    }
}

/// Renders a 1D LUT line: the red channel only.
pub fn format_r_line(preset: &Preset, rgb: &Rgb) -> String {
    format_channel(&preset.out_range, rgb.r)
}

/// Renders a 2D/3D LUT line: "r g b", space separated.
pub fn format_rgb_line(preset: &Preset, rgb: &Rgb) -> String {
    let out = &preset.out_range;
    format!(
        "{} {} {}",
        format_channel(out, rgb.r),
        format_channel(out, rgb.g),
        format_channel(out, rgb.b)
    )
}
