//! Sampled RGB triplet.

/// A single sampled color triplet.
///
/// The numeric kind (integer vs. float) of the channel values is not
/// carried here; it is decided by the preset's output range
/// (see [`crate::Range::is_int`]). Integer-quantized samples are stored
/// as whole-valued f64s until they are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Creates a triplet from three channel values.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray triplet with all channels equal.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { r: v, g: v, b: v }
    }
}

impl From<[f64; 3]> for Rgb {
    #[inline]
    fn from(rgb: [f64; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Rgb> for [f64; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}
