//! Chromaticity coordinates and colorspace primaries.

/// A CIE xy chromaticity coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// CIE x coordinate.
    pub x: f64,
    /// CIE y coordinate.
    pub y: f64,
}

impl Chromaticity {
    /// Creates a chromaticity from xy coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// RGB primaries plus white point for one colorspace.
///
/// Static descriptive data; the transfer functions live on the
/// [`crate::Colorspace`] trait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary chromaticity.
    pub r: Chromaticity,
    /// Green primary chromaticity.
    pub g: Chromaticity,
    /// Blue primary chromaticity.
    pub b: Chromaticity,
    /// White point chromaticity.
    pub w: Chromaticity,
    /// Colorspace name.
    pub name: &'static str,
}

/// D65 white point (daylight, ~6500K).
pub const D65: Chromaticity = Chromaticity::new(0.3127, 0.3290);

/// Rec.709 / sRGB primaries with D65 white.
pub const REC709: Primaries = Primaries {
    r: Chromaticity::new(0.640, 0.330),
    g: Chromaticity::new(0.300, 0.600),
    b: Chromaticity::new(0.150, 0.060),
    w: D65,
    name: "Rec709",
};

/// ALEXA Wide Gamut primaries with D65 white.
pub const ALEXA_WIDE_GAMUT: Primaries = Primaries {
    r: Chromaticity::new(0.6840, 0.3130),
    g: Chromaticity::new(0.2210, 0.8480),
    b: Chromaticity::new(0.0861, -0.1020),
    w: D65,
    name: "AlexaWideGamut",
};
