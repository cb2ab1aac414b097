//! Polymorphic colorspace model and registry.
//!
//! A [`Colorspace`] bundles primaries, a white point, and the forward and
//! inverse transfer functions of one named colorspace. Instances are
//! stateless unit structs; the registry hands out `&'static dyn`
//! references and is built once, never mutated.

use std::collections::HashMap;
use std::sync::OnceLock;

use lutbake_core::RgbTransform;

use crate::primaries::{Chromaticity, ALEXA_WIDE_GAMUT, REC709};
use crate::{alexa_log_c, rec709};

/// A named colorspace: primaries, white point, and transfer functions.
///
/// `lin_to_gamma` / `gamma_to_lin` must be mutual inverses across the
/// working domain and continuous at their piecewise breakpoint.
pub trait Colorspace: Send + Sync {
    /// Colorspace name, as used by the registry.
    fn name(&self) -> &'static str;

    /// Red primary chromaticity.
    fn red_primary(&self) -> Chromaticity;

    /// Green primary chromaticity.
    fn green_primary(&self) -> Chromaticity;

    /// Blue primary chromaticity.
    fn blue_primary(&self) -> Chromaticity;

    /// White point chromaticity.
    fn white_point(&self) -> Chromaticity;

    /// Converts a value from linear to encoded (gamma) representation.
    fn lin_to_gamma(&self, v: f64) -> f64;

    /// Converts a value from encoded (gamma) to linear representation.
    fn gamma_to_lin(&self, v: f64) -> f64;
}

/// Rec.709 colorspace (BT.709 primaries and gamma law).
#[derive(Debug, Clone, Copy, Default)]
pub struct Rec709;

impl Colorspace for Rec709 {
    fn name(&self) -> &'static str {
        REC709.name
    }

    fn red_primary(&self) -> Chromaticity {
        REC709.r
    }

    fn green_primary(&self) -> Chromaticity {
        REC709.g
    }

    fn blue_primary(&self) -> Chromaticity {
        REC709.b
    }

    fn white_point(&self) -> Chromaticity {
        REC709.w
    }

    #[inline]
    fn lin_to_gamma(&self, v: f64) -> f64 {
        rec709::lin_to_gamma(v)
    }

    #[inline]
    fn gamma_to_lin(&self, v: f64) -> f64 {
        rec709::gamma_to_lin(v)
    }
}

/// ALEXA LogC v3 colorspace (ALEXA Wide Gamut primaries, LogC3 curve).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlexaLogCV3;

impl Colorspace for AlexaLogCV3 {
    fn name(&self) -> &'static str {
        "AlexaLogCV3"
    }

    fn red_primary(&self) -> Chromaticity {
        ALEXA_WIDE_GAMUT.r
    }

    fn green_primary(&self) -> Chromaticity {
        ALEXA_WIDE_GAMUT.g
    }

    fn blue_primary(&self) -> Chromaticity {
        ALEXA_WIDE_GAMUT.b
    }

    fn white_point(&self) -> Chromaticity {
        ALEXA_WIDE_GAMUT.w
    }

    #[inline]
    fn lin_to_gamma(&self, v: f64) -> f64 {
        alexa_log_c::lin_to_gamma(v)
    }

    #[inline]
    fn gamma_to_lin(&self, v: f64) -> f64 {
        alexa_log_c::gamma_to_lin(v)
    }
}

/// Wraps a colorspace's `lin_to_gamma` as a per-channel [`RgbTransform`].
///
/// Lets a colorspace serve directly as the sampler's transform capability
/// when baking an encoding LUT.
pub struct LinToGamma<'a>(pub &'a dyn Colorspace);

impl RgbTransform for LinToGamma<'_> {
    #[inline]
    fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.0.lin_to_gamma(rgb[0]),
            self.0.lin_to_gamma(rgb[1]),
            self.0.lin_to_gamma(rgb[2]),
        ]
    }
}

/// Wraps a colorspace's `gamma_to_lin` as a per-channel [`RgbTransform`].
pub struct GammaToLin<'a>(pub &'a dyn Colorspace);

impl RgbTransform for GammaToLin<'_> {
    #[inline]
    fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        [
            self.0.gamma_to_lin(rgb[0]),
            self.0.gamma_to_lin(rgb[1]),
            self.0.gamma_to_lin(rgb[2]),
        ]
    }
}

static REGISTRY: OnceLock<HashMap<&'static str, &'static dyn Colorspace>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, &'static dyn Colorspace> {
    REGISTRY.get_or_init(|| {
        let mut map: HashMap<&'static str, &'static dyn Colorspace> = HashMap::new();
        map.insert("Rec709", &Rec709);
        map.insert("AlexaLogCV3", &AlexaLogCV3);
        map
    })
}

/// Looks up a colorspace by name.
///
/// # Example
///
/// ```rust
/// use lutbake_transfer::{colorspace, Colorspace};
///
/// let cs = colorspace::colorspace("AlexaLogCV3").unwrap();
/// assert_eq!(cs.name(), "AlexaLogCV3");
/// assert!(colorspace::colorspace("NoSuchSpace").is_none());
/// ```
pub fn colorspace(name: &str) -> Option<&'static dyn Colorspace> {
    registry().get(name).copied()
}

/// Names of all registered colorspaces, sorted.
pub fn colorspace_names() -> Vec<&'static str> {
    let mut names: Vec<_> = registry().keys().copied().collect();
    names.sort_unstable();
    names
}
