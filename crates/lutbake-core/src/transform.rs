//! The opaque color-transform capability.
//!
//! The sampler never inspects a transform's internals; anything that can
//! map one RGB triplet to another can be sampled into a LUT. Closures get
//! a blanket implementation, so callers can pass `|rgb| ...` directly.

/// A pure RGB-to-RGB color transform.
///
/// Implementations must be side-effect-free: the sampler may invoke
/// `apply_rgb` from multiple threads and in any order, and only the
/// reassembled output order is observable.
///
/// # Example
///
/// ```rust
/// use lutbake_core::RgbTransform;
///
/// let gain = |rgb: [f64; 3]| [rgb[0] * 2.0, rgb[1] * 2.0, rgb[2] * 2.0];
/// assert_eq!(gain.apply_rgb([0.25, 0.5, 0.0]), [0.5, 1.0, 0.0]);
/// ```
pub trait RgbTransform: Sync {
    /// Applies the transform to one RGB triplet.
    fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3];
}

impl<F> RgbTransform for F
where
    F: Fn([f64; 3]) -> [f64; 3] + Sync,
{
    #[inline]
    fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        self(rgb)
    }
}

/// The identity transform; bakes identity LUTs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl RgbTransform for Identity {
    #[inline]
    fn apply_rgb(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb
    }
}
