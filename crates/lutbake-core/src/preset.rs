//! LUT generation presets.
//!
//! A [`Preset`] bundles everything one LUT-generation operation needs to
//! know: dimensionality, input/output ranges, resolution, and artifact
//! metadata. Presets are built once (typically by a format writer's
//! `default_preset`) and read-only afterwards.

use std::fmt;

use crate::error::{LutError, LutResult};
use crate::range::Range;

/// Maximum accepted 1D/2D bit depth (2^16 = 65536 samples).
pub const MAX_BITDEPTH: u32 = 16;

/// LUT dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LutType {
    /// 1D LUT: one curve applied to all channels.
    OneD,
    /// 2D LUT: one curve per channel.
    TwoD,
    /// 3D LUT: full RGB cube.
    ThreeD,
}

impl fmt::Display for LutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LutType::OneD => "1D",
            LutType::TwoD => "2D",
            LutType::ThreeD => "3D",
        };
        f.write_str(s)
    }
}

/// Sampling resolution for one LUT.
///
/// 1D/2D LUTs are sized by bit depth (sample count = `2^bitdepth`),
/// 3D LUTs by per-axis cube size (sample count = `N^3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// 1D/2D sample-count exponent.
    BitDepth(u32),
    /// 3D per-axis sample count.
    CubeSize(usize),
}

/// Configuration for one LUT-generation operation.
///
/// # Example
///
/// ```rust
/// use lutbake_core::{LutType, Preset, Range, Resolution};
///
/// let preset = Preset {
///     lut_type: LutType::ThreeD,
///     extension: ".cube".into(),
///     in_range: Range::float(0.0, 1.0),
///     out_range: Range::float(0.0, 1.0),
///     resolution: Resolution::CubeSize(33),
///     title: "identity".into(),
///     comment: String::new(),
///     version: "1".into(),
/// };
/// assert!(preset.check().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Dimensionality of the LUT to generate.
    pub lut_type: LutType,
    /// Artifact file extension, with leading dot (e.g. ".cube").
    pub extension: String,
    /// Input sampling range.
    pub in_range: Range,
    /// Output remap range; its typing decides quantization.
    pub out_range: Range,
    /// Sampling resolution; variant must agree with `lut_type`.
    pub resolution: Resolution,
    /// Human-readable LUT title.
    pub title: String,
    /// Free-text comment embedded in the artifact where supported.
    pub comment: String,
    /// Format version string.
    pub version: String,
}

impl Preset {
    /// Validates the preset shape.
    ///
    /// Rejects with [`LutError::InvalidPreset`]:
    /// - resolution variant disagreeing with `lut_type`
    /// - bit depth outside `1..=16` (depth 0 would yield a single sample,
    ///   which cannot satisfy the endpoint contract)
    /// - cube size below 2
    /// - degenerate ranges (`lo >= hi`)
    /// - missing or dot-less extension
    pub fn check(&self) -> LutResult<()> {
        match (self.lut_type, self.resolution) {
            (LutType::OneD | LutType::TwoD, Resolution::BitDepth(depth)) => {
                if depth == 0 || depth > MAX_BITDEPTH {
                    return Err(LutError::InvalidPreset(format!(
                        "bit depth must be in 1..={MAX_BITDEPTH}, got {depth}"
                    )));
                }
            }
            (LutType::ThreeD, Resolution::CubeSize(size)) => {
                if size < 2 {
                    return Err(LutError::InvalidPreset(format!(
                        "cube size must be at least 2, got {size}"
                    )));
                }
            }
            (lut_type, resolution) => {
                return Err(LutError::InvalidPreset(format!(
                    "{lut_type} preset carries incompatible resolution {resolution:?}"
                )));
            }
        }

        if !self.in_range.is_well_formed() {
            return Err(LutError::InvalidPreset(format!(
                "input range {} is degenerate",
                self.in_range
            )));
        }
        if !self.out_range.is_well_formed() {
            return Err(LutError::InvalidPreset(format!(
                "output range {} is degenerate",
                self.out_range
            )));
        }

        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(LutError::InvalidPreset(format!(
                "extension must start with '.', got {:?}",
                self.extension
            )));
        }

        Ok(())
    }

    /// 1D/2D sample count (`2^bitdepth`), if this is a 1D/2D preset.
    pub fn sample_count(&self) -> Option<usize> {
        match self.resolution {
            Resolution::BitDepth(depth) => Some(1usize << depth),
            Resolution::CubeSize(_) => None,
        }
    }

    /// Per-axis cube size, if this is a 3D preset.
    pub fn cube_size(&self) -> Option<usize> {
        match self.resolution {
            Resolution::CubeSize(size) => Some(size),
            Resolution::BitDepth(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset_1d(depth: u32) -> Preset {
        Preset {
            lut_type: LutType::OneD,
            extension: ".lut".into(),
            in_range: Range::float(0.0, 1.0),
            out_range: Range::int(0, 1023),
            resolution: Resolution::BitDepth(depth),
            title: "test".into(),
            comment: String::new(),
            version: "1".into(),
        }
    }

    fn preset_3d(size: usize) -> Preset {
        Preset {
            lut_type: LutType::ThreeD,
            extension: ".cube".into(),
            in_range: Range::float(0.0, 1.0),
            out_range: Range::float(0.0, 1.0),
            resolution: Resolution::CubeSize(size),
            title: "test".into(),
            comment: String::new(),
            version: "1".into(),
        }
    }

    #[test]
    fn accepts_valid_presets() {
        assert!(preset_1d(10).check().is_ok());
        assert!(preset_3d(17).check().is_ok());
    }

    #[test]
    fn rejects_bitdepth_zero() {
        assert!(matches!(
            preset_1d(0).check(),
            Err(LutError::InvalidPreset(_))
        ));
    }

    #[test]
    fn rejects_tiny_cube() {
        assert!(matches!(
            preset_3d(1).check(),
            Err(LutError::InvalidPreset(_))
        ));
    }

    #[test]
    fn rejects_resolution_mismatch() {
        let mut preset = preset_1d(10);
        preset.resolution = Resolution::CubeSize(17);
        assert!(matches!(preset.check(), Err(LutError::InvalidPreset(_))));

        let mut preset = preset_3d(17);
        preset.resolution = Resolution::BitDepth(10);
        assert!(matches!(preset.check(), Err(LutError::InvalidPreset(_))));
    }

    #[test]
    fn rejects_degenerate_range() {
        let mut preset = preset_3d(17);
        preset.in_range = Range::float(1.0, 0.0);
        assert!(matches!(preset.check(), Err(LutError::InvalidPreset(_))));
    }

    #[test]
    fn rejects_bad_extension() {
        let mut preset = preset_3d(17);
        preset.extension = "cube".into();
        assert!(matches!(preset.check(), Err(LutError::InvalidPreset(_))));
    }

    #[test]
    fn sample_counts() {
        assert_eq!(preset_1d(10).sample_count(), Some(1024));
        assert_eq!(preset_1d(10).cube_size(), None);
        assert_eq!(preset_3d(17).cube_size(), Some(17));
        assert_eq!(preset_3d(17).sample_count(), None);
    }
}
