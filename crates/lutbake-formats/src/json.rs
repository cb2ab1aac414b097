//! JSON 3D LUT format.
//!
//! The reference structured format: a single JSON object with flat
//! channel arrays in red-fastest enumeration order plus the normalized
//! input grid.
//!
//! # Layout
//!
//! ```text
//! {
//!   "cubesize": 17,
//!   "red_values": [...],     // sampled red channel, red-fastest order
//!   "green_values": [...],
//!   "blue_values": [...],
//!   "input_colors": [[r, g, b], ...]  // grid inputs divided by cubesize
//! }
//! ```
//!
//! This format is 3D-only; 1D/2D requests are rejected before any
//! sampling or filesystem access.

use std::path::Path;

use serde::Serialize;

use lutbake_core::{LutError, LutResult, LutType, Preset, Range, Resolution, RgbTransform};
use lutbake_sample::{grid_values, sample_3d_par};

use crate::writer::{commit, export_message, LutWriter, ValidateMode};

/// Channel value that serializes as a bare integer or a float, matching
/// the preset's output-range typing.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
enum Channel {
    Int(i64),
    Float(f64),
}

#[derive(Serialize)]
struct JsonLut {
    cubesize: usize,
    red_values: Vec<Channel>,
    green_values: Vec<Channel>,
    blue_values: Vec<Channel>,
    input_colors: Vec<[f64; 3]>,
}

/// JSON LUT writer (3D only).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonWriter;

impl JsonWriter {
    const NAME: &'static str = "json";
}

impl LutWriter for JsonWriter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_preset(&self) -> Preset {
        Preset {
            lut_type: LutType::ThreeD,
            extension: ".json".into(),
            in_range: Range::new(0i64.into(), 1.0.into()),
            out_range: Range::new(0i64.into(), 1.0.into()),
            resolution: Resolution::CubeSize(17),
            title: "json LUT".into(),
            comment: format!("Generated by lutbake json writer {}", env!("CARGO_PKG_VERSION")),
            version: "1".into(),
        }
    }

    fn validate_preset(&self, mut preset: Preset, mode: ValidateMode) -> LutResult<Preset> {
        if preset.lut_type != LutType::ThreeD {
            match mode {
                ValidateMode::Strict => {
                    return Err(LutError::UnsupportedDimensionality {
                        format: Self::NAME,
                        lut_type: preset.lut_type,
                    });
                }
                ValidateMode::Fallback => {
                    let default = self.default_preset();
                    preset.lut_type = default.lut_type;
                    preset.resolution = default.resolution;
                }
            }
        }
        preset.check()?;
        Ok(preset)
    }

    fn write_1d(
        &self,
        _transform: &dyn RgbTransform,
        _path: &Path,
        _preset: &Preset,
    ) -> LutResult<String> {
        Err(LutError::UnsupportedDimensionality {
            format: Self::NAME,
            lut_type: LutType::OneD,
        })
    }

    fn write_2d(
        &self,
        _transform: &dyn RgbTransform,
        _path: &Path,
        _preset: &Preset,
    ) -> LutResult<String> {
        Err(LutError::UnsupportedDimensionality {
            format: Self::NAME,
            lut_type: LutType::TwoD,
        })
    }

    fn write_3d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String> {
        // The sampler validates shape and dimensionality before any
        // transform call; a non-3D preset dies there as PresetMismatch.
        let data = sample_3d_par(transform, preset)?;
        let size = preset.cube_size().unwrap_or_default();

        // Input grid in the same red-fastest order, normalized by cubesize.
        let axis = grid_values(&preset.in_range, size);
        let norm = size as f64;
        let mut input_colors = Vec::with_capacity(data.len());
        for &blue in &axis {
            for &green in &axis {
                for &red in &axis {
                    input_colors.push([red / norm, green / norm, blue / norm]);
                }
            }
        }

        let is_int = preset.out_range.is_int();
        let channel = |v: f64| {
            if is_int {
                Channel::Int(v as i64)
            } else {
                Channel::Float(v)
            }
        };

        let doc = JsonLut {
            cubesize: size,
            red_values: data.iter().map(|rgb| channel(rgb.r)).collect(),
            green_values: data.iter().map(|rgb| channel(rgb.g)).collect(),
            blue_values: data.iter().map(|rgb| channel(rgb.b)).collect(),
            input_colors,
        };

        let bytes = serde_json::to_vec(&doc).map_err(std::io::Error::from)?;
        commit(path, &bytes)?;
        Ok(export_message(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutbake_core::Identity;

    #[test]
    fn default_preset_is_3d_cube_17() {
        let preset = JsonWriter.default_preset();
        assert_eq!(preset.lut_type, LutType::ThreeD);
        assert_eq!(preset.cube_size(), Some(17));
        assert_eq!(preset.extension, ".json");
        // Mixed [0, 1.0] bounds: float-typed, rendered with decimals.
        assert!(!preset.out_range.is_int());
        assert!(preset.check().is_ok());
    }

    #[test]
    fn validate_strict_rejects_1d() {
        let mut preset = JsonWriter.default_preset();
        preset.lut_type = LutType::OneD;
        preset.resolution = Resolution::BitDepth(10);
        let err = JsonWriter
            .validate_preset(preset, ValidateMode::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            LutError::UnsupportedDimensionality { format: "json", .. }
        ));
    }

    #[test]
    fn validate_fallback_substitutes_default_shape() {
        let mut preset = JsonWriter.default_preset();
        preset.lut_type = LutType::OneD;
        preset.resolution = Resolution::BitDepth(10);
        let fixed = JsonWriter
            .validate_preset(preset, ValidateMode::Fallback)
            .unwrap();
        assert_eq!(fixed.lut_type, LutType::ThreeD);
        assert_eq!(fixed.cube_size(), Some(17));
    }

    #[test]
    fn artifact_shape_cube_2_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("identity.json");
        let mut preset = JsonWriter.default_preset();
        preset.resolution = Resolution::CubeSize(2);

        let msg = JsonWriter.write_3d(&Identity, &path, &preset).unwrap();
        assert!(msg.contains("identity"));

        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(doc["cubesize"], 2);
        let reds: Vec<f64> = doc["red_values"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        // Red varies fastest under identity.
        assert_eq!(reds, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        let blues: Vec<f64> = doc["blue_values"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_eq!(blues, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);

        // Input coordinates are divided by cubesize.
        let first = doc["input_colors"][0].as_array().unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], 0.0);
        let last = doc["input_colors"][7].as_array().unwrap();
        assert_eq!(last[0], 0.5);
    }

    #[test]
    fn integer_out_range_serializes_integers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("int.json");
        let mut preset = JsonWriter.default_preset();
        preset.resolution = Resolution::CubeSize(2);
        preset.out_range = Range::int(0, 255);

        JsonWriter.write_3d(&Identity, &path, &preset).unwrap();
        let doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        let max = &doc["red_values"][1];
        assert!(max.is_i64());
        assert_eq!(*max, serde_json::json!(255));
    }

    #[test]
    fn write_1d_never_touches_transform_or_disk() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let calls = AtomicUsize::new(0);
        let counting = |rgb: [f64; 3]| {
            calls.fetch_add(1, Ordering::Relaxed);
            rgb
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.json");

        let preset = JsonWriter.default_preset();
        let err = JsonWriter.write_1d(&counting, &path, &preset).unwrap_err();
        assert!(matches!(err, LutError::UnsupportedDimensionality { .. }));
        let err = JsonWriter.write_2d(&counting, &path, &preset).unwrap_err();
        assert!(matches!(err, LutError::UnsupportedDimensionality { .. }));

        assert_eq!(calls.load(Ordering::Relaxed), 0);
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
