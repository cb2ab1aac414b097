//! Cube-style text LUT format.
//!
//! Simple line-oriented text encoding supporting all three
//! dimensionalities: a short header, then one formatted line per sample.
//! 3D data lines are in red-fastest order, which is exactly the
//! sampler's enumeration order, so samples stream straight through.
//!
//! # Layout
//!
//! ```text
//! TITLE "ramp"
//! # optional comment
//! LUT_3D_SIZE 33
//!
//! 0.000000 0.000000 0.000000
//! ...
//! ```

use std::io::Write;
use std::path::Path;

use lutbake_core::{LutResult, LutType, Preset, Range, Resolution, Rgb, RgbTransform};
use lutbake_sample::{format_r_line, format_rgb_line, sample_1d, sample_3d_par};

use crate::writer::{commit, export_message, LutWriter, ValidateMode};

/// Cube text LUT writer (1D, 2D and 3D).
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeWriter;

impl CubeWriter {
    const NAME: &'static str = "cube";

    fn header(preset: &Preset, size_keyword: &str, count: usize) -> LutResult<Vec<u8>> {
        let mut buf = Vec::new();
        writeln!(buf, "TITLE \"{}\"", preset.title)?;
        if !preset.comment.is_empty() {
            writeln!(buf, "# {}", preset.comment)?;
        }
        writeln!(buf, "{size_keyword} {count}")?;
        writeln!(buf)?;
        Ok(buf)
    }

    fn write_lines(
        &self,
        path: &Path,
        preset: &Preset,
        data: &[Rgb],
        size_keyword: &str,
        count: usize,
        line: impl Fn(&Preset, &Rgb) -> String,
    ) -> LutResult<String> {
        let mut buf = Self::header(preset, size_keyword, count)?;
        for rgb in data {
            writeln!(buf, "{}", line(preset, rgb))?;
        }
        commit(path, &buf)?;
        Ok(export_message(path))
    }
}

impl LutWriter for CubeWriter {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn default_preset(&self) -> Preset {
        Preset {
            lut_type: LutType::ThreeD,
            extension: ".cube".into(),
            in_range: Range::float(0.0, 1.0),
            out_range: Range::float(0.0, 1.0),
            resolution: Resolution::CubeSize(33),
            title: "cube LUT".into(),
            comment: format!("Generated by lutbake cube writer {}", env!("CARGO_PKG_VERSION")),
            version: "1".into(),
        }
    }

    // Every dimensionality is encodable; validation only checks shape.
    fn validate_preset(&self, preset: Preset, _mode: ValidateMode) -> LutResult<Preset> {
        preset.check()?;
        Ok(preset)
    }

    fn write_1d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String> {
        let data = sample_1d(transform, preset)?;
        self.write_lines(path, preset, &data, "LUT_1D_SIZE", data.len(), |p, rgb| {
            format_r_line(p, rgb)
        })
    }

    fn write_2d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String> {
        let data = sample_1d(transform, preset)?;
        self.write_lines(path, preset, &data, "LUT_1D_SIZE", data.len(), |p, rgb| {
            format_rgb_line(p, rgb)
        })
    }

    fn write_3d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String> {
        let data = sample_3d_par(transform, preset)?;
        let size = preset.cube_size().unwrap_or_default();
        self.write_lines(path, preset, &data, "LUT_3D_SIZE", size, |p, rgb| {
            format_rgb_line(p, rgb)
        })
    }
}
