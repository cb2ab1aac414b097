//! Grid sampling of color transforms.
//!
//! Both entry points validate the preset against the requested mode
//! before any transform call is made; a mismatched preset costs zero
//! transform invocations.

use rayon::prelude::*;

use lutbake_core::{LutError, LutResult, Preset, Range, Rgb, RgbTransform};

/// Inclusive, evenly spaced sample positions over a range.
///
/// `count` must be at least 2; index 0 is `range.lo` and index
/// `count - 1` is `range.hi`. This is the exact axis every sampler uses,
/// exposed so structured formats can reproduce grid coordinates.
pub fn grid_values(range: &Range, count: usize) -> Vec<f64> {
    let lo = range.lo();
    let span = range.hi() - lo;
    (0..count)
        .map(|i| lo + span * (i as f64 / (count - 1) as f64))
        .collect()
}

/// Remaps one transform output through the preset's output range.
///
/// Each channel becomes `x * out_hi + out_lo`; integer-typed output
/// ranges additionally truncate toward zero. The integer decision is
/// [`Range::is_int`] and nothing else, for the 1D and 3D paths alike.
fn remap(out: [f64; 3], out_range: &Range) -> Rgb {
    let lo = out_range.lo();
    let hi = out_range.hi();
    let quantize = out_range.is_int();
    let map = |x: f64| {
        let v = x * hi + lo;
        if quantize { v.trunc() } else { v }
    };
    Rgb::new(map(out[0]), map(out[1]), map(out[2]))
}

fn require_1d_or_2d(preset: &Preset) -> LutResult<usize> {
    preset.check()?;
    preset.sample_count().ok_or(LutError::PresetMismatch {
        expected: "1D/2D",
        found: preset.lut_type,
    })
}

fn require_3d(preset: &Preset) -> LutResult<usize> {
    preset.check()?;
    preset.cube_size().ok_or(LutError::PresetMismatch {
        expected: "3D",
        found: preset.lut_type,
    })
}

/// Samples a transform over a 1D/2D grid.
///
/// Produces `2^bitdepth` gray-axis samples: each input value `v` is fed
/// to the transform as `(v, v, v)` and the result remapped through the
/// output range. Ascending input order is a contract; index 0 maps
/// `in_range.lo`, the last index `in_range.hi`.
///
/// # Errors
///
/// [`LutError::PresetMismatch`] for 3D presets,
/// [`LutError::InvalidPreset`] for malformed presets. Neither makes any
/// transform call.
pub fn sample_1d<T>(transform: &T, preset: &Preset) -> LutResult<Vec<Rgb>>
where
    T: RgbTransform + ?Sized,
{
    let count = require_1d_or_2d(preset)?;
    let data = grid_values(&preset.in_range, count)
        .into_iter()
        .map(|v| remap(transform.apply_rgb([v, v, v]), &preset.out_range))
        .collect();
    Ok(data)
}

/// Samples a transform over a 3D grid, sequentially.
///
/// Produces exactly `N^3` triplets with blue as the outermost axis,
/// green in the middle, and red varying fastest. That enumeration order
/// is a hard contract; every consumer assumes red-fastest layout.
///
/// # Errors
///
/// [`LutError::PresetMismatch`] for non-3D presets,
/// [`LutError::InvalidPreset`] for malformed presets. Neither makes any
/// transform call.
pub fn sample_3d<T>(transform: &T, preset: &Preset) -> LutResult<Vec<Rgb>>
where
    T: RgbTransform + ?Sized,
{
    let size = require_3d(preset)?;
    let axis = grid_values(&preset.in_range, size);

    let mut data = Vec::with_capacity(size * size * size);
    for &blue in &axis {
        for &green in &axis {
            for &red in &axis {
                data.push(remap(
                    transform.apply_rgb([red, green, blue]),
                    &preset.out_range,
                ));
            }
        }
    }
    Ok(data)
}

/// Samples a transform over a 3D grid, in parallel.
///
/// Grid points are independent, so transform calls are spread across the
/// rayon pool; results are reassembled so the output is identical to
/// [`sample_3d`], element for element.
pub fn sample_3d_par<T>(transform: &T, preset: &Preset) -> LutResult<Vec<Rgb>>
where
    T: RgbTransform + ?Sized,
{
    let size = require_3d(preset)?;
    let axis = grid_values(&preset.in_range, size);
    let total = size * size * size;

    // Flat index decomposes as red-fastest: i = r + g*N + b*N^2.
    let data = (0..total)
        .into_par_iter()
        .map(|i| {
            let red = axis[i % size];
            let green = axis[(i / size) % size];
            let blue = axis[i / (size * size)];
            remap(transform.apply_rgb([red, green, blue]), &preset.out_range)
        })
        .collect();
    Ok(data)
}

/// Samples a 3D grid with a progress/cancellation callback.
///
/// `on_progress` is invoked once per completed blue slice with
/// `(samples_done, samples_total)`. Returning `false` aborts the walk
/// with [`LutError::Cancelled`]; no partial data is returned.
///
/// Large cubes reach hundreds of thousands of transform calls, which is
/// what this hook exists for.
pub fn sample_3d_with_progress<T>(
    transform: &T,
    preset: &Preset,
    mut on_progress: impl FnMut(usize, usize) -> bool,
) -> LutResult<Vec<Rgb>>
where
    T: RgbTransform + ?Sized,
{
    let size = require_3d(preset)?;
    let axis = grid_values(&preset.in_range, size);
    let total = size * size * size;

    let mut data = Vec::with_capacity(total);
    for &blue in &axis {
        for &green in &axis {
            for &red in &axis {
                data.push(remap(
                    transform.apply_rgb([red, green, blue]),
                    &preset.out_range,
                ));
            }
        }
        if !on_progress(data.len(), total) {
            return Err(LutError::Cancelled {
                done: data.len(),
                total,
            });
        }
    }
    Ok(data)
}
