//! End-to-end writer contract tests: registry lookup, colorspace-backed
//! transforms, artifact contents, and the no-side-effect rejection rules.

use std::sync::atomic::{AtomicUsize, Ordering};

use lutbake_core::{Identity, LutError, LutType, Range, Resolution};
use lutbake_formats::{FormatRegistry, JsonWriter, LutWriter, ValidateMode};
use lutbake_transfer::{colorspace, LinToGamma};

#[test]
fn bake_rec709_encode_curve_through_registry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rec709_encode.cube");

    let writer = FormatRegistry::global().by_extension("cube").unwrap();
    let mut preset = writer.default_preset();
    preset.lut_type = LutType::OneD;
    preset.resolution = Resolution::BitDepth(8);
    preset.title = "rec709 encode".into();
    let preset = writer.validate_preset(preset, ValidateMode::Strict).unwrap();

    let cs = colorspace("Rec709").unwrap();
    let msg = writer.write_1d(&LinToGamma(cs), &path, &preset).unwrap();
    assert!(msg.contains("rec709_encode"));
    assert!(msg.contains(&path.display().to_string()));

    let text = std::fs::read_to_string(&path).unwrap();
    let values: Vec<f64> = text
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("TITLE") && !l.starts_with("LUT_"))
        .map(|l| l.parse().unwrap())
        .collect();

    assert_eq!(values.len(), 256);
    assert_eq!(values[0], 0.0);
    assert!((values[255] - 1.0).abs() < 1e-5);
    // The OETF is monotonic, so samples must be too.
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    // Every value rendered with exactly 6 decimal places.
    let data_lines = text
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("TITLE") && !l.starts_with("LUT_"));
    for line in data_lines {
        let (_, frac) = line.split_once('.').unwrap();
        assert_eq!(frac.len(), 6, "line {line:?}");
    }
}

#[test]
fn bake_alexa_log_c_json_cube() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logc_decode.json");

    let writer = FormatRegistry::global().by_name("json").unwrap();
    let mut preset = writer.default_preset();
    preset.resolution = Resolution::CubeSize(5);

    let cs = colorspace("AlexaLogCV3").unwrap();
    writer
        .write_3d(&lutbake_transfer::GammaToLin(cs), &path, &preset)
        .unwrap();

    let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["cubesize"], 5);
    assert_eq!(doc["red_values"].as_array().unwrap().len(), 125);
    assert_eq!(doc["input_colors"].as_array().unwrap().len(), 125);

    // The decode of encoded 0.0 is below zero (LogC lifts black); the
    // grid's first sample must reflect the real curve, unclamped.
    let first = doc["red_values"][0].as_f64().unwrap();
    assert!(first < 0.0);
}

#[test]
fn cube_only_format_rejects_1d_2d_with_zero_side_effects() {
    let calls = AtomicUsize::new(0);
    let counting = |rgb: [f64; 3]| {
        calls.fetch_add(1, Ordering::Relaxed);
        rgb
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.json");
    let preset = JsonWriter.default_preset();

    for result in [
        JsonWriter.write_1d(&counting, &path, &preset),
        JsonWriter.write_2d(&counting, &path, &preset),
    ] {
        match result {
            Err(LutError::UnsupportedDimensionality { format, .. }) => assert_eq!(format, "json"),
            other => panic!("expected UnsupportedDimensionality, got {other:?}"),
        }
    }

    assert_eq!(calls.load(Ordering::Relaxed), 0, "transform was invoked");
    assert_eq!(
        std::fs::read_dir(dir.path()).unwrap().count(),
        0,
        "filesystem was touched"
    );
}

#[test]
fn quantized_int_artifact_stays_in_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("int.json");

    let mut preset = JsonWriter.default_preset();
    preset.resolution = Resolution::CubeSize(3);
    preset.out_range = Range::int(0, 255);

    JsonWriter.write_3d(&Identity, &path, &preset).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();

    for key in ["red_values", "green_values", "blue_values"] {
        for v in doc[key].as_array().unwrap() {
            let v = v.as_i64().expect("channel must serialize as integer");
            assert!((0..=255).contains(&v));
        }
    }
}

#[test]
fn failed_write_leaves_no_artifact() {
    let dir = tempfile::tempdir().unwrap();
    // Target inside a directory that does not exist: commit must fail
    // and must not create anything at the target path.
    let path = dir.path().join("missing").join("out.json");

    let preset = JsonWriter.default_preset();
    let err = JsonWriter.write_3d(&Identity, &path, &preset).unwrap_err();
    assert!(matches!(err, LutError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn invalid_preset_rejected_before_sampling() {
    let calls = AtomicUsize::new(0);
    let counting = |rgb: [f64; 3]| {
        calls.fetch_add(1, Ordering::Relaxed);
        rgb
    };

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut preset = JsonWriter.default_preset();
    preset.resolution = Resolution::CubeSize(1);

    let err = JsonWriter.write_3d(&counting, &path, &preset).unwrap_err();
    assert!(matches!(err, LutError::InvalidPreset(_)));
    assert_eq!(calls.load(Ordering::Relaxed), 0);
    assert!(!path.exists());
}
