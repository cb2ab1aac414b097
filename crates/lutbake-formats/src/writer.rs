//! The polymorphic format-writer contract.

use std::io::Write;
use std::path::Path;

use lutbake_core::{LutResult, Preset, RgbTransform};

/// How `validate_preset` treats a dimensionality the format cannot encode.
///
/// The two behaviors are explicit, never implicit: callers choose one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidateMode {
    /// Fail with [`lutbake_core::LutError::UnsupportedDimensionality`].
    Strict,
    /// Substitute the format's default dimensionality and resolution.
    Fallback,
}

/// One output encoding.
///
/// Implementations obtain samples from `lutbake-sample`, render them
/// (via the line formatter or a format-specific structured encoding),
/// and persist through [`commit`]. A format that does not support a
/// dimensionality must reject the call before any sampling happens, so
/// a mismatch costs zero transform calls and zero filesystem writes.
pub trait LutWriter: Send + Sync {
    /// Short format name, as used by the registry.
    fn name(&self) -> &'static str;

    /// Canonical preset for this format: its supported dimensionality,
    /// default resolution, extension, and version string.
    fn default_preset(&self) -> Preset;

    /// Normalizes and checks a caller preset against this format.
    fn validate_preset(&self, preset: Preset, mode: ValidateMode) -> LutResult<Preset>;

    /// Samples the transform as a 1D LUT and writes the artifact.
    ///
    /// Returns the export confirmation message.
    fn write_1d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String>;

    /// Samples the transform as a 2D LUT and writes the artifact.
    fn write_2d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String>;

    /// Samples the transform as a 3D LUT and writes the artifact.
    fn write_3d(
        &self,
        transform: &dyn RgbTransform,
        path: &Path,
        preset: &Preset,
    ) -> LutResult<String>;
}

/// Short display name of an artifact (file stem, or the whole file name
/// if there is no stem).
pub fn file_shortname(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Export confirmation message for a written artifact.
pub fn export_message(path: &Path) -> String {
    format!(
        "{}: a new LUT was written in {}",
        file_shortname(path),
        path.display()
    )
}

/// Atomically persists a fully buffered artifact.
///
/// Writes to a temporary file in the target's directory, then renames
/// over the target. A failure at any point leaves the target untouched;
/// there is no partially written artifact state.
pub fn commit(path: &Path, bytes: &[u8]) -> LutResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "committed LUT artifact");
    Ok(())
}
