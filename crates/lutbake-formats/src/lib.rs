//! # lutbake-formats
//!
//! Pluggable LUT output formats.
//!
//! Every concrete format implements the [`LutWriter`] contract:
//! a canonical default preset, explicit preset validation, and one write
//! entry point per dimensionality. Adding a new output encoding means
//! implementing that trait and registering it; the sampler, the line
//! formatter, and the colorspace model are never touched.
//!
//! # Included Formats
//!
//! | Format | Dimensionality | Encoding |
//! |--------|----------------|----------|
//! | [`json`] | 3D only | Structured object with flat channel arrays |
//! | [`cube`] | 1D / 2D / 3D | Text, one formatted line per sample |
//!
//! # Usage
//!
//! ```rust,no_run
//! use lutbake_core::Identity;
//! use lutbake_formats::{FormatRegistry, LutWriter};
//! use std::path::Path;
//!
//! let writer = FormatRegistry::global().by_name("json").unwrap();
//! let preset = writer.default_preset();
//! let msg = writer.write_3d(&Identity, Path::new("identity.json"), &preset).unwrap();
//! println!("{msg}");
//! ```
//!
//! # Persistence
//!
//! Artifacts are buffered fully in memory and committed through a
//! temp-file-plus-rename step; no failure path leaves a partial file.
//!
//! # Dependencies
//!
//! - [`lutbake-core`] - Presets, errors, the transform capability
//! - [`lutbake-sample`] - Grid sampler and line formatter
//! - [`serde`] / [`serde_json`] - The structured JSON format
//! - [`tempfile`] - Atomic artifact commit
//! - [`tracing`] - Write-path diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cube;
pub mod json;
pub mod registry;
pub mod writer;

pub use cube::CubeWriter;
pub use json::JsonWriter;
pub use registry::FormatRegistry;
pub use writer::{commit, export_message, file_shortname, LutWriter, ValidateMode};
