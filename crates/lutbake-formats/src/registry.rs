//! Process-wide registry of format writers.
//!
//! Built once at first access, read-only afterwards; lookups are cheap
//! and the global instance can be shared across threads.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::cube::CubeWriter;
use crate::json::JsonWriter;
use crate::writer::LutWriter;

/// Immutable name-to-writer registry.
///
/// # Example
///
/// ```rust
/// use lutbake_formats::FormatRegistry;
///
/// let registry = FormatRegistry::global();
/// assert!(registry.by_name("json").is_some());
/// assert!(registry.by_extension("cube").is_some());
/// ```
pub struct FormatRegistry {
    writers: HashMap<&'static str, &'static dyn LutWriter>,
}

impl FormatRegistry {
    /// Returns the global registry with the built-in formats.
    pub fn global() -> &'static FormatRegistry {
        static INSTANCE: OnceLock<FormatRegistry> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut writers: HashMap<&'static str, &'static dyn LutWriter> = HashMap::new();
            writers.insert(JsonWriter.name(), &JsonWriter);
            writers.insert(CubeWriter.name(), &CubeWriter);
            FormatRegistry { writers }
        })
    }

    /// Looks up a writer by format name.
    pub fn by_name(&self, name: &str) -> Option<&'static dyn LutWriter> {
        self.writers.get(name).copied()
    }

    /// Looks up a writer by file extension, with or without leading dot.
    pub fn by_extension(&self, ext: &str) -> Option<&'static dyn LutWriter> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.writers
            .values()
            .find(|w| {
                w.default_preset()
                    .extension
                    .strip_prefix('.')
                    .is_some_and(|e| e == ext)
            })
            .copied()
    }

    /// Names of all registered formats, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.writers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
