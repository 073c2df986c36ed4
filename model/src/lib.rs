//! Fixture module data model.
//!
//! The `pyfixture-model` crate describes one synthetic Python module before it
//! is rendered to text: the ordered function and class definitions it contains,
//! the vocabularies their names are sampled from, and the JSON manifest that
//! records what a generated corpus holds.
//!
//! # Entry Point
//!
//! ```
//! let vocabulary = pyfixture_model::Vocabulary::standard();
//! assert_eq!(vocabulary.class_nouns.len(), 10);
//! assert!(vocabulary.type_hints.iter().any(|t| t == "dict[str, Any]"));
//! ```
//!
//! # Manifest
//!
//! ```
//! use pyfixture_model::manifest::{to_json, CorpusManifest};
//!
//! let manifest = CorpusManifest::new(42);
//! let json = to_json(&manifest)?;
//! assert_eq!(json["base_seed"], 42);
//! # Ok::<(), serde_json::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod manifest;
pub mod model;
pub mod vocabulary;

pub use model::{ClassSpec, FunctionSpec, Item, MethodBody, MethodSpec, ModuleSpec, Param};
pub use vocabulary::Vocabulary;

/// Width of the zero-padded module index used in docstrings and file names.
pub const INDEX_WIDTH: usize = 4;

/// Formats a module index the way it appears in the module docstring
/// (`Module 0032`). Indices wider than [`INDEX_WIDTH`] digits are printed in full.
#[must_use]
pub fn module_label(index: u32) -> String {
    format!("Module {index:0width$}", width = INDEX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_zero_padded() {
        assert_eq!(module_label(32), "Module 0032");
        assert_eq!(module_label(0), "Module 0000");
    }

    #[test]
    fn wide_label_is_not_truncated() {
        assert_eq!(module_label(123_456), "Module 123456");
    }
}
