//! JSON manifest of a generated corpus.
//!
//! The manifest is the ground truth an indexing benchmark compares against:
//! for every written file it records the index, the seed that produced it,
//! its line count, and the full [`ModuleSpec`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::ModuleSpec;

/// Manifest file name written next to the generated modules.
pub const MANIFEST_FILE: &str = "manifest.json";

/// One generated file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name relative to the corpus directory.
    pub path: String,
    /// Module index.
    pub index: u32,
    /// Seed the module was sampled with.
    pub seed: u64,
    /// Number of lines in the rendered text.
    pub lines: usize,
    /// The sampled module description.
    pub module: ModuleSpec,
}

/// All entries of a corpus, in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusManifest {
    /// Version of the generator that wrote the corpus.
    pub generator: String,
    /// Base seed the per-module seeds were derived from.
    pub base_seed: u64,
    /// Per-file entries.
    pub entries: Vec<ManifestEntry>,
}

impl CorpusManifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new(base_seed: u64) -> Self {
        Self {
            generator: concat!("pyfixture ", env!("CARGO_PKG_VERSION")).to_string(),
            base_seed,
            entries: Vec::new(),
        }
    }

    /// Returns the total number of functions recorded.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.entries.iter().map(|e| e.module.function_count()).sum()
    }

    /// Returns the total number of classes recorded.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.entries.iter().map(|e| e.module.class_count()).sum()
    }
}

/// Serializes a manifest to a JSON `Value`.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(manifest: &CorpusManifest) -> serde_json::Result<Value> {
    serde_json::to_value(manifest)
}

/// Serializes a manifest to pretty-printed JSON text.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_string(manifest: &CorpusManifest) -> serde_json::Result<String> {
    serde_json::to_string_pretty(manifest)
}

/// Parses a manifest from JSON text.
///
/// # Errors
///
/// Returns an error if `text` is not a valid manifest document.
pub fn from_json_str(text: &str) -> serde_json::Result<CorpusManifest> {
    serde_json::from_str(text)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::{Item, Param};
    use crate::FunctionSpec;

    #[test]
    fn items_are_tagged_by_kind() {
        let mut manifest = CorpusManifest::new(42);
        let mut module = ModuleSpec::new(0);
        module.items.push(Item::Function(FunctionSpec {
            name: "fetch_resource_0".to_string(),
            params: vec![Param::new("context", "UUID"), Param::new("context_2", "int")],
            return_type: "str".to_string(),
        }));
        manifest.entries.push(ManifestEntry {
            path: "module_0000.py".to_string(),
            index: 0,
            seed: 42,
            lines: 30,
            module,
        });

        let json = to_json(&manifest).expect("manifest serializes");
        assert_eq!(json["entries"][0]["module"]["items"][0]["kind"], "function");
        assert_eq!(
            json["entries"][0]["module"]["items"][0]["params"][1]["name"],
            "context_2"
        );
    }

    #[test]
    fn text_parses_back() {
        let manifest = CorpusManifest::new(7);
        let text = to_json_string(&manifest).unwrap_or_default();
        let parsed = from_json_str(&text).ok();
        assert_eq!(parsed, Some(manifest));
    }
}
