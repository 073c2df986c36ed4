//! Word lists that fixture identifiers and annotations are sampled from.
//!
//! Sampling is always with replacement, so a short list simply produces more
//! repeated names; only an empty list makes generation impossible.

use serde::{Deserialize, Serialize};

/// Base names for top-level functions. A `_<position>` suffix is appended.
pub const FUNCTION_VERBS: &[&str] = &[
    "process_data",
    "validate_input",
    "transform_output",
    "fetch_resource",
    "parse_config",
    "serialize_object",
    "deserialize_json",
    "calculate_metrics",
    "cleanup_resources",
    "initialize_service",
];

/// Base names for classes. A `<position>` suffix is appended.
pub const CLASS_NOUNS: &[&str] = &[
    "DataProcessor",
    "FileHandler",
    "ConfigManager",
    "APIClient",
    "CacheManager",
    "LoggerFactory",
    "ValidationEngine",
    "SerializerBase",
    "ConnectionPool",
    "TaskExecutor",
];

/// Method names, used verbatim.
pub const METHOD_VERBS: &[&str] = &[
    "setup",
    "teardown",
    "validate",
    "execute",
    "process",
    "transform",
    "serialize",
    "deserialize",
    "connect",
    "disconnect",
];

/// Parameter and attribute names.
pub const PARAM_NAMES: &[&str] = &[
    "data",
    "config",
    "options",
    "context",
    "payload",
    "metadata",
    "parameters",
    "settings",
    "attributes",
    "properties",
];

/// Type annotations. Every name used here is imported by the module preamble.
pub const TYPE_HINTS: &[&str] = &[
    "str",
    "int",
    "bool",
    "dict[str, Any]",
    "list[str]",
    "Path",
    "datetime",
    "UUID",
];

/// The complete set of word lists used by the sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Function base names.
    pub function_verbs: Vec<String>,
    /// Class base names.
    pub class_nouns: Vec<String>,
    /// Method names.
    pub method_verbs: Vec<String>,
    /// Parameter and attribute names.
    pub param_names: Vec<String>,
    /// Type annotations.
    pub type_hints: Vec<String>,
}

impl Vocabulary {
    /// Returns the built-in vocabulary shared by the whole process.
    #[must_use]
    pub fn standard() -> &'static Vocabulary {
        static STANDARD: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        STANDARD.get_or_init(|| Vocabulary {
            function_verbs: owned(FUNCTION_VERBS),
            class_nouns: owned(CLASS_NOUNS),
            method_verbs: owned(METHOD_VERBS),
            param_names: owned(PARAM_NAMES),
            type_hints: owned(TYPE_HINTS),
        })
    }

    /// Returns the field names of every list that has no entries.
    #[must_use]
    pub fn empty_lists(&self) -> Vec<&'static str> {
        let lists: [(&'static str, &Vec<String>); 5] = [
            ("function_verbs", &self.function_verbs),
            ("class_nouns", &self.class_nouns),
            ("method_verbs", &self.method_verbs),
            ("param_names", &self.param_names),
            ("type_hints", &self.type_hints),
        ];
        lists
            .into_iter()
            .filter(|(_, words)| words.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard().clone()
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_lists_are_populated() {
        let v = Vocabulary::standard();
        assert_eq!(v.function_verbs.len(), 10);
        assert_eq!(v.class_nouns.len(), 10);
        assert_eq!(v.method_verbs.len(), 10);
        assert_eq!(v.param_names.len(), 10);
        assert_eq!(v.type_hints.len(), 8);
        assert!(v.empty_lists().is_empty());
    }

    #[test]
    fn empty_lists_are_named() {
        let mut v = Vocabulary::default();
        v.type_hints.clear();
        v.class_nouns.clear();
        assert_eq!(v.empty_lists(), vec!["class_nouns", "type_hints"]);
    }
}
