//! Generator configuration.
//!
//! Every bound the generator samples within is a parameter rather than a
//! constant. Configuration can be loaded from TOML; any field left out takes
//! its default.
//!
//! ```toml
//! base_seed = 42
//! duplicate_params = "rename"
//!
//! [functions]
//! min = 1
//! max = 5
//!
//! [shape]
//! kind = "target_lines"
//! min = 50
//! max = 100
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pyfixture_model::Vocabulary;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};
use crate::naming::{is_annotation, is_identifier, is_python_keyword, is_valid_param_name};

/// Seed the baseline benchmark corpus is generated from.
pub const DEFAULT_BASE_SEED: u64 = 42;

/// An inclusive `min..=max` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Smallest value that may be sampled.
    pub min: usize,
    /// Largest value that may be sampled.
    pub max: usize,
}

impl CountRange {
    /// Creates a range. Does not check `min <= max`; see [`GeneratorConfig::validate`].
    #[must_use]
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns true if `n` lies within the range.
    #[must_use]
    pub fn contains(self, n: usize) -> bool {
        self.min <= n && n <= self.max
    }

    /// Draws a value uniformly from the range.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        if self.min >= self.max {
            self.min
        } else {
            rng.random_range(self.min..=self.max)
        }
    }

    fn check(self, what: &str) -> Result<()> {
        if self.min > self.max {
            return Err(GenerateError::invalid(format!(
                "{what} range {self} has min greater than max"
            )));
        }
        Ok(())
    }
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for CountRange {
    type Err = String;

    /// Parses `MIN-MAX` or a single `N` (meaning `N-N`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid count `{v}`: {e}"))
        };
        match s.split_once('-') {
            Some((min, max)) => Ok(Self::new(parse(min)?, parse(max)?)),
            None => {
                let n = parse(s)?;
                Ok(Self::new(n, n))
            }
        }
    }
}

/// How the number of definitions in a module is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Sample function and class counts from their ranges, then shuffle
    /// their order.
    Bounded,
    /// Sample a target line count and keep adding a function or a class
    /// (even odds) until the module reaches it.
    TargetLines {
        /// Smallest target.
        min: usize,
        /// Largest target.
        max: usize,
    },
}

/// What to do when a function signature samples the same parameter name twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateParams {
    /// Suffix later occurrences (`metadata`, `metadata_2`). Keeps the output
    /// valid Python.
    #[default]
    Rename,
    /// Emit the signature as sampled. Python rejects the result at compile time.
    Keep,
    /// Fail generation.
    Reject,
}

impl FromStr for DuplicateParams {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "rename" => Ok(Self::Rename),
            "keep" => Ok(Self::Keep),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown duplicate-parameter policy `{other}` (expected rename, keep, or reject)"
            )),
        }
    }
}

/// Replacement word lists. Lists left out keep the standard vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyOverrides {
    /// Function base names.
    pub function_verbs: Option<Vec<String>>,
    /// Class base names.
    pub class_nouns: Option<Vec<String>>,
    /// Method names.
    pub method_verbs: Option<Vec<String>>,
    /// Parameter names.
    pub param_names: Option<Vec<String>>,
    /// Type annotations.
    pub type_hints: Option<Vec<String>>,
}

impl VocabularyOverrides {
    /// Returns `base` with every overridden list replaced.
    #[must_use]
    pub fn apply(&self, base: &Vocabulary) -> Vocabulary {
        let pick = |o: &Option<Vec<String>>, b: &Vec<String>| o.clone().unwrap_or_else(|| b.clone());
        Vocabulary {
            function_verbs: pick(&self.function_verbs, &base.function_verbs),
            class_nouns: pick(&self.class_nouns, &base.class_nouns),
            method_verbs: pick(&self.method_verbs, &base.method_verbs),
            param_names: pick(&self.param_names, &base.param_names),
            type_hints: pick(&self.type_hints, &base.type_hints),
        }
    }
}

/// Complete generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Top-level functions per module (bounded shape only).
    pub functions: CountRange,
    /// Classes per module (bounded shape only).
    pub classes: CountRange,
    /// Methods per class.
    pub methods: CountRange,
    /// How definition counts are decided.
    pub shape: Shape,
    /// Duplicate parameter name policy.
    pub duplicate_params: DuplicateParams,
    /// Probability that a method takes a parameter besides `self`.
    pub method_param_probability: f64,
    /// Optional vocabulary replacement.
    pub vocabulary: Option<VocabularyOverrides>,
    /// Base seed for corpus generation; module `i` uses `base_seed + i`.
    pub base_seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            functions: CountRange::new(1, 5),
            classes: CountRange::new(1, 2),
            methods: CountRange::new(2, 3),
            shape: Shape::Bounded,
            duplicate_params: DuplicateParams::Rename,
            method_param_probability: 0.5,
            vocabulary: None,
            base_seed: DEFAULT_BASE_SEED,
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GenerateError::Config {
            path: "<inline>".into(),
            message: e.to_string(),
        })
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Config`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&text).map_err(|e| GenerateError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Returns the vocabulary after applying overrides.
    #[must_use]
    pub fn resolved_vocabulary(&self) -> Vocabulary {
        match &self.vocabulary {
            Some(overrides) => overrides.apply(Vocabulary::standard()),
            None => Vocabulary::standard().clone(),
        }
    }

    /// Checks that the configuration can always produce a module.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] naming the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.functions.check("function")?;
        self.classes.check("class")?;
        self.methods.check("method")?;
        if self.functions.max == 0 && self.classes.max == 0 {
            return Err(GenerateError::invalid(
                "function and class ranges both allow only zero definitions",
            ));
        }
        if let Shape::TargetLines { min, max } = self.shape {
            CountRange::new(min, max).check("target line")?;
        }
        if !(0.0..=1.0).contains(&self.method_param_probability) {
            return Err(GenerateError::invalid(format!(
                "method parameter probability {} is outside [0, 1]",
                self.method_param_probability
            )));
        }
        validate_vocabulary(&self.resolved_vocabulary())
    }
}

/// Checks that every list is non-empty and every word renders as valid Python.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] for an empty list or a word
/// that is not a usable identifier.
pub fn validate_vocabulary(vocabulary: &Vocabulary) -> Result<()> {
    let empty = vocabulary.empty_lists();
    if !empty.is_empty() {
        return Err(GenerateError::invalid(format!(
            "empty vocabulary list(s): {}",
            empty.join(", ")
        )));
    }
    let identifiers = vocabulary
        .function_verbs
        .iter()
        .chain(&vocabulary.class_nouns)
        .chain(&vocabulary.method_verbs);
    for word in identifiers {
        if !is_identifier(word) || is_python_keyword(word) {
            return Err(GenerateError::invalid(format!(
                "`{word}` is not a usable Python identifier"
            )));
        }
    }
    for word in &vocabulary.method_verbs {
        if word.starts_with("__") && word.ends_with("__") {
            return Err(GenerateError::invalid(format!(
                "method name `{word}` would redefine a special method"
            )));
        }
    }
    for word in &vocabulary.param_names {
        if !is_valid_param_name(word) {
            return Err(GenerateError::invalid(format!(
                "`{word}` is not a usable parameter name"
            )));
        }
    }
    for hint in &vocabulary.type_hints {
        if !is_annotation(hint) {
            return Err(GenerateError::invalid(format!(
                "type annotation {hint:?} is not a valid annotation expression"
            )));
        }
    }
    Ok(())
}
