//! Synthetic Python fixture generator.
//!
//! Produces the text of one benchmark fixture module from a module index and
//! an optional seed. Each module holds a fixed import preamble, a docstring
//! naming the index, and an interleaving of stub functions and classes whose
//! names and annotations are sampled from [`pyfixture_model::Vocabulary`].
//!
//! ```
//! let text = pyfixture_codegen::generate_module(32, Some(1)).unwrap_or_default();
//! assert!(text.contains("Module 0032"));
//! assert_eq!(text, pyfixture_codegen::generate_module(32, Some(1)).unwrap_or_default());
//! ```
//!
//! Writing files is left to [`corpus`], which drives the generator over a
//! range of indices.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod classes;
pub mod config;
pub mod corpus;
pub mod emit;
pub mod error;
pub mod functions;
pub mod naming;
pub mod sample;

use pyfixture_model::{module_label, Item, ModuleSpec, Vocabulary};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

pub use config::{CountRange, DuplicateParams, GeneratorConfig, Shape};
pub use corpus::{generate_corpus, CorpusOptions, CorpusReport};
pub use error::GenerateError;

use emit::PythonFile;
use error::Result;
use sample::{ItemKind, Sampler};

/// Samples and renders fixture modules under a validated configuration.
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    config: GeneratorConfig,
    vocabulary: Vocabulary,
}

impl FixtureGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if the configuration could
    /// fail to produce a module.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let vocabulary = config.resolved_vocabulary();
        Ok(Self { config, vocabulary })
    }

    /// Creates a generator with the default configuration and the standard
    /// vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            config: GeneratorConfig::default(),
            vocabulary: Vocabulary::standard().clone(),
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the resolved vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the text of module `index`.
    ///
    /// With `Some(seed)` the result is byte-identical across calls. The seed
    /// alone drives sampling, so two indices sharing a seed differ only in
    /// the docstring.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if the duplicate-parameter
    /// policy is [`DuplicateParams::Reject`] and a signature repeats a name.
    pub fn generate_module(&self, index: u32, rng_seed: Option<u64>) -> Result<String> {
        let module = self.sample_module(index, rng_seed)?;
        Ok(render_module(&module))
    }

    /// Returns the description of module `index` without rendering it.
    ///
    /// # Errors
    ///
    /// See [`FixtureGenerator::generate_module`].
    pub fn sample_module(&self, index: u32, rng_seed: Option<u64>) -> Result<ModuleSpec> {
        let seed = resolve_seed(rng_seed);
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let module = self.sample_module_with(index, &mut rng)?;
        debug!(
            index,
            seed,
            functions = module.function_count(),
            classes = module.class_count(),
            "sampled module"
        );
        Ok(module)
    }

    /// Samples module `index` from a caller-owned RNG.
    ///
    /// # Errors
    ///
    /// See [`FixtureGenerator::generate_module`].
    pub fn sample_module_with<R: Rng + ?Sized>(&self, index: u32, rng: &mut R) -> Result<ModuleSpec> {
        let sampler = Sampler::new(&self.config, &self.vocabulary);
        let mut module = ModuleSpec::new(index);
        let mut functions = 0usize;
        let mut classes = 0usize;
        let mut push = |kind: ItemKind, rng: &mut R| -> Result<Item> {
            Ok(match kind {
                ItemKind::Function => {
                    functions += 1;
                    Item::Function(sampler.function(functions - 1, rng)?)
                }
                ItemKind::Class => {
                    classes += 1;
                    Item::Class(sampler.class(classes - 1, rng)?)
                }
            })
        };

        match self.config.shape {
            Shape::Bounded => {
                for kind in sampler.layout(rng) {
                    let item = push(kind, rng)?;
                    module.items.push(item);
                }
            }
            Shape::TargetLines { min, max } => {
                let target = CountRange::new(min, max).sample(rng);
                let mut lines = emit::line_count(&render_module(&module));
                while lines < target {
                    let item = push(sampler.next_kind(rng), rng)?;
                    lines += item_line_count(&item);
                    module.items.push(item);
                }
            }
        }
        Ok(module)
    }
}

impl Default for FixtureGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Returns the text of module `index` under the default configuration.
///
/// # Errors
///
/// This function is infallible under the default configuration, which
/// renames duplicate parameters instead of rejecting them.
pub fn generate_module(index: u32, rng_seed: Option<u64>) -> Result<String> {
    FixtureGenerator::standard().generate_module(index, rng_seed)
}

/// Returns `seed`, or a fresh one from the thread RNG when absent.
#[must_use]
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

/// Renders a module description to Python source text.
#[must_use]
pub fn render_module(module: &ModuleSpec) -> String {
    let mut f = PythonFile::new();
    emit::preamble(&mut f);
    f.docstring(&module_docstring(module.module_index));
    for item in &module.items {
        f.blank();
        render_item(&mut f, item);
    }
    f.finish()
}

/// Lines of the module docstring for `index`.
#[must_use]
pub fn module_docstring(index: u32) -> Vec<String> {
    vec![
        format!("{} - Synthetic test module.", module_label(index)),
        String::new(),
        "This module contains generated code for performance baseline testing.".to_string(),
        "It simulates realistic Python code patterns for MCP indexing benchmarks.".to_string(),
    ]
}

fn render_item(f: &mut PythonFile, item: &Item) {
    match item {
        Item::Function(function) => functions::render_function(f, function),
        Item::Class(class) => classes::render_class(f, class),
    }
}

/// Lines an item adds to a module, including the blank line before it.
fn item_line_count(item: &Item) -> usize {
    let mut f = PythonFile::new();
    render_item(&mut f, item);
    emit::line_count(&f.finish()) + 1
}
