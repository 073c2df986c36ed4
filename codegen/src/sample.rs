//! Random choices behind a fixture module.
//!
//! Every draw is with replacement. The order of draws within a definition is
//! fixed so that a seeded RNG always reproduces the same module.

use pyfixture_model::{ClassSpec, FunctionSpec, MethodBody, MethodSpec, Param, Vocabulary};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use crate::naming::{class_name, function_name, resolve_duplicates};

/// Kind of a top-level definition slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A free function.
    Function,
    /// A class.
    Class,
}

/// Draws definitions from a vocabulary under a configuration.
pub struct Sampler<'a> {
    config: &'a GeneratorConfig,
    vocabulary: &'a Vocabulary,
}

impl<'a> Sampler<'a> {
    /// Creates a sampler. The configuration is assumed to be validated.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, vocabulary: &'a Vocabulary) -> Self {
        Self { config, vocabulary }
    }

    /// Picks the definition slots of a bounded module: a sampled number of
    /// functions and classes in shuffled order.
    pub fn layout<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<ItemKind> {
        let functions = self.config.functions.sample(rng);
        let classes = self.config.classes.sample(rng);
        let mut kinds: Vec<ItemKind> = std::iter::repeat(ItemKind::Function)
            .take(functions)
            .chain(std::iter::repeat(ItemKind::Class).take(classes))
            .collect();
        kinds.shuffle(rng);
        kinds
    }

    /// Flips the even-odds coin used by the target-lines shape.
    pub fn next_kind<R: Rng + ?Sized>(&self, rng: &mut R) -> ItemKind {
        if rng.random_bool(0.5) {
            ItemKind::Function
        } else {
            ItemKind::Class
        }
    }

    /// Samples the `position`-th function of a module.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if a vocabulary list is empty
    /// or the duplicate-parameter policy rejects the signature.
    pub fn function<R: Rng + ?Sized>(&self, position: usize, rng: &mut R) -> Result<FunctionSpec> {
        let v = self.vocabulary;
        let name = function_name(pick(&v.function_verbs, "function_verbs", rng)?, position);
        let first = pick(&v.param_names, "param_names", rng)?;
        let second = pick(&v.param_names, "param_names", rng)?;
        let first_type = pick(&v.type_hints, "type_hints", rng)?;
        let second_type = pick(&v.type_hints, "type_hints", rng)?;
        let return_type = pick(&v.type_hints, "type_hints", rng)?;

        let mut params = vec![Param::new(first, first_type), Param::new(second, second_type)];
        resolve_duplicates(&mut params, self.config.duplicate_params, &name)?;

        Ok(FunctionSpec {
            name,
            params,
            return_type: return_type.to_string(),
        })
    }

    /// Samples the `position`-th class of a module.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if a vocabulary list is empty.
    pub fn class<R: Rng + ?Sized>(&self, position: usize, rng: &mut R) -> Result<ClassSpec> {
        let v = self.vocabulary;
        let name = class_name(pick(&v.class_nouns, "class_nouns", rng)?, position);
        let field = self.param(rng)?;
        let count = self.config.methods.sample(rng);
        let methods = (0..count)
            .map(|_| self.method(rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(ClassSpec {
            name,
            field,
            methods,
        })
    }

    /// Samples one method.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if a vocabulary list is empty.
    pub fn method<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MethodSpec> {
        let name = pick(&self.vocabulary.method_verbs, "method_verbs", rng)?.to_string();
        let param = if rng.random_bool(self.config.method_param_probability) {
            Some(self.param(rng)?)
        } else {
            None
        };
        let body = if rng.random_bool(0.5) {
            MethodBody::Success
        } else {
            MethodBody::Describe
        };
        Ok(MethodSpec { name, param, body })
    }

    /// Samples a `(name, annotation)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidArgument`] if a vocabulary list is empty.
    pub fn param<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Param> {
        let name = pick(&self.vocabulary.param_names, "param_names", rng)?;
        let annotation = pick(&self.vocabulary.type_hints, "type_hints", rng)?;
        Ok(Param::new(name, annotation))
    }
}

fn pick<'v, R: Rng + ?Sized>(words: &'v [String], list: &str, rng: &mut R) -> Result<&'v str> {
    words
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| GenerateError::invalid(format!("vocabulary list `{list}` is empty")))
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    use super::*;
    use crate::config::{CountRange, DuplicateParams};

    #[test]
    fn layout_respects_ranges() {
        let config = GeneratorConfig::default();
        let sampler = Sampler::new(&config, Vocabulary::standard());
        let mut rng = ChaCha20Rng::seed_from_u64(0x42);
        for _ in 0..200 {
            let kinds = sampler.layout(&mut rng);
            let functions = kinds.iter().filter(|k| **k == ItemKind::Function).count();
            let classes = kinds.len() - functions;
            assert!(config.functions.contains(functions));
            assert!(config.classes.contains(classes));
        }
    }

    #[test]
    fn class_method_count_in_range() {
        let config = GeneratorConfig::default();
        let sampler = Sampler::new(&config, Vocabulary::standard());
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for position in 0..100 {
            let class = sampler.class(position, &mut rng).ok();
            let methods = class.map(|c| c.methods.len()).unwrap_or_default();
            assert!((2..=3).contains(&methods));
        }
    }

    #[test]
    fn function_always_has_two_distinct_params() {
        let config = GeneratorConfig::default();
        let sampler = Sampler::new(&config, Vocabulary::standard());
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for position in 0..300 {
            let f = sampler.function(position, &mut rng).expect("sampling failed");
            assert_eq!(f.params.len(), 2);
            assert_ne!(f.params[0].name, f.params[1].name);
            assert!(f.name.ends_with(&format!("_{position}")));
        }
    }

    #[test]
    fn single_word_vocabulary_forces_duplicates() {
        let config = GeneratorConfig {
            duplicate_params: DuplicateParams::Reject,
            ..GeneratorConfig::default()
        };
        let mut vocabulary = Vocabulary::default();
        vocabulary.param_names = vec!["data".to_string()];
        let sampler = Sampler::new(&config, &vocabulary);
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert!(sampler.function(0, &mut rng).is_err());
    }

    #[test]
    fn never_takes_param_at_zero_probability() {
        let config = GeneratorConfig {
            method_param_probability: 0.0,
            methods: CountRange::new(3, 3),
            ..GeneratorConfig::default()
        };
        let sampler = Sampler::new(&config, Vocabulary::standard());
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let class = sampler.class(0, &mut rng).ok();
        assert!(class.is_some_and(|c| c.methods.iter().all(|m| m.param.is_none())));
    }

    #[test]
    fn empty_list_is_invalid_argument() {
        let config = GeneratorConfig::default();
        let mut vocabulary = Vocabulary::default();
        vocabulary.method_verbs.clear();
        let sampler = Sampler::new(&config, &vocabulary);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        assert!(matches!(
            sampler.method(&mut rng),
            Err(GenerateError::InvalidArgument(_))
        ));
    }
}
