//! Core fixture model types.
//!
//! A [`ModuleSpec`] is the in-memory description of one generated file. It is
//! built by the sampler, rendered once, and optionally recorded in the corpus
//! manifest. All names are owned so custom vocabularies can be loaded at runtime.

use serde::{Deserialize, Serialize};

/// A `name: annotation` pair in a Python signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter identifier (e.g., `"payload"`).
    pub name: String,
    /// Type annotation as written in source (e.g., `"dict[str, Any]"`).
    pub annotation: String,
}

impl Param {
    /// Creates a parameter from a name and an annotation.
    pub fn new(name: impl Into<String>, annotation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotation: annotation.into(),
        }
    }
}

/// A top-level function definition.
///
/// Parameters are an ordered sequence rather than a name-keyed map: the
/// sampler draws each slot independently, so two slots may share a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Function name including its positional suffix (e.g., `"parse_config_2"`).
    pub name: String,
    /// The two sampled parameters, in signature order.
    pub params: Vec<Param>,
    /// Declared return annotation. The body always returns a `str`.
    pub return_type: String,
}

/// What a generated method returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodBody {
    /// `return True`, annotated `-> bool`.
    Success,
    /// `return f"{self.<attr>}"`, annotated `-> str`.
    Describe,
}

impl MethodBody {
    /// Returns the Python return annotation paired with this body.
    #[must_use]
    pub fn return_type(self) -> &'static str {
        match self {
            MethodBody::Success => "bool",
            MethodBody::Describe => "str",
        }
    }
}

/// A method inside a generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Method name, drawn from the method vocabulary without a suffix.
    pub name: String,
    /// Optional single parameter after `self`.
    pub param: Option<Param>,
    /// Return shape.
    pub body: MethodBody,
}

/// A generated class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Class name including its positional suffix (e.g., `"CacheManager1"`).
    pub name: String,
    /// Constructor parameter, stored as an attribute of the same name.
    pub field: Param,
    /// Methods in definition order. Names may repeat.
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Returns the methods visible on the class once Python has executed the
    /// class body.
    ///
    /// A later definition with the same name replaces the earlier one but
    /// keeps the earlier one's position, mirroring how a class namespace
    /// dictionary is populated.
    #[must_use]
    pub fn effective_methods(&self) -> Vec<&MethodSpec> {
        let mut visible: Vec<&MethodSpec> = Vec::with_capacity(self.methods.len());
        for method in &self.methods {
            match visible.iter_mut().find(|m| m.name == method.name) {
                Some(slot) => *slot = method,
                None => visible.push(method),
            }
        }
        visible
    }
}

/// One top-level definition, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// A free function.
    Function(FunctionSpec),
    /// A class.
    Class(ClassSpec),
}

/// Description of one fixture module prior to rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Index used in the docstring and the file name.
    pub module_index: u32,
    /// Functions and classes in the order they are emitted.
    pub items: Vec<Item>,
}

impl ModuleSpec {
    /// Creates an empty module description.
    #[must_use]
    pub fn new(module_index: u32) -> Self {
        Self {
            module_index,
            items: Vec::new(),
        }
    }

    /// Iterates over the module's functions in emission order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionSpec> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(f) => Some(f),
            Item::Class(_) => None,
        })
    }

    /// Iterates over the module's classes in emission order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassSpec> {
        self.items.iter().filter_map(|item| match item {
            Item::Class(c) => Some(c),
            Item::Function(_) => None,
        })
    }

    /// Returns the number of top-level functions.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.functions().count()
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes().count()
    }

    /// Returns the total number of method definitions across all classes,
    /// counting shadowed definitions.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.classes().map(|c| c.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, body: MethodBody) -> MethodSpec {
        MethodSpec {
            name: name.to_string(),
            param: None,
            body,
        }
    }

    #[test]
    fn later_method_shadows_earlier() {
        let class = ClassSpec {
            name: "TaskExecutor0".to_string(),
            field: Param::new("data", "str"),
            methods: vec![
                method("process", MethodBody::Success),
                method("connect", MethodBody::Success),
                method("process", MethodBody::Describe),
            ],
        };
        let visible = class.effective_methods();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].name, "process");
        assert_eq!(visible[0].body, MethodBody::Describe);
        assert_eq!(visible[1].name, "connect");
    }

    #[test]
    fn counts_follow_items() {
        let mut module = ModuleSpec::new(3);
        module.items.push(Item::Function(FunctionSpec {
            name: "parse_config_0".to_string(),
            params: vec![Param::new("data", "str"), Param::new("options", "int")],
            return_type: "bool".to_string(),
        }));
        module.items.push(Item::Class(ClassSpec {
            name: "APIClient0".to_string(),
            field: Param::new("config", "Path"),
            methods: vec![
                method("setup", MethodBody::Success),
                method("execute", MethodBody::Describe),
            ],
        }));
        assert_eq!(module.function_count(), 1);
        assert_eq!(module.class_count(), 1);
        assert_eq!(module.method_count(), 2);
    }

    #[test]
    fn method_body_annotations() {
        assert_eq!(MethodBody::Success.return_type(), "bool");
        assert_eq!(MethodBody::Describe.return_type(), "str");
    }
}
