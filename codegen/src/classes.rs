//! Class rendering: ClassSpec → `class` block with constructor and methods.

use pyfixture_model::{ClassSpec, MethodBody, MethodSpec};

use crate::emit::PythonFile;

const CLASS_DOC: &[&str] = &[
    "Generated class for testing purposes.",
    "",
    "This class demonstrates typical Python class patterns",
    "used in real-world codebases.",
];

/// Appends a class definition.
///
/// Methods are emitted in sampled order, so a repeated name is redefined
/// and the later body is the one Python keeps.
pub fn render_class(f: &mut PythonFile, class: &ClassSpec) {
    f.line(&format!("class {}:", class.name));
    f.indent();
    f.docstring(CLASS_DOC);
    f.blank();

    let field = &class.field;
    f.line(&format!(
        "def __init__(self, {}: {}) -> None:",
        field.name, field.annotation
    ));
    f.indent();
    f.docstring(&[
        format!("Initialize {}.", class.name),
        String::new(),
        "Args:".to_string(),
        format!("    {}: Configuration {}", field.name, field.annotation),
    ]);
    f.line(&format!("self.{0} = {0}", field.name));
    f.dedent();

    for method in &class.methods {
        f.blank();
        render_method(f, method, &field.name);
    }
    f.dedent();
}

fn render_method(f: &mut PythonFile, method: &MethodSpec, attribute: &str) {
    let ret = method.body.return_type();
    match &method.param {
        Some(p) => f.line(&format!(
            "def {}(self, {}: {}) -> {ret}:",
            method.name, p.name, p.annotation
        )),
        None => f.line(&format!("def {}(self) -> {ret}:", method.name)),
    }
    f.indent();

    let mut doc = vec![format!("Perform {} operation.", method.name), String::new()];
    if let Some(p) = &method.param {
        doc.push("Args:".to_string());
        doc.push(format!("    {}: Input {} parameter", p.name, p.annotation));
        doc.push(String::new());
    }
    doc.push("Returns:".to_string());
    doc.push(
        match method.body {
            MethodBody::Success => "    Operation success status",
            MethodBody::Describe => "    Operation result string",
        }
        .to_string(),
    );
    f.docstring(&doc);

    match method.body {
        MethodBody::Success => f.line("return True"),
        MethodBody::Describe => f.line(&format!("return f\"{{self.{attribute}}}\"")),
    }
    f.dedent();
}

#[cfg(test)]
mod tests {
    use pyfixture_model::Param;

    use super::*;

    #[test]
    fn renders_corpus_shape() {
        let class = ClassSpec {
            name: "LoggerFactory0".to_string(),
            field: Param::new("properties", "dict[str, Any]"),
            methods: vec![
                MethodSpec {
                    name: "disconnect".to_string(),
                    param: Some(Param::new("payload", "list[str]")),
                    body: MethodBody::Success,
                },
                MethodSpec {
                    name: "validate".to_string(),
                    param: None,
                    body: MethodBody::Describe,
                },
            ],
        };
        let mut f = PythonFile::new();
        render_class(&mut f, &class);
        let expected = r#"class LoggerFactory0:
    """Generated class for testing purposes.

    This class demonstrates typical Python class patterns
    used in real-world codebases.
    """

    def __init__(self, properties: dict[str, Any]) -> None:
        """Initialize LoggerFactory0.

        Args:
            properties: Configuration dict[str, Any]
        """
        self.properties = properties

    def disconnect(self, payload: list[str]) -> bool:
        """Perform disconnect operation.

        Args:
            payload: Input list[str] parameter

        Returns:
            Operation success status
        """
        return True

    def validate(self) -> str:
        """Perform validate operation.

        Returns:
            Operation result string
        """
        return f"{self.properties}"
"#;
        assert_eq!(f.finish(), expected);
    }

    #[test]
    fn describe_with_param_still_formats_attribute() {
        let class = ClassSpec {
            name: "FileHandler1".to_string(),
            field: Param::new("data", "bool"),
            methods: vec![MethodSpec {
                name: "process".to_string(),
                param: Some(Param::new("context", "UUID")),
                body: MethodBody::Describe,
            }],
        };
        let mut f = PythonFile::new();
        render_class(&mut f, &class);
        let text = f.finish();
        assert!(text.contains("    def process(self, context: UUID) -> str:\n"));
        assert!(text.contains("        return f\"{self.data}\"\n"));
    }
}
