//! Function rendering: FunctionSpec → `def` block.

use pyfixture_model::FunctionSpec;

use crate::emit::PythonFile;

/// Pragma that silences the declared-vs-actual return type mismatch.
pub const RETURN_PRAGMA: &str = "# type: ignore[return-value]";

/// Appends a top-level function definition.
///
/// The body always formats every parameter into a `str`, whatever the
/// declared return type.
pub fn render_function(f: &mut PythonFile, function: &FunctionSpec) {
    let signature = function
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.annotation))
        .collect::<Vec<_>>()
        .join(", ");
    f.line(&format!(
        "def {}({signature}) -> {}:",
        function.name, function.return_type
    ));
    f.indent();

    let names: Vec<&str> = function.params.iter().map(|p| p.name.as_str()).collect();
    let mut doc = vec![format!("Process {} to produce result.", names.join(" and ")), String::new()];
    doc.push("Args:".to_string());
    for (i, p) in function.params.iter().enumerate() {
        let role = if i == 0 { "Input" } else { "Additional" };
        let noun = if i == 0 { "value" } else { "parameter" };
        doc.push(format!("    {}: {role} {} {noun}", p.name, p.annotation));
    }
    doc.push(String::new());
    doc.push("Returns:".to_string());
    doc.push(format!("    Processed {} result", function.return_type));
    f.docstring(&doc);

    let operands = names
        .iter()
        .map(|n| format!("{{{n}}}"))
        .collect::<Vec<_>>()
        .join(" - ");
    f.line(&format!("result = f\"{operands}\""));
    f.line(&format!("return result  {RETURN_PRAGMA}"));
    f.dedent();
}
