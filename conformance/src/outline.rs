//! Outline parser for generated fixture modules.
//!
//! Recognizes the Python subset the generator emits, and rejects the
//! mistakes CPython would reject at compile time for that subset:
//! unterminated strings, unbalanced brackets, inconsistent indentation, a
//! block header with no body, and a parameter name repeated in one
//! signature. Anything it does not understand inside a block is kept as an
//! opaque statement.
//!
//! Parsing happens in two passes. The scanner joins physical lines into
//! logical lines (triple-quoted strings, bracketed continuations and
//! backslash continuations), strips comments, and records indentation. The
//! builder then walks logical lines with a frame stack to attach methods to
//! classes and `return` statements to the nearest enclosing function.

use std::collections::HashSet;

use pyfixture_codegen::naming::{is_annotation, is_identifier};
use thiserror::Error;

/// Outline parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutlineError {
    /// The text is not valid Python for the recognized subset.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based physical line the error is reported at.
        line: usize,
        /// Description in CPython's wording where one exists.
        message: String,
    },
}

impl OutlineError {
    /// Returns the line the error is reported at.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            OutlineError::Syntax { line, .. } => *line,
        }
    }
}

type Result<T> = std::result::Result<T, OutlineError>;

fn syntax(line: usize, message: impl Into<String>) -> OutlineError {
    OutlineError::Syntax {
        line,
        message: message.into(),
    }
}

/// A parameter as written in a signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamOutline {
    /// Name without `*` or `**` prefixes.
    pub name: String,
    /// Annotation text, if any.
    pub annotation: Option<String>,
}

/// A `return` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnOutline {
    /// Line the statement starts on.
    pub line: usize,
    /// Returned expression, empty for a bare `return`.
    pub expr: String,
    /// Trailing comment without the leading `#`.
    pub comment: Option<String>,
}

/// A simple `target = value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignOutline {
    /// Line the statement starts on.
    pub line: usize,
    /// Assignment target, e.g. `result` or `self.data`.
    pub target: String,
    /// Assigned expression.
    pub value: String,
}

/// A function or method definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOutline {
    /// Defined name.
    pub name: String,
    /// Line of the `def` header.
    pub line: usize,
    /// Parameters in order, `self` included for methods.
    pub params: Vec<ParamOutline>,
    /// Text after `->`, if present.
    pub return_annotation: Option<String>,
    /// Docstring content without quotes.
    pub docstring: Option<String>,
    /// Direct assignments in the body.
    pub assignments: Vec<AssignOutline>,
    /// Return statements anywhere in the body, nested functions excluded.
    pub returns: Vec<ReturnOutline>,
    statements: usize,
}

/// A class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassOutline {
    /// Defined name.
    pub name: String,
    /// Line of the `class` header.
    pub line: usize,
    /// Docstring content without quotes.
    pub docstring: Option<String>,
    /// Every method definition in order, redefinitions included.
    pub methods: Vec<FunctionOutline>,
    statements: usize,
}

impl ClassOutline {
    /// Returns the constructor, if defined.
    #[must_use]
    pub fn init(&self) -> Option<&FunctionOutline> {
        self.methods.iter().rev().find(|m| m.name == "__init__")
    }

    /// Methods other than `__init__`.
    pub fn plain_methods(&self) -> impl Iterator<Item = &FunctionOutline> {
        self.methods.iter().filter(|m| m.name != "__init__")
    }
}

/// Skeleton of a parsed module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleOutline {
    /// Physical line count.
    pub lines: usize,
    /// Names bound by top-level imports.
    pub imports: Vec<String>,
    /// Top-level bare string statements in order; the first is the
    /// docstring when it is the first statement after imports.
    pub strings: Vec<String>,
    /// Top-level functions.
    pub functions: Vec<FunctionOutline>,
    /// Top-level classes.
    pub classes: Vec<ClassOutline>,
}

impl ModuleOutline {
    /// Returns the first top-level string statement.
    #[must_use]
    pub fn docstring(&self) -> Option<&str> {
        self.strings.first().map(String::as_str)
    }

    /// Number of methods over all classes, `__init__` excluded.
    #[must_use]
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.plain_methods().count()).sum()
    }
}

/// Parses module text into an outline.
///
/// # Errors
///
/// Returns [`OutlineError::Syntax`] at the first problem found.
pub fn parse(text: &str) -> Result<ModuleOutline> {
    let lines = logical_lines(text)?;
    check_blocks(&lines)?;
    let mut outline = build(&lines)?;
    outline.lines = text.lines().count();
    Ok(outline)
}

// =============================================================================
// Scanner
// =============================================================================

/// One logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Logical {
    line: usize,
    indent: usize,
    code: String,
    comment: Option<String>,
}

#[derive(Default)]
struct Pending {
    line: usize,
    indent: usize,
    code: String,
    comment: Option<String>,
    brackets: Vec<(char, usize)>,
    triple: Option<(char, usize)>,
    active: bool,
}

fn logical_lines(text: &str) -> Result<Vec<Logical>> {
    let mut out = Vec::new();
    let mut p = Pending::default();

    for (i, raw) in text.split('\n').enumerate() {
        let number = i + 1;
        let physical = raw.strip_suffix('\r').unwrap_or(raw);
        let chars: Vec<char> = physical.chars().collect();
        let mut j = 0;

        if p.active {
            p.code.push(if p.triple.is_some() { '\n' } else { ' ' });
        } else {
            let trimmed = physical.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let lead = &physical[..physical.len() - trimmed.len()];
            if lead.contains('\t') {
                return Err(syntax(number, "tab in indentation"));
            }
            p.line = number;
            p.indent = lead.len();
            p.active = true;
            j = lead.chars().count();
        }

        let mut single: Option<char> = None;
        while j < chars.len() {
            let c = chars[j];
            if let Some((q, _)) = p.triple {
                if c == '\\' {
                    p.code.push(c);
                    if let Some(&next) = chars.get(j + 1) {
                        p.code.push(next);
                    }
                    j += 2;
                    continue;
                }
                if c == q && chars.get(j + 1) == Some(&q) && chars.get(j + 2) == Some(&q) {
                    p.code.extend([q, q, q]);
                    p.triple = None;
                    j += 3;
                    continue;
                }
                p.code.push(c);
                j += 1;
                continue;
            }
            if let Some(q) = single {
                p.code.push(c);
                if c == '\\' {
                    if let Some(&next) = chars.get(j + 1) {
                        p.code.push(next);
                    }
                    j += 2;
                    continue;
                }
                if c == q {
                    single = None;
                }
                j += 1;
                continue;
            }
            match c {
                '#' => {
                    let rest: String = chars[j + 1..].iter().collect();
                    p.comment = Some(rest.trim().to_string());
                    break;
                }
                '"' | '\'' => {
                    if chars.get(j + 1) == Some(&c) && chars.get(j + 2) == Some(&c) {
                        p.code.extend([c, c, c]);
                        p.triple = Some((c, number));
                        j += 3;
                        continue;
                    }
                    single = Some(c);
                    p.code.push(c);
                }
                '(' | '[' | '{' => {
                    p.brackets.push((c, number));
                    p.code.push(c);
                }
                ')' | ']' | '}' => {
                    let open = match c {
                        ')' => '(',
                        ']' => '[',
                        _ => '{',
                    };
                    match p.brackets.pop() {
                        Some((o, _)) if o == open => p.code.push(c),
                        Some((o, _)) => {
                            return Err(syntax(
                                number,
                                format!("closing parenthesis '{c}' does not match opening parenthesis '{o}'"),
                            ))
                        }
                        None => return Err(syntax(number, format!("unmatched '{c}'"))),
                    }
                }
                _ => p.code.push(c),
            }
            j += 1;
        }

        if single.is_some() {
            return Err(syntax(number, "unterminated string literal"));
        }
        if p.triple.is_some() || !p.brackets.is_empty() {
            continue;
        }
        if p.comment.is_none() && p.code.ends_with('\\') {
            p.code.pop();
            continue;
        }
        out.push(Logical {
            line: p.line,
            indent: p.indent,
            code: p.code.trim_end().to_string(),
            comment: p.comment.take(),
        });
        p = Pending::default();
    }

    if let Some((_, line)) = p.triple {
        return Err(syntax(line, "unterminated triple-quoted string literal"));
    }
    if let Some(&(open, line)) = p.brackets.last() {
        return Err(syntax(line, format!("'{open}' was never closed")));
    }
    Ok(out)
}

// =============================================================================
// Blocks
// =============================================================================

const BLOCK_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "for", "while", "with", "try", "except", "finally",
    "async",
];

fn first_word(code: &str) -> &str {
    let end = code
        .find(|c: char| !(c == '_' || c.is_ascii_alphanumeric()))
        .unwrap_or(code.len());
    &code[..end]
}

fn is_block_header(code: &str) -> bool {
    code.ends_with(':') && BLOCK_KEYWORDS.contains(&first_word(code))
}

fn check_blocks(lines: &[Logical]) -> Result<()> {
    let mut stack = vec![0usize];
    let mut header: Option<usize> = None;

    for l in lines {
        let current = stack.last().copied().unwrap_or(0);
        if let Some(at) = header.take() {
            if l.indent <= current {
                return Err(syntax(
                    l.line,
                    format!("expected an indented block after statement on line {at}"),
                ));
            }
            stack.push(l.indent);
        } else if l.indent > current {
            return Err(syntax(l.line, "unexpected indent"));
        } else if l.indent < current {
            while stack.last().is_some_and(|&top| top > l.indent) {
                stack.pop();
            }
            if stack.last() != Some(&l.indent) {
                return Err(syntax(
                    l.line,
                    "unindent does not match any outer indentation level",
                ));
            }
        }
        if is_block_header(&l.code) {
            header = Some(l.line);
        }
    }

    match header {
        Some(at) => Err(syntax(
            at,
            format!("expected an indented block after statement on line {at}"),
        )),
        None => Ok(()),
    }
}

// =============================================================================
// Builder
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum FnRef {
    Top(usize),
    Method(usize, usize),
}

#[derive(Debug, Clone, Copy)]
enum Frame {
    Class(usize),
    Function(FnRef),
    Other,
}

fn function_mut(outline: &mut ModuleOutline, r: FnRef) -> Option<&mut FunctionOutline> {
    match r {
        FnRef::Top(i) => outline.functions.get_mut(i),
        FnRef::Method(c, m) => outline.classes.get_mut(c).and_then(|c| c.methods.get_mut(m)),
    }
}

fn build(lines: &[Logical]) -> Result<ModuleOutline> {
    let mut outline = ModuleOutline::default();
    let mut frames: Vec<(usize, Frame)> = Vec::new();

    for l in lines {
        while frames.last().is_some_and(|&(indent, _)| indent >= l.indent) {
            frames.pop();
        }
        let parent = frames.last().map(|&(_, f)| f);
        let enclosing_fn = frames.iter().rev().find_map(|&(_, f)| match f {
            Frame::Function(r) => Some(r),
            _ => None,
        });
        let code = l.code.as_str();
        let word = first_word(code);

        if word == "def" || (word == "async" && code[5..].trim_start().starts_with("def ")) {
            let function = parse_def(l)?;
            let frame = match parent {
                None => {
                    outline.functions.push(function);
                    Frame::Function(FnRef::Top(outline.functions.len() - 1))
                }
                Some(Frame::Class(c)) => {
                    let class = &mut outline.classes[c];
                    class.statements += 1;
                    class.methods.push(function);
                    Frame::Function(FnRef::Method(c, class.methods.len() - 1))
                }
                Some(Frame::Function(r)) => {
                    count_statement(&mut outline, r);
                    Frame::Other
                }
                Some(Frame::Other) => Frame::Other,
            };
            frames.push((l.indent, frame));
            continue;
        }

        if word == "class" {
            let frame = match parent {
                None => {
                    outline.classes.push(ClassOutline {
                        name: parse_class_name(l)?,
                        line: l.line,
                        docstring: None,
                        methods: Vec::new(),
                        statements: 0,
                    });
                    Frame::Class(outline.classes.len() - 1)
                }
                Some(Frame::Function(r)) => {
                    count_statement(&mut outline, r);
                    Frame::Other
                }
                Some(Frame::Class(c)) => {
                    outline.classes[c].statements += 1;
                    Frame::Other
                }
                Some(Frame::Other) => Frame::Other,
            };
            frames.push((l.indent, frame));
            continue;
        }

        if word == "return" {
            let Some(r) = enclosing_fn else {
                return Err(syntax(l.line, "'return' outside function"));
            };
            if let Some(f) = function_mut(&mut outline, r) {
                f.returns.push(ReturnOutline {
                    line: l.line,
                    expr: code[6..].trim().to_string(),
                    comment: l.comment.clone(),
                });
            }
        }

        match parent {
            None => {
                if let Some(s) = string_literal(code) {
                    outline.strings.push(s);
                } else if word == "import" || word == "from" {
                    outline.imports.extend(imported_names(code));
                }
            }
            Some(Frame::Class(c)) => {
                let class = &mut outline.classes[c];
                if class.statements == 0 {
                    class.docstring = string_literal(code);
                }
                class.statements += 1;
            }
            Some(Frame::Function(r)) => {
                if let Some(f) = function_mut(&mut outline, r) {
                    if f.statements == 0 {
                        f.docstring = string_literal(code);
                    }
                    if let Some((target, value)) = split_assignment(code) {
                        f.assignments.push(AssignOutline {
                            line: l.line,
                            target,
                            value,
                        });
                    }
                    f.statements += 1;
                }
            }
            Some(Frame::Other) => {}
        }

        if is_block_header(code) {
            frames.push((l.indent, Frame::Other));
        }
    }
    Ok(outline)
}

fn count_statement(outline: &mut ModuleOutline, r: FnRef) {
    if let Some(f) = function_mut(outline, r) {
        f.statements += 1;
    }
}

fn parse_def(l: &Logical) -> Result<FunctionOutline> {
    let code = l.code.trim_start_matches("async").trim_start();
    let rest = code.strip_prefix("def").unwrap_or(code).trim_start();
    let open = rest
        .find('(')
        .ok_or_else(|| syntax(l.line, "expected '(' in function definition"))?;
    let name = rest[..open].trim();
    if !is_identifier(name) {
        return Err(syntax(l.line, format!("invalid function name '{name}'")));
    }
    let close = matching_paren(rest, open)
        .ok_or_else(|| syntax(l.line, "'(' was never closed"))?;
    let tail = rest[close + 1..].trim();
    let tail = tail
        .strip_suffix(':')
        .ok_or_else(|| syntax(l.line, "expected ':'"))?
        .trim();
    let return_annotation = match tail.strip_prefix("->") {
        Some(ann) => Some(checked_annotation(l.line, ann)?),
        None if tail.is_empty() => None,
        None => return Err(syntax(l.line, "invalid syntax")),
    };

    let mut params = Vec::new();
    let mut seen = HashSet::new();
    for piece in split_top_level(&rest[open + 1..close]) {
        let piece = piece.trim();
        if piece.is_empty() || piece == "*" || piece == "/" {
            continue;
        }
        let (head, _default) = piece.split_once('=').unwrap_or((piece, ""));
        let (raw_name, annotation) = match head.split_once(':') {
            Some((n, a)) => (n.trim(), Some(checked_annotation(l.line, a)?)),
            None => (head.trim(), None),
        };
        let param = raw_name.trim_start_matches('*');
        if !is_identifier(param) {
            return Err(syntax(l.line, format!("invalid parameter '{raw_name}'")));
        }
        if !seen.insert(param.to_string()) {
            return Err(syntax(
                l.line,
                format!("duplicate argument '{param}' in function definition"),
            ));
        }
        params.push(ParamOutline {
            name: param.to_string(),
            annotation,
        });
    }

    Ok(FunctionOutline {
        name: name.to_string(),
        line: l.line,
        params,
        return_annotation,
        docstring: None,
        assignments: Vec::new(),
        returns: Vec::new(),
        statements: 0,
    })
}

fn checked_annotation(line: usize, text: &str) -> Result<String> {
    let text = text.trim();
    if is_annotation(text) {
        Ok(text.to_string())
    } else {
        Err(syntax(line, format!("invalid syntax in annotation '{text}'")))
    }
}

fn parse_class_name(l: &Logical) -> Result<String> {
    let rest = l.code.strip_prefix("class").unwrap_or(&l.code).trim_start();
    let end = rest.find(['(', ':']).unwrap_or(rest.len());
    let name = rest[..end].trim();
    if is_identifier(name) {
        Ok(name.to_string())
    } else {
        Err(syntax(l.line, format!("invalid class name '{name}'")))
    }
}

fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (i, c) in text.char_indices().skip_while(|&(i, _)| i < open) {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits on commas outside brackets and strings.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Returns the content of a statement that is a single string literal.
fn string_literal(code: &str) -> Option<String> {
    let body = code.trim_start_matches(['r', 'R', 'u', 'U', 'b', 'B', 'f', 'F']);
    if body.len() + 2 < code.len() {
        return None;
    }
    for quote in ["\"\"\"", "'''", "\"", "'"] {
        if body.len() >= 2 * quote.len() && body.starts_with(quote) && body.ends_with(quote) {
            let inner = &body[quote.len()..body.len() - quote.len()];
            if quote.len() == 1 && inner.contains(quote) {
                return None;
            }
            return Some(inner.to_string());
        }
    }
    None
}

fn split_assignment(code: &str) -> Option<(String, String)> {
    let (target, value) = code.split_once('=')?;
    if value.starts_with('=') || target.ends_with(['!', '<', '>', '=', '+', '-', '*', '/', '%', '&', '|', '^', ':']) {
        return None;
    }
    let target = target.trim();
    if !target.split('.').all(is_identifier) {
        return None;
    }
    Some((target.to_string(), value.trim().to_string()))
}

fn imported_names(code: &str) -> Vec<String> {
    let list = match code.strip_prefix("from") {
        Some(rest) => match rest.split_once(" import ") {
            Some((_, names)) => names,
            None => return Vec::new(),
        },
        None => code.strip_prefix("import").unwrap_or(""),
    };
    let list = list.trim().trim_start_matches('(').trim_end_matches(')');
    let from = code.starts_with("from");
    list.split(',')
        .filter_map(|item| {
            let item = item.trim();
            if item.is_empty() {
                return None;
            }
            let name = match item.split_once(" as ") {
                Some((_, alias)) => alias.trim(),
                None if from => item,
                None => item.split('.').next().unwrap_or(item),
            };
            Some(name.to_string())
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"from __future__ import annotations

import random
from pathlib import Path

"""Module 0003 - Synthetic test module.

More text.
"""

def fetch_resource_0(data: str, options: dict[str, Any]) -> int:
    """Process data and options to produce result."""
    result = f"{data} - {options}"
    return result  # type: ignore[return-value]

class Widget0:
    """Docs."""

    def __init__(self, data: Path) -> None:
        self.data = data

    def setup(self) -> str:
        return f"{self.data}"
"#;

    #[test]
    fn outlines_sample_module() {
        let outline = parse(SAMPLE).expect("valid module");
        assert_eq!(outline.imports, vec!["annotations", "random", "Path"]);
        assert!(outline.docstring().is_some_and(|d| d.starts_with("Module 0003")));

        let f = &outline.functions[0];
        assert_eq!(f.name, "fetch_resource_0");
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[1].annotation.as_deref(), Some("dict[str, Any]"));
        assert_eq!(f.return_annotation.as_deref(), Some("int"));
        assert_eq!(f.assignments[0].target, "result");
        assert_eq!(f.returns[0].expr, "result");
        assert_eq!(f.returns[0].comment.as_deref(), Some("type: ignore[return-value]"));

        let class = &outline.classes[0];
        assert_eq!(class.name, "Widget0");
        assert_eq!(class.docstring.as_deref(), Some("Docs."));
        assert_eq!(class.methods.len(), 2);
        assert_eq!(outline.method_count(), 1);
        let init = class.init().expect("constructor");
        assert_eq!(init.assignments[0].target, "self.data");
        assert_eq!(class.methods[1].returns[0].expr, "f\"{self.data}\"");
    }

    #[test]
    fn duplicate_argument_is_rejected() {
        let text = "def f(data: str, data: int) -> str:\n    return data\n";
        assert_eq!(
            parse(text),
            Err(syntax(1, "duplicate argument 'data' in function definition"))
        );
    }

    #[test]
    fn missing_body_is_rejected() {
        let err = parse("class A:\n\ndef f():\n    return 1\n").expect_err("no body");
        assert_eq!(err.line(), 3);
        assert!(parse("def f():\n").is_err());
    }

    #[test]
    fn indentation_errors() {
        assert_eq!(parse("x = 1\n    y = 2\n").map(|_| ()), Err(syntax(2, "unexpected indent")));
        let err = parse("def f():\n        x = 1\n    return x\n").expect_err("dedent");
        assert_eq!(err.line(), 3);
        assert!(err.to_string().contains("unindent"));
    }

    #[test]
    fn unterminated_strings() {
        let err = parse("\"\"\"Module\n\nx = 1\n").expect_err("open docstring");
        assert_eq!(err.line(), 1);
        assert!(parse("x = \"abc\n").is_err());
    }

    #[test]
    fn brackets_continue_lines() {
        let text = "def f(\n    a: int,\n    b: int,\n) -> int:\n    return (a +\n        b)\n";
        let outline = parse(text).expect("continuation");
        assert_eq!(outline.functions[0].params.len(), 2);
        assert_eq!(outline.functions[0].returns.len(), 1);
        assert!(parse("x = (1,\n").is_err());
        assert!(parse("x = 1)\n").is_err());
    }

    #[test]
    fn hash_inside_string_is_not_a_comment() {
        let outline = parse("def f() -> str:\n    return \"#x\"  # note\n").expect("valid");
        let r = &outline.functions[0].returns[0];
        assert_eq!(r.expr, "\"#x\"");
        assert_eq!(r.comment.as_deref(), Some("note"));
    }

    #[test]
    fn malformed_annotations_are_rejected() {
        let err = parse("def f(a: int int) -> str:\n    return a\n").expect_err("param");
        assert_eq!(err, syntax(1, "invalid syntax in annotation 'int int'"));
        let err = parse("def f(a: x: y) -> str:\n    return a\n").expect_err("colon");
        assert_eq!(err.line(), 1);
        let err = parse("def f(a: int) -> int int:\n    return a\n").expect_err("return");
        assert!(err.to_string().contains("'int int'"));
        let err = parse("class A:\n    def g(self) -> list[str]]:\n        return []\n")
            .expect_err("bracket");
        assert_eq!(err.line(), 2);
        assert!(parse("def f(a: int | None = None) -> typing.Any:\n    return a\n").is_ok());
    }

    #[test]
    fn return_outside_function() {
        assert!(parse("return 1\n").is_err());
    }
}
