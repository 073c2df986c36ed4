//! Vocabulary word → Python identifier rules.
//!
//! Deterministic mappings from sampled words and positions to the names that
//! appear in the rendered module.

use std::collections::HashSet;

use pyfixture_model::Param;

use crate::config::DuplicateParams;
use crate::error::{GenerateError, Result};

/// Name of a top-level function: `<verb>_<position>`.
#[must_use]
pub fn function_name(verb: &str, position: usize) -> String {
    format!("{verb}_{position}")
}

/// Name of a class: `<Noun><position>`.
#[must_use]
pub fn class_name(noun: &str, position: usize) -> String {
    format!("{noun}{position}")
}

/// Returns true if `word` is a Python keyword or soft keyword that cannot be
/// used as a parameter, function, or attribute name.
#[must_use]
pub fn is_python_keyword(word: &str) -> bool {
    matches!(
        word,
        "False"
            | "None"
            | "True"
            | "and"
            | "as"
            | "assert"
            | "async"
            | "await"
            | "break"
            | "class"
            | "continue"
            | "def"
            | "del"
            | "elif"
            | "else"
            | "except"
            | "finally"
            | "for"
            | "from"
            | "global"
            | "if"
            | "import"
            | "in"
            | "is"
            | "lambda"
            | "nonlocal"
            | "not"
            | "or"
            | "pass"
            | "raise"
            | "return"
            | "try"
            | "while"
            | "with"
            | "yield"
    )
}

/// Returns true if `word` is a plain ASCII Python identifier.
#[must_use]
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Returns true if `word` can name a parameter of a generated method, where
/// `self` is already taken.
#[must_use]
pub fn is_valid_param_name(word: &str) -> bool {
    is_identifier(word) && !is_python_keyword(word) && word != "self"
}

/// Returns true if `text` is an annotation expression the generator can
/// emit: a dotted name, optionally subscripted, joined by `|`.
///
/// `dict[str, Any]`, `typing.Optional[int]` and `int | None` qualify;
/// `int int`, `x: y` and `list[str]]` do not.
#[must_use]
pub fn is_annotation(text: &str) -> bool {
    let Some(tokens) = annotation_tokens(text) else {
        return false;
    };
    let mut pos = 0;
    union(&tokens, &mut pos) && pos == tokens.len()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Name(&'a str),
    Open,
    Close,
    Comma,
    Pipe,
}

fn annotation_tokens(text: &str) -> Option<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let (token, len) = match c {
            '[' => (Some(Token::Open), 1),
            ']' => (Some(Token::Close), 1),
            ',' => (Some(Token::Comma), 1),
            '|' => (Some(Token::Pipe), 1),
            ' ' => (None, 1),
            c if c == '_' || c.is_ascii_alphanumeric() => {
                let len = rest
                    .find(|c: char| !(c == '_' || c == '.' || c.is_ascii_alphanumeric()))
                    .unwrap_or(rest.len());
                (Some(Token::Name(&rest[..len])), len)
            }
            _ => return None,
        };
        tokens.extend(token);
        rest = &rest[len..];
    }
    Some(tokens)
}

fn union(tokens: &[Token<'_>], pos: &mut usize) -> bool {
    if !term(tokens, pos) {
        return false;
    }
    while tokens.get(*pos) == Some(&Token::Pipe) {
        *pos += 1;
        if !term(tokens, pos) {
            return false;
        }
    }
    true
}

fn term(tokens: &[Token<'_>], pos: &mut usize) -> bool {
    let Some(Token::Name(name)) = tokens.get(*pos) else {
        return false;
    };
    let dotted = name
        .split('.')
        .all(|part| is_identifier(part) && (part == "None" || !is_python_keyword(part)));
    if !dotted {
        return false;
    }
    *pos += 1;
    if tokens.get(*pos) != Some(&Token::Open) {
        return true;
    }
    *pos += 1;
    loop {
        if !union(tokens, pos) {
            return false;
        }
        match tokens.get(*pos) {
            Some(Token::Close) => break,
            Some(Token::Comma) if tokens.get(*pos + 1) == Some(&Token::Close) => {
                *pos += 1;
                break;
            }
            Some(Token::Comma) => *pos += 1,
            _ => return false,
        }
    }
    *pos += 1;
    true
}

/// Applies the duplicate-name policy to a sampled signature.
///
/// Under [`DuplicateParams::Rename`] the k-th occurrence of a name becomes
/// `<name>_<k>`, skipping any suffix already present in the signature.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidArgument`] under [`DuplicateParams::Reject`]
/// when two parameters share a name.
pub fn resolve_duplicates(params: &mut [Param], policy: DuplicateParams, owner: &str) -> Result<()> {
    match policy {
        DuplicateParams::Keep => Ok(()),
        DuplicateParams::Reject => {
            let mut seen = HashSet::new();
            for param in params.iter() {
                if !seen.insert(param.name.as_str()) {
                    return Err(GenerateError::invalid(format!(
                        "duplicate parameter `{}` in `{owner}`",
                        param.name
                    )));
                }
            }
            Ok(())
        }
        DuplicateParams::Rename => {
            let original: Vec<String> = params.iter().map(|p| p.name.clone()).collect();
            let mut taken: HashSet<String> = HashSet::new();
            for (i, param) in params.iter_mut().enumerate() {
                if taken.contains(&param.name) {
                    let base = &original[i];
                    let mut occurrence = original[..i].iter().filter(|n| *n == base).count() + 1;
                    let mut candidate = format!("{base}_{occurrence}");
                    while taken.contains(&candidate) || original.contains(&candidate) {
                        occurrence += 1;
                        candidate = format!("{base}_{occurrence}");
                    }
                    param.name = candidate;
                }
                taken.insert(param.name.clone());
            }
            Ok(())
        }
    }
}
