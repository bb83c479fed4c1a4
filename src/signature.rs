//! Callable signature rendering and identifier hygiene.
//!
//! [`render_signature`] turns a parameter list into the TypeScript function type
//! used for a localization key:
//!
//! | Parameters          | Signature                                |
//! |---------------------|------------------------------------------|
//! | none                | `() => string`                           |
//! | `user`, `role`      | `(user: string, role: string) => string` |
//!
//! Keys and labels come straight from locale files, so neither can be assumed to
//! be a valid identifier. Property keys that are not identifiers are emitted as
//! quoted string literals (see [`property_key`]); parameter names are rewritten
//! into identifiers (see [`sanitize_identifier`]) because TypeScript has no quoted
//! form for parameter names.

use crate::placeholder::Parameter;
use std::collections::HashSet;

/// Reserved words that cannot be used as parameter names.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally", "for",
    "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Returns `true` if `name` matches `[A-Za-z_$][A-Za-z0-9_$]*`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[must_use]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Renders a property key, quoting it when it is not a plain identifier.
///
/// Reserved words are legal unquoted property names and are left alone.
#[must_use]
pub fn property_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        serde_json::Value::String(key.to_string()).to_string()
    }
}

/// Rewrites `name` into a usable parameter identifier.
///
/// Characters outside `[A-Za-z0-9_$]` become `_`; a leading digit or a reserved
/// word gets a `_` prefix; an empty name becomes `_`.
#[must_use]
pub fn sanitize_identifier(name: &str) -> String {
    let mut out: String =
        name.chars().map(|c| if is_identifier_part(c) { c } else { '_' }).collect();

    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) || is_reserved_word(&out)
    {
        out.insert(0, '_');
    }
    out
}

/// Renders the callable signature for `params`.
///
/// Parameter names are sanitized; if sanitizing makes two names collide, later
/// ones receive a numeric suffix (`user_name`, `user_name_2`, ...).
#[must_use]
pub fn render_signature(params: &[Parameter]) -> String {
    if params.is_empty() {
        return "() => string".to_string();
    }

    let mut used = HashSet::new();
    let rendered: Vec<String> = params
        .iter()
        .map(|param| {
            let base = sanitize_identifier(&param.name);
            let mut name = base.clone();
            let mut n = 2usize;
            while !used.insert(name.clone()) {
                name = format!("{base}_{n}");
                n += 1;
            }
            format!("{name}: {}", param.kind)
        })
        .collect();

    format!("({}) => string", rendered.join(", "))
}
