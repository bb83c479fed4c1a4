//! Placeholder parsing for template strings.
//!
//! Templates mark insertion points with `{<index>}` or `{<index>:<label>}`:
//!
//! ```text
//! "{0} is now a {1}"            -> _0: string, _1: string
//! "{0:user} is now a {1:role}"  -> user: string, role: string
//! "{0:user} greets {1:user}"    -> user: string
//! ```
//!
//! Each distinct placeholder becomes one [`Parameter`]. Parameters are unique by
//! name and listed in first-seen order; a name that recurs later in the template
//! is dropped. Text that does not match the grammar (an unterminated brace, a
//! non-numeric index) is ordinary text and yields no parameter.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// `{digits}` or `{digits:label}` where the label is any run without `}`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(\d+)(?::([^}]+))?\}").expect("placeholder pattern is valid")
});

/// The type a parameter accepts in the generated signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParamKind {
    #[default]
    String,
}

impl ParamKind {
    /// The type annotation emitted for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved parameter of a template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    /// The label if the placeholder had one, otherwise `_<index>`.
    pub name: String,
    pub kind: ParamKind,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::String,
        }
    }
}

/// A single placeholder occurrence as written in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// The digit run, kept as text so that arbitrarily large indices survive.
    pub index: &'a str,
    pub label: Option<&'a str>,
}

impl Placeholder<'_> {
    /// The parameter name this placeholder resolves to.
    #[must_use]
    pub fn name(&self) -> String {
        match self.label {
            Some(label) => label.to_string(),
            None => format!("_{}", self.index),
        }
    }
}

/// Iterates over every placeholder occurrence in `template`, left to right.
pub fn placeholders(template: &str) -> impl Iterator<Item = Placeholder<'_>> {
    PLACEHOLDER.captures_iter(template).filter_map(|caps| {
        let index = caps.get(1)?.as_str();
        let label = caps.get(2).map(|m| m.as_str());
        Some(Placeholder {
            index,
            label,
        })
    })
}

/// Parses `template` into its ordered, deduplicated parameter list.
///
/// Never fails: a template without placeholders yields an empty list.
///
/// # Examples
///
/// ```rust
/// use i18n_typegen::placeholder::parse_parameters;
///
/// let params = parse_parameters("{0:user} greets {1:user} from {2}");
/// let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
/// assert_eq!(names, ["user", "_2"]);
/// ```
#[must_use]
pub fn parse_parameters(template: &str) -> Vec<Parameter> {
    let mut seen = HashSet::new();
    let mut params = Vec::new();

    for placeholder in placeholders(template) {
        let name = placeholder.name();
        if seen.insert(name.clone()) {
            params.push(Parameter::new(name));
        }
    }

    params
}
