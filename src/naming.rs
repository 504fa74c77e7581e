//! Lexical case forms of an entity name.
//!
//! The kebab form is produced by two sequential regex substitutions rather
//! than a general word splitter. Runs of capitals are only partially split
//! (`HTTPServer` becomes `http-server`, `UserID` becomes `user-id`) and
//! existing generated code depends on exactly that output.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{GenError, Result};

/// `(anyChar)(UpperFollowedByLowers)`
static FIRST_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("static regex is valid"));

/// `(lowerOrDigit)(Upper)`
static ALL_CAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex is valid"));

/// An entity name as supplied by the user, guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GenError::EmptyEntityName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four spellings of an entity name used by the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameForms {
    pub pascal: String,
    pub camel: String,
    pub lower: String,
    pub kebab: String,
}

impl NameForms {
    pub fn derive(name: &EntityName) -> Self {
        let input = name.as_str();
        Self {
            pascal: input.to_string(),
            camel: to_camel_case(input),
            lower: input.to_lowercase(),
            kebab: to_kebab_case(input),
        }
    }
}

/// Lower-cases the first character and keeps the rest verbatim.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn to_kebab_case(s: &str) -> String {
    let hyphenated = FIRST_CAP.replace_all(s, "${1}-${2}");
    let hyphenated = ALL_CAP.replace_all(&hyphenated, "${1}-${2}");
    hyphenated.to_lowercase()
}
