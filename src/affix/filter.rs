//! Compiled character filters.
//!
//! A `Filter` describes the characters that must NOT appear in a
//! sanitized value. Sanitizing removes every match; it never rejects.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{NameError, Result};

/// Characters outside `[a-zA-Z0-9$_]`.
pub const PREFIX_PATTERN: &str = r"[^a-zA-Z0-9$_]";

/// Characters outside `[a-zA-Z0-9$_-]`. Suffixes also keep the hyphen.
pub const SUFFIX_PATTERN: &str = r"[^a-zA-Z0-9$_-]";

static PREFIX_FILTER: LazyLock<Filter> = LazyLock::new(|| Filter::compiled(PREFIX_PATTERN));
static SUFFIX_FILTER: LazyLock<Filter> = LazyLock::new(|| Filter::compiled(SUFFIX_PATTERN));

/// A pattern of disallowed characters.
///
/// Invariant: the inner regex was compiled from `as_str()`.
#[derive(Debug, Clone)]
pub struct Filter(Regex);

impl Filter {
    /// Compile a filter from pattern text.
    pub fn new(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| NameError::InvalidFilter {
                pattern: pattern.to_string(),
                source,
            })
    }

    // Only for the built-in constant patterns.
    fn compiled(pattern: &str) -> Self {
        Self(Regex::new(pattern).expect("built-in filter pattern is valid"))
    }

    /// Default filter for prefixes.
    pub fn prefix() -> &'static Filter {
        &PREFIX_FILTER
    }

    /// Default filter for suffixes.
    pub fn suffix() -> &'static Filter {
        &SUFFIX_FILTER
    }

    /// Default filter for the core word of a name (same as the prefix).
    pub fn word() -> &'static Filter {
        &PREFIX_FILTER
    }

    /// Remove every disallowed character from `value`.
    pub fn strip(&self, value: &str) -> String {
        self.0.replace_all(value, "").into_owned()
    }

    /// Check whether `value` contains any disallowed character.
    #[inline]
    pub fn matches(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    /// The pattern text this filter was compiled from.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Filter {}

impl FromStr for Filter {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
