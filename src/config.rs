//! Name configuration with typed defaults.

use crate::affix::Filter;
use crate::common_name::Affixes;

/// When a [`Name`](crate::Name) recomputes its composite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Refresh {
    /// Mutators only store parts; callers run `update()` themselves.
    #[default]
    Explicit,
    /// Every mutator finishes with `update()`.
    Eager,
}

/// Configuration for building a [`Name`](crate::Name).
#[derive(Debug, Clone, Default)]
pub struct NameConfig {
    /// Initial prefix, sanitized on construction.
    pub prefix: Option<String>,

    /// Initial suffix, sanitized on construction.
    pub suffix: Option<String>,

    /// Replaces the default prefix filter.
    pub prefix_filter: Option<Filter>,

    /// Replaces the default suffix filter.
    pub suffix_filter: Option<Filter>,

    /// Replaces the default word filter.
    pub word_filter: Option<Filter>,

    pub refresh: Refresh,
}

impl NameConfig {
    /// Create config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the initial prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Builder: set the initial suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Builder: set the prefix filter.
    pub fn prefix_filter(mut self, filter: Filter) -> Self {
        self.prefix_filter = Some(filter);
        self
    }

    /// Builder: set the suffix filter.
    pub fn suffix_filter(mut self, filter: Filter) -> Self {
        self.suffix_filter = Some(filter);
        self
    }

    /// Builder: set the word filter.
    pub fn word_filter(mut self, filter: Filter) -> Self {
        self.word_filter = Some(filter);
        self
    }

    /// Builder: set the refresh policy.
    pub fn refresh(mut self, refresh: Refresh) -> Self {
        self.refresh = refresh;
        self
    }

    /// The initial prefix and suffix.
    pub fn affixes(&self) -> Affixes {
        Affixes {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }
}
