//! The prefix and suffix pair shared by every name.

use crate::affix::{Filter, Prefix, Suffix};

/// Optional prefix and suffix inputs.
///
/// A field left as `None` means "not provided" and leaves the
/// corresponding part untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Affixes {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

impl Affixes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: provide a prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Builder: provide a suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

/// Owns one prefix and one suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonName {
    prefix: Prefix,
    suffix: Suffix,
}

impl CommonName {
    /// Create fresh affixes, storing any provided initial values.
    pub fn new(affixes: &Affixes) -> Self {
        let mut common = Self::default();
        common
            .set_prefix(affixes.prefix.as_deref())
            .set_suffix(affixes.suffix.as_deref());
        common
    }

    #[inline]
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    #[inline]
    pub fn suffix(&self) -> &Suffix {
        &self.suffix
    }

    pub fn set_prefix<'a>(&mut self, prefix: impl Into<Option<&'a str>>) -> &mut Self {
        self.prefix.set(prefix);
        self
    }

    pub fn set_prefix_with<'a>(
        &mut self,
        prefix: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        self.prefix.set_with(prefix, filter);
        self
    }

    pub fn set_suffix<'a>(&mut self, suffix: impl Into<Option<&'a str>>) -> &mut Self {
        self.suffix.set(suffix);
        self
    }

    pub fn set_suffix_with<'a>(
        &mut self,
        suffix: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        self.suffix.set_with(suffix, filter);
        self
    }

    /// Replace the filter used by later prefix sets.
    pub fn set_prefix_filter(&mut self, filter: Filter) -> &mut Self {
        self.prefix.set_filter(filter);
        self
    }

    /// Replace the filter used by later suffix sets.
    pub fn set_suffix_filter(&mut self, filter: Filter) -> &mut Self {
        self.suffix.set_filter(filter);
        self
    }
}
