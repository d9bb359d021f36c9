//! The sanitized value shared by prefixes, suffixes and name words.
//!
//! An `Affix` stores one string with every disallowed character removed.
//! The kind parameter picks the default filter; an instance may replace it.

use std::marker::PhantomData;

use super::filter::Filter;

/// Selects the default filter and log label of an [`Affix`].
pub trait AffixKind {
    /// Short name used in log fields.
    const LABEL: &'static str;

    /// The filter new instances start with.
    fn default_filter() -> &'static Filter;
}

/// Marker for name prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixKind;

/// Marker for name suffixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuffixKind;

/// Marker for the core word of a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordKind;

impl AffixKind for PrefixKind {
    const LABEL: &'static str = "prefix";

    fn default_filter() -> &'static Filter {
        Filter::prefix()
    }
}

impl AffixKind for SuffixKind {
    const LABEL: &'static str = "suffix";

    fn default_filter() -> &'static Filter {
        Filter::suffix()
    }
}

impl AffixKind for WordKind {
    const LABEL: &'static str = "word";

    fn default_filter() -> &'static Filter {
        Filter::word()
    }
}

/// A prefix attached in front of a word.
pub type Prefix = Affix<PrefixKind>;

/// A suffix attached after a word.
pub type Suffix = Affix<SuffixKind>;

/// The core word of a name.
pub type Word = Affix<WordKind>;

/// A sanitized string together with the filter used on the next `set`.
///
/// Invariant: `value` contains no character matched by the filter that
/// was in effect when it was last set. Replacing the filter does not
/// touch the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affix<K: AffixKind> {
    value: String,
    filter: Filter,
    kind: PhantomData<K>,
}

impl<K: AffixKind> Affix<K> {
    /// Remove every character of `value` matched by `filter`.
    pub fn define(value: &str, filter: &Filter) -> String {
        filter.strip(value)
    }

    /// Sanitize `value` with this kind's default filter.
    pub fn sanitize(value: &str) -> String {
        Self::define(value, K::default_filter())
    }

    /// Builder: replace the filter used by subsequent sets.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// The stored sanitized value.
    #[inline]
    pub fn get(&self) -> &str {
        &self.value
    }

    /// The stored value sanitized again with `filter`. Does not mutate.
    pub fn get_filtered(&self, filter: &Filter) -> String {
        Self::define(&self.value, filter)
    }

    /// The filter applied by [`set`](Self::set).
    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Sanitize and store `value` with the instance filter.
    ///
    /// `None` is ignored and the stored value is kept.
    pub fn set<'a>(&mut self, value: impl Into<Option<&'a str>>) -> &mut Self {
        match value.into() {
            Some(value) => self.value = self.filter.strip(value),
            None => tracing::trace!(kind = K::LABEL, "ignoring missing value"),
        }
        self
    }

    /// Sanitize and store `value` with a one-off `filter`.
    ///
    /// The instance filter is left as it is.
    pub fn set_with<'a>(
        &mut self,
        value: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        match value.into() {
            Some(value) => self.value = Self::define(value, filter),
            None => tracing::trace!(kind = K::LABEL, "ignoring missing value"),
        }
        self
    }

    /// Replace the filter used by subsequent sets.
    pub fn set_filter(&mut self, filter: Filter) -> &mut Self {
        self.filter = filter;
        self
    }

    /// Compile `pattern` and use it as the instance filter.
    ///
    /// A pattern that does not compile is ignored.
    pub fn set_filter_pattern(&mut self, pattern: &str) -> &mut Self {
        match Filter::new(pattern) {
            Ok(filter) => self.filter = filter,
            Err(err) => tracing::debug!(kind = K::LABEL, error = %err, "keeping previous filter"),
        }
        self
    }
}

impl<K: AffixKind> Default for Affix<K> {
    fn default() -> Self {
        Self {
            value: String::new(),
            filter: K::default_filter().clone(),
            kind: PhantomData,
        }
    }
}

impl<K: AffixKind> From<&str> for Affix<K> {
    fn from(value: &str) -> Self {
        let mut affix = Self::default();
        affix.set(value);
        affix
    }
}

impl<K: AffixKind> AsRef<str> for Affix<K> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<K: AffixKind> std::fmt::Display for Affix<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K: AffixKind> From<Affix<K>> for String {
    fn from(affix: Affix<K>) -> String {
        affix.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let prefix = Prefix::default();
        assert!(prefix.is_empty());
        assert_eq!(prefix.filter(), Filter::prefix());
    }

    #[test]
    fn initially_set_prefix_to_dollars() {
        assert_eq!(Prefix::from("$$").get(), "$$");
    }

    #[test]
    fn set_prefix_to_dollars() {
        let mut prefix = Prefix::default();
        assert_eq!(prefix.set("$$").get(), "$$");
    }

    #[test]
    fn set_sanitizes() {
        let mut prefix = Prefix::default();
        prefix.set("abc-def");
        assert_eq!(prefix.get(), "abcdef");

        let mut suffix = Suffix::default();
        suffix.set("abc-def");
        assert_eq!(suffix.get(), "abc-def");
    }

    #[test]
    fn none_keeps_value() {
        let mut suffix = Suffix::from("tail");
        suffix.set(None);
        assert_eq!(suffix.get(), "tail");
    }

    #[test]
    fn set_is_chainable() {
        let mut prefix = Prefix::default();
        prefix.set("one").set("two!");
        assert_eq!(prefix.get(), "two");
    }

    #[test]
    fn set_with_leaves_instance_filter() {
        let digits = Filter::new("[0-9]").unwrap();
        let mut prefix = Prefix::default();
        prefix.set_with("a1-b2", &digits);
        assert_eq!(prefix.get(), "a-b");
        assert_eq!(prefix.filter(), Filter::prefix());
    }

    #[test]
    fn filter_change_is_not_retroactive() {
        let mut prefix = Prefix::from("abc123");
        prefix.set_filter(Filter::new("[0-9]").unwrap());
        assert_eq!(prefix.get(), "abc123");

        prefix.set("xyz789");
        assert_eq!(prefix.get(), "xyz");
    }

    #[test]
    fn invalid_pattern_is_ignored() {
        let mut suffix = Suffix::default();
        suffix.set_filter_pattern("[unclosed");
        assert_eq!(suffix.filter(), Filter::suffix());

        suffix.set_filter_pattern("[x]");
        assert_eq!(suffix.filter().as_str(), "[x]");
    }

    #[test]
    fn get_filtered_does_not_mutate() {
        let suffix = Suffix::from("v-1_beta");
        assert_eq!(suffix.get_filtered(Filter::prefix()), "v1_beta");
        assert_eq!(suffix.get(), "v-1_beta");
    }

    #[test]
    fn static_sanitize_uses_kind_default() {
        assert_eq!(Prefix::sanitize("a-b"), "ab");
        assert_eq!(Suffix::sanitize("a-b"), "a-b");
        assert_eq!(Word::sanitize("a-b"), "ab");
    }

    #[test]
    fn with_filter_builder() {
        let mut word = Word::default().with_filter(Filter::new("[_]").unwrap());
        word.set("snake_case!");
        assert_eq!(word.get(), "snakecase!");
    }

    #[test]
    fn converts_to_string() {
        let suffix = Suffix::from("end");
        assert_eq!(suffix.to_string(), "end");
        let owned: String = suffix.into();
        assert_eq!(owned, "end");
    }
}
