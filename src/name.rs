//! Composite names built from a prefix, a word and a suffix.
//!
//! The composite value is always `prefix + word + suffix`, in that order,
//! with no delimiter. Whether it follows mutations on its own depends on
//! the [`Refresh`] policy: by default it is only recomputed by
//! [`Name::update`].

use crate::affix::{Filter, Prefix, Suffix, Word};
use crate::common_name::{Affixes, CommonName};
use crate::config::{NameConfig, Refresh};

/// A word with its prefix and suffix, plus the last computed composite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    common: CommonName,
    word: Word,
    value: String,
    refresh: Refresh,
}

impl Name {
    /// Sanitize each part with its default filter and concatenate them.
    pub fn define(prefix: &str, word: &str, suffix: &str) -> String {
        let mut name = Prefix::sanitize(prefix);
        name.push_str(&Word::sanitize(word));
        name.push_str(&Suffix::sanitize(suffix));
        name
    }

    /// Create a name and compute its composite value once.
    pub fn new(word: &str, affixes: &Affixes) -> Self {
        let mut name = Self {
            common: CommonName::new(affixes),
            word: Word::from(word),
            value: String::new(),
            refresh: Refresh::default(),
        };
        name.update();
        name
    }

    /// Create a name with configured filters and refresh policy.
    pub fn from_config(word: &str, config: &NameConfig) -> Self {
        let mut common = CommonName::default();
        if let Some(filter) = &config.prefix_filter {
            common.set_prefix_filter(filter.clone());
        }
        if let Some(filter) = &config.suffix_filter {
            common.set_suffix_filter(filter.clone());
        }
        common
            .set_prefix(config.prefix.as_deref())
            .set_suffix(config.suffix.as_deref());

        let mut word_part = Word::default();
        if let Some(filter) = &config.word_filter {
            word_part.set_filter(filter.clone());
        }
        word_part.set(word);

        let mut name = Self {
            common,
            word: word_part,
            value: String::new(),
            refresh: config.refresh,
        };
        name.update();
        name
    }

    /// The last computed composite value.
    ///
    /// Under [`Refresh::Explicit`] this lags behind mutations until
    /// [`update`](Self::update) runs.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn word(&self) -> &str {
        self.word.get()
    }

    #[inline]
    pub fn prefix(&self) -> &Prefix {
        self.common.prefix()
    }

    #[inline]
    pub fn suffix(&self) -> &Suffix {
        self.common.suffix()
    }

    #[inline]
    pub fn common(&self) -> &CommonName {
        &self.common
    }

    #[inline]
    pub fn word_filter(&self) -> &Filter {
        self.word.filter()
    }

    #[inline]
    pub fn refresh_policy(&self) -> Refresh {
        self.refresh
    }

    /// The composite of the current parts, computed without storing it.
    pub fn generate(&self) -> String {
        let mut name = String::with_capacity(
            self.prefix().get().len() + self.word().len() + self.suffix().get().len(),
        );
        name.push_str(self.prefix().get());
        name.push_str(self.word());
        name.push_str(self.suffix().get());
        name
    }

    /// Check whether a mutation happened since the last update.
    pub fn is_stale(&self) -> bool {
        self.value != self.generate()
    }

    /// Recompute the composite value from the current parts.
    pub fn update(&mut self) -> &mut Self {
        self.value = self.generate();
        self
    }

    pub fn set_word<'a>(&mut self, word: impl Into<Option<&'a str>>) -> &mut Self {
        self.word.set(word);
        self.refreshed()
    }

    pub fn set_word_with<'a>(
        &mut self,
        word: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        self.word.set_with(word, filter);
        self.refreshed()
    }

    /// Replace the filter used by later word sets.
    pub fn set_word_filter(&mut self, filter: Filter) -> &mut Self {
        self.word.set_filter(filter);
        self
    }

    pub fn set_prefix<'a>(&mut self, prefix: impl Into<Option<&'a str>>) -> &mut Self {
        self.common.set_prefix(prefix);
        self.refreshed()
    }

    pub fn set_prefix_with<'a>(
        &mut self,
        prefix: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        self.common.set_prefix_with(prefix, filter);
        self.refreshed()
    }

    pub fn set_suffix<'a>(&mut self, suffix: impl Into<Option<&'a str>>) -> &mut Self {
        self.common.set_suffix(suffix);
        self.refreshed()
    }

    pub fn set_suffix_with<'a>(
        &mut self,
        suffix: impl Into<Option<&'a str>>,
        filter: &Filter,
    ) -> &mut Self {
        self.common.set_suffix_with(suffix, filter);
        self.refreshed()
    }

    /// Set the word, and the prefix and suffix when they are provided.
    pub fn set<'a>(
        &mut self,
        word: impl Into<Option<&'a str>>,
        affixes: &Affixes,
    ) -> &mut Self {
        self.word.set(word);
        self.common
            .set_prefix(affixes.prefix.as_deref())
            .set_suffix(affixes.suffix.as_deref());
        self.refreshed()
    }

    fn refreshed(&mut self) -> &mut Self {
        match self.refresh {
            Refresh::Eager => self.update(),
            Refresh::Explicit => self,
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::new("", &Affixes::default())
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> String {
        name.value
    }
}
