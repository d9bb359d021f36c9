//! Sanitized name parts.

mod filter;
mod sanitize;
mod value;

pub use filter::{Filter, PREFIX_PATTERN, SUFFIX_PATTERN};
pub use sanitize::Sanitize;
pub use value::{Affix, AffixKind, Prefix, PrefixKind, Suffix, SuffixKind, Word, WordKind};
