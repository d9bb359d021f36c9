//! Extension trait for sanitizing plain strings in place of building affixes.

use std::borrow::Cow;

use super::filter::Filter;
use super::value::{Prefix, Suffix};

/// Convenient sanitization on string types.
pub trait Sanitize {
    fn to_prefix(&self) -> String;
    fn to_suffix(&self) -> String;
    fn strip_with(&self, filter: &Filter) -> String;
}

impl Sanitize for str {
    fn to_prefix(&self) -> String {
        Prefix::sanitize(self)
    }

    fn to_suffix(&self) -> String {
        Suffix::sanitize(self)
    }

    fn strip_with(&self, filter: &Filter) -> String {
        filter.strip(self)
    }
}

impl Sanitize for String {
    fn to_prefix(&self) -> String {
        self.as_str().to_prefix()
    }

    fn to_suffix(&self) -> String {
        self.as_str().to_suffix()
    }

    fn strip_with(&self, filter: &Filter) -> String {
        self.as_str().strip_with(filter)
    }
}

impl<'a> Sanitize for Cow<'a, str> {
    fn to_prefix(&self) -> String {
        self.as_ref().to_prefix()
    }

    fn to_suffix(&self) -> String {
        self.as_ref().to_suffix()
    }

    fn strip_with(&self, filter: &Filter) -> String {
        self.as_ref().strip_with(filter)
    }
}
