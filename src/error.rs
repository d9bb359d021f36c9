//! Error types for building names.
//!
//! Setters on affixes and names never fail; invalid input is dropped.
//! The only fallible step is compiling a filter from pattern text.

/// All possible errors while configuring name sanitization.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// The filter pattern did not compile.
    #[error("Invalid filter pattern '{pattern}'")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl NameError {
    /// The pattern text that caused the error.
    pub fn pattern(&self) -> &str {
        match self {
            Self::InvalidFilter { pattern, .. } => pattern,
        }
    }
}

pub type Result<T> = std::result::Result<T, NameError>;
