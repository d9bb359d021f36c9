//! Composite identifier names.
//!
//! Builds strings of the form `prefix + word + suffix` where each part has
//! been stripped of disallowed characters. Sanitizing never fails: invalid
//! characters are dropped and missing input is ignored.

pub mod affix;
pub mod common_name;
pub mod config;
pub mod error;
pub mod name;

pub use affix::{Filter, Prefix, Sanitize, Suffix};
pub use common_name::{Affixes, CommonName};
pub use config::{NameConfig, Refresh};
pub use error::{NameError, Result};
pub use name::Name;
