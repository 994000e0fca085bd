#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared primitives for the Yul object model.
//!
//! - `debug_info`: which debug annotations a printer should emit
//! - `source`: original source text lookup for snippet rendering
//! - `utils`: string quoting and indentation helpers

pub mod debug_info;
pub mod source;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use debug_info::{DebugInfoSelection, DebugInfoSelectionError};
pub use source::{CharStreamProvider, SourceTexts};

/// The dialect a code payload was analyzed against.
///
/// Only carried and exposed; the object model never interprets it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dialect {
    name: String,
}

impl Dialect {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
