//! Reading the textual object syntax back into a tree.
//!
//! Accepts what [`crate::ObjectPrinter`] produces: nested `object` blocks
//! with `code`, `data` and `/// @use-src` comments, or a bare code block.
//! Code bodies stay opaque and become [`crate::TextCode`] payloads.
//!
//! ```text
//! /// @use-src 0:"a.sol"
//! object "A" {
//!     code { mstore(0, 1) }
//!     data "D" hex"0102"
//! }
//! ```

mod error;
pub mod lexer;
mod parser;


pub use error::{ReadError, ReadErrorKind, ReadErrorPrinter};

use yul_object_core::Dialect;

use crate::object::Object;
use parser::Parser;

/// Nesting depth accepted by default.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Builder for reading an object tree from source text.
pub struct ObjectReader<'src> {
    source: &'src str,
    dialect: Option<Dialect>,
    recursion_limit: u32,
}

impl<'src> ObjectReader<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            dialect: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Dialect recorded on every code payload read.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn read(self) -> Result<Object, ReadError> {
        Parser::new(self.source)
            .with_dialect(self.dialect)
            .with_recursion_limit(self.recursion_limit)
            .parse_root()
    }
}

/// Read with default options.
pub fn read_object(source: &str) -> Result<Object, ReadError> {
    ObjectReader::new(source).read()
}
