#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Yul object trees.
//!
//! An object is a named container holding an optional code payload, named
//! data blobs and nested objects. This crate provides:
//! - `object`, `node`: the tree itself, with slot-id assignment on attach
//! - `path`, `structure`: name resolution and reachable-path summaries
//! - `source_indices`: merging `@use-src` tables across a tree
//! - `printer`, `json`: textual and JSON rendering
//! - `reader`: parsing the textual form back into a tree

pub mod code;
pub mod debug_data;
pub mod json;
pub mod node;
pub mod object;
pub mod path;
pub mod printer;
pub mod reader;
pub mod source_indices;
pub mod structure;
pub mod text_code;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod code_tests;
#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod printer_tests;
#[cfg(test)]
mod source_indices_tests;
#[cfg(test)]
mod structure_tests;

pub use code::{AnalysisInfo, Code, PrintContext};
pub use debug_data::{ObjectDebugData, SourceNameMap};
pub use node::{Data, ObjectNode};
pub use object::{AttachError, METADATA_NAME, Object};
pub use path::PathError;
pub use printer::ObjectPrinter;
pub use reader::{ObjectReader, ReadError, ReadErrorKind, read_object};
pub use structure::Structure;
pub use text_code::TextCode;

pub use yul_object_core::{CharStreamProvider, DebugInfoSelection, Dialect, SourceTexts};

/// Any error produced while building, reading or querying object trees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Attach(#[from] AttachError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Read(#[from] ReadError),
}

pub type Result<T> = std::result::Result<T, Error>;
