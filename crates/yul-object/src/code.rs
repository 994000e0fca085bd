//! Code payload attached to an object.
//!
//! The payload (a parsed and analyzed block of Yul statements) is produced
//! and rendered by external collaborators. The object model only stores it
//! behind a shared handle and asks it to print itself.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use yul_object_core::source::single_line_snippet;
use yul_object_core::utils::escape_and_quote;
use yul_object_core::{CharStreamProvider, DebugInfoSelection, Dialect};

use crate::debug_data::SourceNameMap;

/// Opaque analyzer output attached alongside the code.
pub type AnalysisInfo = Arc<dyn Any + Send + Sync>;

/// Executable payload of an object.
pub trait Code: fmt::Debug + Send + Sync {
    /// Dialect the payload was checked against, if known.
    fn dialect(&self) -> Option<&Dialect> {
        None
    }

    /// Render the outermost block, from `{` to `}`.
    fn print(&self, ctx: &PrintContext<'_>) -> String;

    fn to_json(&self) -> serde_json::Value;
}

/// What a code printer needs to know about the surrounding output.
#[derive(Clone, Copy)]
pub struct PrintContext<'a> {
    selection: DebugInfoSelection,
    sources: Option<&'a dyn CharStreamProvider>,
    source_names: Option<&'a SourceNameMap>,
}

impl<'a> PrintContext<'a> {
    pub fn new(
        selection: DebugInfoSelection,
        sources: Option<&'a dyn CharStreamProvider>,
    ) -> Self {
        Self {
            selection,
            sources,
            source_names: None,
        }
    }

    pub(crate) fn with_source_names(mut self, source_names: Option<&'a SourceNameMap>) -> Self {
        self.source_names = source_names;
        self
    }

    pub fn selection(&self) -> DebugInfoSelection {
        self.selection
    }

    /// File name behind a source index, from the enclosing `@use-src` table.
    pub fn source_name(&self, source_index: u32) -> Option<&'a str> {
        self.source_names?.get(&source_index).map(|name| &**name)
    }

    /// `@src i:start:end` with an optional quoted snippet, or `None` when
    /// locations are not selected.
    pub fn source_location(&self, source_index: u32, start: usize, end: usize) -> Option<String> {
        if !self.selection.includes_location() {
            return None;
        }

        let mut out = format!("@src {source_index}:{start}:{end}");
        if self.selection.includes_snippet()
            && let Some(snippet) = self
                .sources
                .and_then(|sources| sources.char_stream(source_index))
                .and_then(|text| single_line_snippet(text, start, end))
        {
            out.push_str("  ");
            out.push_str(&escape_and_quote(&snippet));
        }
        Some(out)
    }

    /// `@ast-id n`, or `None` when AST ids are not selected.
    pub fn ast_id(&self, id: i64) -> Option<String> {
        self.selection
            .includes_ast_id()
            .then(|| format!("@ast-id {id}"))
    }
}
