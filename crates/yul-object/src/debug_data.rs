//! Debug metadata shared between objects compiled from the same unit.

use std::collections::BTreeMap;
use std::sync::Arc;

use yul_object_core::utils::escape_and_quote;

/// Source index → source file name.
pub type SourceNameMap = BTreeMap<u32, Arc<str>>;

/// Debug bundle attached to an object.
///
/// The source-name table lets `@src` comments refer to files by a small
/// index instead of repeating the name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectDebugData {
    pub source_names: Option<SourceNameMap>,
}

impl ObjectDebugData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_names(source_names: SourceNameMap) -> Self {
        Self {
            source_names: Some(source_names),
        }
    }

    /// Build a table from `(index, name)` pairs.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (u32, &'a str)>) -> Self {
        Self::with_source_names(
            sources
                .into_iter()
                .map(|(index, name)| (index, Arc::from(name)))
                .collect(),
        )
    }

    /// `@use-src 0:"a.sol", 1:"b.sol"`, or empty when there is no table.
    pub fn format_use_src_comment(&self) -> String {
        let Some(names) = &self.source_names else {
            return String::new();
        };

        let pairs: Vec<String> = names
            .iter()
            .map(|(index, name)| format!("{index}:{}", escape_and_quote(name)))
            .collect();
        format!("@use-src {}", pairs.join(", "))
    }
}
