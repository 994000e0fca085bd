//! Original source text lookup.
//!
//! Debug comments in printed code refer to the original (pre-lowering)
//! sources by index. When snippets are requested, the printer asks a
//! [`CharStreamProvider`] for the text of that source.

use std::collections::BTreeMap;

/// Longest snippet rendered next to a source location, in characters.
pub const MAX_SNIPPET_LEN: usize = 100;

/// Supplies original source text keyed by source index.
pub trait CharStreamProvider {
    fn char_stream(&self, source_index: u32) -> Option<&str>;
}

impl<T: CharStreamProvider + ?Sized> CharStreamProvider for &T {
    fn char_stream(&self, source_index: u32) -> Option<&str> {
        (*self).char_stream(source_index)
    }
}

/// In-memory provider: source index → (name, content).
#[derive(Clone, Debug, Default)]
pub struct SourceTexts {
    entries: BTreeMap<u32, SourceEntry>,
}

#[derive(Clone, Debug)]
struct SourceEntry {
    name: String,
    content: String,
}

impl SourceTexts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under `index`, replacing any previous one.
    pub fn insert(&mut self, index: u32, name: &str, content: &str) {
        self.entries.insert(
            index,
            SourceEntry {
                name: name.to_owned(),
                content: content.to_owned(),
            },
        );
    }

    pub fn name(&self, index: u32) -> Option<&str> {
        self.entries.get(&index).map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str, &str)> {
        self.entries
            .iter()
            .map(|(idx, e)| (*idx, e.name.as_str(), e.content.as_str()))
    }
}

impl CharStreamProvider for SourceTexts {
    fn char_stream(&self, source_index: u32) -> Option<&str> {
        self.entries.get(&source_index).map(|e| e.content.as_str())
    }
}

/// Excerpt of `text[start..end]` suitable for a one-line comment.
///
/// Cut at the first line break and at [`MAX_SNIPPET_LEN`] characters; a cut
/// is marked with `...`. Empty or out-of-range locations yield `None`.
pub fn single_line_snippet(text: &str, start: usize, end: usize) -> Option<String> {
    if start >= end || start >= text.len() {
        return None;
    }
    let end = end.min(text.len());
    let cut = text.get(start..end)?;

    let (line, mut truncated) = match cut.find(['\n', '\r']) {
        Some(pos) => (&cut[..pos], true),
        None => (cut, false),
    };

    let mut snippet: String = line.chars().take(MAX_SNIPPET_LEN).collect();
    if snippet.len() < line.len() {
        truncated = true;
    }
    if truncated {
        snippet.push_str("...");
    }
    Some(snippet)
}
