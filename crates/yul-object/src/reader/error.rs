//! Reader errors and their rendering against the source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use crate::object::AttachError;

/// A syntax or tree-building error, located in the source text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ReadError {
    pub kind: ReadErrorKind,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadErrorKind {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected {0}, found end of input")]
    UnexpectedEof(&'static str),

    #[error("unclosed block")]
    UnclosedBlock,

    #[error("invalid hex literal: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid escape sequence {0:?}")]
    InvalidEscape(String),

    #[error("name is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid @use-src comment: {0}")]
    InvalidUseSrc(String),

    #[error("objects nested deeper than {0} levels")]
    RecursionLimitExceeded(u32),

    #[error(transparent)]
    Attach(#[from] AttachError),
}

impl ReadError {
    pub fn new(kind: impl Into<ReadErrorKind>, span: TextRange) -> Self {
        Self {
            kind: kind.into(),
            span,
        }
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> ReadErrorPrinter<'e, 's> {
        ReadErrorPrinter::new(self, source)
    }
}

/// Builder for rendering a [`ReadError`] as an annotated source excerpt.
pub struct ReadErrorPrinter<'e, 's> {
    error: &'e ReadError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> ReadErrorPrinter<'e, 's> {
    pub fn new(error: &'e ReadError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let message = self.error.kind.to_string();
        let range = adjust_range(self.error.span, self.source.len());

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
