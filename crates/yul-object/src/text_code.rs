//! Code payload kept as source text.
//!
//! Used by the reader: the statements inside a `code { ... }` block are not
//! interpreted, only normalized (outer blank lines dropped, common
//! indentation removed) so that printing and re-reading is stable.

use serde_json::{Value, json};
use yul_object_core::Dialect;
use yul_object_core::utils::indent;

use crate::code::{Code, PrintContext};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextCode {
    lines: Vec<String>,
    dialect: Option<Dialect>,
}

impl TextCode {
    /// Normalize the text between a block's braces.
    pub fn new(body: &str) -> Self {
        Self {
            lines: normalize(body),
            dialect: None,
        }
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Code for TextCode {
    fn dialect(&self) -> Option<&Dialect> {
        self.dialect.as_ref()
    }

    fn print(&self, _ctx: &PrintContext<'_>) -> String {
        if self.lines.is_empty() {
            return "{ }".to_string();
        }
        format!("{{\n{}\n}}", indent(&self.text()))
    }

    fn to_json(&self) -> Value {
        json!({
            "nodeType": "YulBlock",
            "text": self.text(),
        })
    }
}

fn normalize(body: &str) -> Vec<String> {
    let mut lines = body.lines().map(str::trim_end);
    // Text on the line of the opening brace carries no indentation of its own.
    let head = lines.next().map(str::trim_start).filter(|l| !l.is_empty());
    let rest: Vec<&str> = lines.collect();

    let common = rest
        .iter()
        .filter(|l| !l.is_empty())
        .map(|l| leading_blanks(l))
        .min()
        .unwrap_or(0);

    let mut out: Vec<String> = head.into_iter().map(str::to_string).collect();
    out.extend(rest.iter().map(|l| {
        if l.is_empty() {
            String::new()
        } else {
            l[common..].to_string()
        }
    }));

    while out.first().is_some_and(String::is_empty) {
        out.remove(0);
    }
    while out.last().is_some_and(String::is_empty) {
        out.pop();
    }
    out
}

fn leading_blanks(line: &str) -> usize {
    line.bytes().take_while(|b| matches!(b, b' ' | b'\t')).count()
}
