//! Text helpers shared by the printer and the reader.

use std::fmt::Write as _;

/// Quote `s` with double quotes, escaping quotes, backslashes and control
/// characters so the result can be read back by the object reader.
pub fn escape_and_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                write!(out, "\\x{:02x}", c as u32).expect("String write never fails");
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Prefix every non-empty line with four spaces.
pub fn indent(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if !line.is_empty() {
            out.push_str("    ");
            out.push_str(line);
        }
    }
    out
}
