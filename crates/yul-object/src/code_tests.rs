use std::sync::Arc;

use serde_json::{Value, json};
use yul_object_core::{DebugInfoSelection, SourceTexts};

use crate::test_utils::{object, with_sources};
use crate::{Code, Object, PrintContext};

/// Prints a single statement annotated with its origin.
#[derive(Debug)]
struct Located;

impl Code for Located {
    fn print(&self, ctx: &PrintContext<'_>) -> String {
        let mut lines = Vec::new();
        if let Some(name) = ctx.source_name(0) {
            lines.push(format!("// from {name}"));
        }
        if let Some(src) = ctx.source_location(0, 4, 9) {
            lines.push(format!("/// {src}"));
        }
        if let Some(id) = ctx.ast_id(12) {
            lines.push(format!("/// {id}"));
        }
        lines.push("stop()".to_owned());
        format!("{{ {} }}", lines.join(" "))
    }

    fn to_json(&self) -> Value {
        json!({ "nodeType": "YulBlock", "statements": [] })
    }
}

fn sources() -> SourceTexts {
    let mut texts = SourceTexts::new();
    texts.insert(0, "a.sol", "let value := 1\n");
    texts
}

#[test]
fn location_without_snippet_source() {
    let ctx = PrintContext::new(DebugInfoSelection::default(), None);
    assert_eq!(ctx.source_location(1, 2, 3).as_deref(), Some("@src 1:2:3"));
}

#[test]
fn location_with_snippet() {
    let texts = sources();
    let ctx = PrintContext::new(DebugInfoSelection::default(), Some(&texts));

    insta::assert_snapshot!(ctx.source_location(0, 4, 9).unwrap(), @r#"@src 0:4:9  "value""#);
}

#[test]
fn snippet_is_cut_at_line_break() {
    let texts = sources();
    let ctx = PrintContext::new(DebugInfoSelection::ALL, Some(&texts));

    insta::assert_snapshot!(ctx.source_location(0, 4, 20).unwrap(), @r#"@src 0:4:20  "value := 1...""#);
}

#[test]
fn nothing_selected() {
    let texts = sources();
    let ctx = PrintContext::new(DebugInfoSelection::NONE, Some(&texts));

    assert_eq!(ctx.source_location(0, 4, 9), None);
    assert_eq!(ctx.ast_id(1), None);
    assert_eq!(ctx.source_name(0), None);
}

#[test]
fn only_location_skips_snippet() {
    let texts = sources();
    let ctx = PrintContext::new(DebugInfoSelection::only_location(), Some(&texts));

    assert_eq!(ctx.source_location(0, 4, 9).as_deref(), Some("@src 0:4:9"));
}

#[test]
fn printer_passes_context_to_code() {
    let texts = sources();
    let nested = Object::new("B").with_code(Arc::new(Located));
    let root = with_sources(object("A", vec![nested.into()]), &[(0, "a.sol")]);

    let out = root
        .printer()
        .selection(DebugInfoSelection::ALL)
        .sources(&texts)
        .dump();

    insta::assert_snapshot!(out, @r#"
    /// @use-src 0:"a.sol"
    object "A" {
        object "B" {
            code { // from a.sol /// @src 0:4:9  "value" /// @ast-id 12 stop() }
        }
    }
    "#);
}

#[test]
fn code_json_is_wrapped() {
    let obj = Object::new("A").with_code(Arc::new(Located));

    assert_eq!(
        obj.to_json()["code"],
        json!({
            "nodeType": "YulCode",
            "block": { "nodeType": "YulBlock", "statements": [] },
        })
    );
}
