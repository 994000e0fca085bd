use crate::test_utils::{object, text_code, with_sources};
use crate::{Data, DebugInfoSelection, Object};

fn sample() -> Object {
    let mut b = Object::new("B").with_code(text_code(""));
    b.add_data("D", [0xabu8]).unwrap();

    let mut a = with_sources(
        Object::new("A").with_code(text_code("mstore(0, 1)")),
        &[(0, "a.sol"), (1, "b.sol")],
    );
    a.add_object(b).unwrap();
    a.add_data(".metadata", [1u8, 2]).unwrap();
    a
}

#[test]
fn prints_nested_tree() {
    insta::assert_snapshot!(sample().to_string(), @r#"
    /// @use-src 0:"a.sol", 1:"b.sol"
    object "A" {
        code {
            mstore(0, 1)
        }
        object "B" {
            code { }
            data "D" hex"ab"
        }
        data ".metadata" hex"0102"
    }
    "#);
}

#[test]
fn use_src_follows_selection() {
    let out = sample().to_string_with(DebugInfoSelection::NONE, None);
    assert!(out.starts_with("object \"A\" {"));
    assert!(!out.contains("@use-src"));

    let out = sample()
        .printer()
        .selection(DebugInfoSelection::only_location())
        .dump();
    assert!(!out.contains("@use-src"));
}

#[test]
fn nested_table_is_printed_before_nested_object() {
    let nested = with_sources(object("B", vec![]), &[(0, "x.sol")]);
    let root = object("A", vec![nested.into()]);

    insta::assert_snapshot!(root.to_string(), @r#"
    object "A" {
        /// @use-src 0:"x.sol"
        object "B" {
        }
    }
    "#);
}

#[test]
fn empty_object() {
    insta::assert_snapshot!(Object::new("E").to_string(), @r#"
    object "E" {
    }
    "#);
}

#[test]
fn code_only_form() {
    let obj = Object::unnamed().with_code(text_code("let x := 1\nsstore(0, x)"));

    insta::assert_snapshot!(obj.to_string(), @r"
    {
        let x := 1
        sstore(0, x)
    }
    ");
}

#[test]
fn names_are_escaped() {
    let mut obj = Object::new("a\"b");
    obj.attach(Data::new("line\nbreak", Vec::new())).unwrap();

    insta::assert_snapshot!(obj.to_string(), @r#"
    object "a\"b" {
        data "line\nbreak" hex""
    }
    "#);
}

#[test]
fn nodes_render_by_kind() {
    let root = sample();
    let rendered: Vec<String> = root
        .children()
        .map(|node| node.to_string_with(DebugInfoSelection::NONE, None))
        .collect();

    assert!(rendered[0].starts_with("object \"B\" {"));
    assert_eq!(rendered[1], r#"data ".metadata" hex"0102""#);
}

#[test]
fn format_writes_into_buffer() {
    let obj = Object::new("A");
    let mut out = String::new();
    obj.printer().format(&mut out).unwrap();
    assert_eq!(out, obj.to_string());
}
