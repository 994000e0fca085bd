use crate::utils::{escape_and_quote, indent};

#[test]
fn quote_plain() {
    assert_eq!(escape_and_quote("a.sol"), r#""a.sol""#);
}

#[test]
fn quote_escapes() {
    assert_eq!(escape_and_quote("a\"b\\c"), r#""a\"b\\c""#);
    assert_eq!(escape_and_quote("x\ny\t"), r#""x\ny\t""#);
    assert_eq!(escape_and_quote("\u{1}"), r#""\x01""#);
}

#[test]
fn indent_skips_empty_lines() {
    assert_eq!(indent("a\n\nb"), "    a\n\n    b");
    assert_eq!(indent(""), "");
}
