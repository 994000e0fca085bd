use std::collections::BTreeMap;

use crate::Object;
use crate::test_utils::{object, with_sources};

fn collect(object: &Object) -> BTreeMap<String, u32> {
    let mut indices = BTreeMap::new();
    object.collect_source_indices(&mut indices);
    indices
}

#[test]
fn no_tables_collects_nothing() {
    let root = object("A", vec![object("B", vec![]).into()]);

    assert!(collect(&root).is_empty());
    assert!(root.has_contiguous_source_indices());
}

#[test]
fn merges_disjoint_tables() {
    let nested = with_sources(object("B", vec![]), &[(2, "c.sol")]);
    let root = with_sources(
        object("A", vec![nested.into()]),
        &[(0, "a.sol"), (1, "b.sol")],
    );

    insta::assert_debug_snapshot!(collect(&root), @r#"
    {
        "a.sol": 0,
        "b.sol": 1,
        "c.sol": 2,
    }
    "#);
    assert!(root.has_contiguous_source_indices());
}

#[test]
fn first_assignment_wins() {
    let nested = with_sources(object("B", vec![]), &[(7, "a.sol")]);
    let root = with_sources(object("A", vec![nested.into()]), &[(0, "a.sol")]);

    assert_eq!(collect(&root).get("a.sol"), Some(&0));
}

#[test]
fn existing_entries_are_kept() {
    let root = with_sources(object("A", vec![]), &[(0, "a.sol")]);
    let mut indices = BTreeMap::from([("a.sol".to_owned(), 4)]);

    root.collect_source_indices(&mut indices);

    assert_eq!(indices.get("a.sol"), Some(&4));
}

#[test]
fn gap_is_not_contiguous() {
    let root = with_sources(object("A", vec![]), &[(0, "a.sol"), (2, "c.sol")]);
    assert!(!root.has_contiguous_source_indices());
}

#[test]
fn not_starting_at_zero_is_not_contiguous() {
    let root = with_sources(object("A", vec![]), &[(1, "a.sol")]);
    assert!(!root.has_contiguous_source_indices());
}

#[test]
fn shared_index_counts_once() {
    let nested = with_sources(object("B", vec![]), &[(0, "b.sol"), (1, "c.sol")]);
    let root = with_sources(object("A", vec![nested.into()]), &[(0, "a.sol")]);

    assert_eq!(collect(&root).len(), 3);
    assert!(root.has_contiguous_source_indices());
}
