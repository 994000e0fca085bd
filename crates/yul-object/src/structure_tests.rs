use crate::METADATA_NAME;
use crate::test_utils::{data, example_tree, object};

#[test]
fn collects_nested_paths() {
    let structure = example_tree().summarize_structure();

    assert_eq!(structure.object_name, "A1");
    insta::assert_debug_snapshot!(structure.object_paths, @r#"
    {
        "B2",
        "B2.D3",
        "E2",
        "E2.F3",
        "E2.F3.H4",
        "E2.F3.K4",
    }
    "#);
    insta::assert_debug_snapshot!(structure.data_paths, @r#"
    {
        "B2.C3",
        "E2.F3.G4",
        "E2.F3.H4.I5",
    }
    "#);
}

#[test]
fn contains_is_exclusive_by_kind() {
    let structure = example_tree().summarize_structure();

    assert!(structure.contains_object("E2.F3"));
    assert!(!structure.contains_data("E2.F3"));
    assert!(structure.contains_data("B2.C3"));
    assert!(!structure.contains_object("B2.C3"));
    assert!(structure.contains("E2.F3.H4.I5"));
    assert!(!structure.contains("A1"));
    assert!(!structure.contains("A1.B2"));
}

#[test]
fn top_level_names() {
    let structure = example_tree().summarize_structure();
    let names: Vec<&str> = structure.top_level_sub_object_names().into_iter().collect();
    assert_eq!(names, ["B2", "E2"]);
}

#[test]
fn top_level_names_are_undotted_object_paths() {
    let structure = example_tree().summarize_structure();
    let undotted: std::collections::BTreeSet<&str> = structure
        .object_paths
        .iter()
        .map(String::as_str)
        .filter(|path| !path.contains('.'))
        .collect();

    assert_eq!(structure.top_level_sub_object_names(), undotted);
}

#[test]
fn dotted_names_are_hidden_with_their_subtree() {
    let root = object(
        "A",
        vec![
            object("B.C", vec![data("inner")]).into(),
            data("x.y"),
            object("ok", vec![]).into(),
        ],
    );
    let structure = root.summarize_structure();

    assert_eq!(structure.object_paths.len(), 1);
    assert!(structure.contains_object("ok"));
    assert!(structure.data_paths.is_empty());
}

#[test]
fn top_level_metadata_is_reported() {
    let nested = object("B", vec![data(METADATA_NAME)]);
    let root = object("A", vec![data(METADATA_NAME), nested.into()]);
    let structure = root.summarize_structure();

    assert!(structure.contains_data(".metadata"));
    assert!(!structure.contains_data("B..metadata"));
    assert_eq!(structure.data_paths.len(), 1);
}

#[test]
fn metadata_object_is_not_reported() {
    let root = object("A", vec![object(METADATA_NAME, vec![]).into()]);
    assert!(!root.summarize_structure().contains(METADATA_NAME));
}
