//! Test fixtures.

use std::sync::Arc;

use crate::debug_data::ObjectDebugData;
use crate::object::Object;
use crate::text_code::TextCode;

pub fn object(name: &str, children: Vec<crate::ObjectNode>) -> Object {
    let mut object = Object::new(name);
    for child in children {
        object.attach(child).expect("fixture names are unique");
    }
    object
}

pub fn data(name: &str) -> crate::ObjectNode {
    crate::Data::new(name, vec![0u8]).into()
}

/// ```text
/// A1
///   B2 { C3 (data), D3 }
///   E2
///     F3 { G4 (data), K4, H4 { I5 (data) } }
/// ```
pub fn example_tree() -> Object {
    let b2 = object("B2", vec![data("C3"), object("D3", vec![]).into()]);
    let h4 = object("H4", vec![data("I5")]);
    let f3 = object(
        "F3",
        vec![data("G4"), object("K4", vec![]).into(), h4.into()],
    );
    let e2 = object("E2", vec![f3.into()]);
    object("A1", vec![b2.into(), e2.into()])
}

pub fn with_sources(object: Object, sources: &[(u32, &str)]) -> Object {
    object.with_debug_data(Arc::new(ObjectDebugData::from_sources(
        sources.iter().copied(),
    )))
}

pub fn text_code(body: &str) -> Arc<TextCode> {
    Arc::new(TextCode::new(body))
}
