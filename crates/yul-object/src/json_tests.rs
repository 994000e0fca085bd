use serde_json::json;

use crate::Object;
use crate::test_utils::{object, text_code, with_sources};

#[test]
fn object_with_data_and_nested_object() {
    let mut root = with_sources(Object::new("A").with_code(text_code("stop()")), &[(0, "a.sol")]);
    root.add_data("D", [0x01u8, 0xff]).unwrap();
    root.add_object(object("B", vec![])).unwrap();

    assert_eq!(
        root.to_json(),
        json!({
            "nodeType": "YulObject",
            "name": "A",
            "code": {
                "nodeType": "YulCode",
                "block": { "nodeType": "YulBlock", "text": "stop()" },
            },
            "subObjects": [
                { "nodeType": "YulData", "name": "D", "value": "01ff" },
                { "nodeType": "YulObject", "name": "B", "subObjects": [] },
            ],
            "sourceNames": { "0": "a.sol" },
        })
    );
}

#[test]
fn bare_object_has_no_optional_keys() {
    let value = Object::new("A").to_json();

    assert!(value.get("code").is_none());
    assert!(value.get("sourceNames").is_none());
    assert_eq!(value["subObjects"], json!([]));
}
