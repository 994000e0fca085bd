//! JSON rendering of object trees.

use serde_json::{Map, Value, json};

use crate::node::{Data, ObjectNode};
use crate::object::Object;

impl Object {
    /// Full structural JSON: name, code, children and source table.
    pub fn to_json(&self) -> Value {
        let sub_objects: Vec<Value> = self.children().map(ObjectNode::to_json).collect();

        let mut ret = json!({
            "nodeType": "YulObject",
            "name": self.name(),
            "subObjects": sub_objects,
        });

        if let Some(code) = self.code() {
            ret["code"] = json!({
                "nodeType": "YulCode",
                "block": code.to_json(),
            });
        }

        if let Some(names) = self.source_names() {
            let names: Map<String, Value> = names
                .iter()
                .map(|(index, name)| (index.to_string(), Value::from(&**name)))
                .collect();
            ret["sourceNames"] = Value::Object(names);
        }

        ret
    }
}

impl Data {
    pub fn to_json(&self) -> Value {
        json!({
            "nodeType": "YulData",
            "name": self.name(),
            "value": hex::encode(self.data()),
        })
    }
}

impl ObjectNode {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Data(data) => data.to_json(),
            Self::Object(object) => object.to_json(),
        }
    }
}
