//! Summary of the paths reachable from inside an object.

use std::collections::BTreeSet;

use crate::node::ObjectNode;
use crate::object::{METADATA_NAME, Object};

/// Dot-separated paths to nested nodes, relative to one object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Structure {
    /// Name of the summarized object (not part of any path).
    pub object_name: String,
    pub object_paths: BTreeSet<String>,
    pub data_paths: BTreeSet<String>,
}

impl Structure {
    pub fn contains(&self, path: &str) -> bool {
        self.contains_object(path) || self.contains_data(path)
    }

    pub fn contains_object(&self, path: &str) -> bool {
        self.object_paths.contains(path)
    }

    pub fn contains_data(&self, path: &str) -> bool {
        self.data_paths.contains(path)
    }

    /// Names of the direct child objects.
    ///
    /// Every prefix of an object path is itself an object path, so the first
    /// segments are exactly the undotted entries.
    pub fn top_level_sub_object_names(&self) -> BTreeSet<&str> {
        self.object_paths
            .iter()
            .filter_map(|path| path.split('.').next())
            .collect()
    }
}

impl Object {
    /// Collect every path that code inside this object can use to refer to
    /// nested objects and data.
    ///
    /// Children whose names contain `.` are skipped together with their
    /// subtree, since such names cannot be told apart from a nested path.
    /// The one exception is the reserved [`METADATA_NAME`] data node attached
    /// directly to this object.
    pub fn summarize_structure(&self) -> Structure {
        let mut structure = Structure {
            object_name: self.name().to_owned(),
            ..Structure::default()
        };

        if let Some(ObjectNode::Data(_)) = self.child(METADATA_NAME) {
            structure.data_paths.insert(METADATA_NAME.to_owned());
        }
        collect_paths(self, "", &mut structure);

        structure
    }
}

fn collect_paths(object: &Object, prefix: &str, structure: &mut Structure) {
    for child in object.children() {
        if child.name().contains('.') {
            continue;
        }

        let path = format!("{prefix}{}", child.name());
        match child {
            ObjectNode::Data(_) => {
                structure.data_paths.insert(path);
            }
            ObjectNode::Object(nested) => {
                let nested_prefix = format!("{path}.");
                structure.object_paths.insert(path);
                collect_paths(nested, &nested_prefix, structure);
            }
        }
    }
}
