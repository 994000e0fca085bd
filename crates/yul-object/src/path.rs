//! Resolution of dot-qualified object names to slot-id paths.

use crate::node::ObjectNode;
use crate::object::Object;

/// Why a qualified name could not be resolved to an object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// A segment (possibly empty) names no child of the current object.
    #[error("object {path:?} not found: no node named {segment:?}")]
    Unresolved { path: String, segment: String },

    /// An intermediate segment names a data node.
    #[error("object {path:?} not found: data node {segment:?} has no children")]
    ThroughData { path: String, segment: String },

    /// The final segment names a data node.
    #[error("{path:?} names a data node, not an object")]
    ToData { path: String },
}

impl Object {
    /// Slot ids leading from `self` to the object named by `qualified_name`.
    ///
    /// The name may start with `self`'s own name followed by `.` or be
    /// relative to it, so on `A1` both `"A1.E2.F3"` and `"E2.F3"` resolve to
    /// the same path. A name equal to `self`'s own name yields an empty path.
    /// Empty segments (`"E2..F3"`, `"E2."`) never resolve.
    ///
    /// ```text
    /// A1 { B2 { C3, D3 }, E2 { F3 { G4, K4, H4 { I5 } } } }
    /// "A1.E2.F3.H4" -> [1, 0, 2]
    /// "E2.F3.H4"    -> [1, 0, 2]
    /// "A1.E2"       -> [1]
    /// ```
    pub fn path_to_sub_object(&self, qualified_name: &str) -> Result<Vec<usize>, PathError> {
        if qualified_name == self.name() {
            return Ok(Vec::new());
        }
        let relative = qualified_name
            .strip_prefix(self.name())
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(qualified_name);
        let segments: Vec<&str> = relative.split('.').collect();

        let mut path = Vec::with_capacity(segments.len());
        let mut current = self;

        for (i, &segment) in segments.iter().enumerate() {
            let is_last = i + 1 == segments.len();
            let unresolved = || PathError::Unresolved {
                path: qualified_name.to_owned(),
                segment: segment.to_owned(),
            };

            // Segments never contain '.', so dotted children are unreachable here.
            if segment.is_empty() {
                return Err(unresolved());
            }
            let (slot, node) = current.child_full(segment).ok_or_else(unresolved)?;

            match node {
                ObjectNode::Data(_) if is_last => {
                    return Err(PathError::ToData {
                        path: qualified_name.to_owned(),
                    });
                }
                ObjectNode::Data(_) => {
                    return Err(PathError::ThroughData {
                        path: qualified_name.to_owned(),
                        segment: segment.to_owned(),
                    });
                }
                ObjectNode::Object(object) => {
                    debug_assert_eq!(object.slot_id(), Some(slot));
                    path.push(slot);
                    current = object;
                }
            }
        }

        Ok(path)
    }
}
