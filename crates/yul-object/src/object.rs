//! The composite object node.
//!
//! An object owns an optional code payload and an ordered list of children
//! (data blobs and nested objects). Children live in a single `IndexMap`, so
//! insertion order, slot ids and the name lookup can never drift apart.

use std::any::Any;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use log::trace;
use yul_object_core::Dialect;

use crate::code::{AnalysisInfo, Code};
use crate::debug_data::{ObjectDebugData, SourceNameMap};
use crate::node::{Data, ObjectNode};

/// Name of the reserved data node carrying out-of-band build metadata.
pub const METADATA_NAME: &str = ".metadata";

/// Errors from [`Object::attach`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachError {
    #[error("object {parent:?} already contains a node named {name:?}")]
    DuplicateName { parent: String, name: String },

    #[error("nodes nested in object {parent:?} must be named")]
    EmptyName { parent: String },

    #[error("object {parent:?} cannot contain a node with its own name")]
    ShadowsParent { parent: String },
}

/// Code container with nested objects and data.
#[derive(Clone, Debug, Default)]
pub struct Object {
    name: String,
    code: Option<Arc<dyn Code>>,
    analysis_info: Option<AnalysisInfo>,
    /// Keyed by child name; the entry index is the child's slot id.
    children: IndexMap<String, ObjectNode>,
    /// Position in the parent's child list, `None` for a root.
    slot_id: Option<usize>,
    debug_data: Option<Arc<ObjectDebugData>>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Object without a name, as produced for a bare code block.
    pub fn unnamed() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slot_id(&self) -> Option<usize> {
        self.slot_id
    }

    pub fn is_sub_object(&self) -> bool {
        self.slot_id.is_some()
    }

    pub fn code(&self) -> Option<&Arc<dyn Code>> {
        self.code.as_ref()
    }

    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    /// Replace the code payload and its analysis result together.
    ///
    /// Handles to the previous payload obtained through [`Object::code`]
    /// stay valid.
    pub fn set_code(&mut self, code: Arc<dyn Code>, analysis_info: Option<AnalysisInfo>) {
        self.code = Some(code);
        self.analysis_info = analysis_info;
    }

    pub fn with_code(mut self, code: Arc<dyn Code>) -> Self {
        self.set_code(code, None);
        self
    }

    pub fn analysis_info(&self) -> Option<&AnalysisInfo> {
        self.analysis_info.as_ref()
    }

    /// Analysis result downcast to the analyzer's concrete type.
    pub fn analysis_info_as<T: Any>(&self) -> Option<&T> {
        self.analysis_info.as_deref()?.downcast_ref::<T>()
    }

    /// Dialect the code payload was checked against.
    pub fn dialect(&self) -> Option<&Dialect> {
        self.code.as_deref()?.dialect()
    }

    pub fn debug_data(&self) -> Option<&Arc<ObjectDebugData>> {
        self.debug_data.as_ref()
    }

    pub fn set_debug_data(&mut self, debug_data: Arc<ObjectDebugData>) {
        self.debug_data = Some(debug_data);
    }

    pub fn with_debug_data(mut self, debug_data: Arc<ObjectDebugData>) -> Self {
        self.set_debug_data(debug_data);
        self
    }

    pub(crate) fn source_names(&self) -> Option<&SourceNameMap> {
        self.debug_data.as_deref()?.source_names.as_ref()
    }

    /// Append a child, assigning its slot id.
    ///
    /// Names must be non-empty, unique among siblings and differ from the
    /// parent's own name (a qualified name may start with the parent's name,
    /// so a namesake child would be ambiguous). Names containing `.` are
    /// accepted but stay invisible to path lookups and structure summaries.
    pub fn attach(&mut self, node: impl Into<ObjectNode>) -> Result<usize, AttachError> {
        let mut node = node.into();
        let name = node.name().to_owned();

        if name.is_empty() {
            return Err(AttachError::EmptyName {
                parent: self.name.clone(),
            });
        }
        if name == self.name {
            return Err(AttachError::ShadowsParent {
                parent: self.name.clone(),
            });
        }

        let slot = self.children.len();
        match self.children.entry(name) {
            Entry::Occupied(entry) => Err(AttachError::DuplicateName {
                parent: self.name.clone(),
                name: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                if let ObjectNode::Object(object) = &mut node {
                    object.slot_id = Some(slot);
                }
                trace!("attached {:?} to {:?} at slot {slot}", entry.key(), self.name);
                entry.insert(node);
                Ok(slot)
            }
        }
    }

    pub fn add_object(&mut self, object: Object) -> Result<usize, AttachError> {
        self.attach(object)
    }

    pub fn add_data(
        &mut self,
        name: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Result<usize, AttachError> {
        self.attach(Data::new(name, data))
    }

    /// Children in slot order.
    pub fn children(&self) -> impl Iterator<Item = &ObjectNode> {
        self.children.values()
    }

    pub fn children_len(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, name: &str) -> Option<&ObjectNode> {
        self.children.get(name)
    }

    pub fn child_at(&self, slot: usize) -> Option<&ObjectNode> {
        self.children.get_index(slot).map(|(_, node)| node)
    }

    /// Slot id and node of the child called `name`.
    pub(crate) fn child_full(&self, name: &str) -> Option<(usize, &ObjectNode)> {
        self.children
            .get_full(name)
            .map(|(slot, _, node)| (slot, node))
    }

    /// Follow a slot-id path (as returned by `path_to_sub_object`).
    pub fn descend(&self, path: &[usize]) -> Option<&Object> {
        path.iter()
            .try_fold(self, |object, &slot| object.child_at(slot)?.as_object())
    }
}
