//! Merging `@use-src` tables across an object tree.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use log::warn;

use crate::node::ObjectNode;
use crate::object::Object;

impl Object {
    /// Merge the source-name tables of this object and all nested objects
    /// into `indices` (source name → index).
    ///
    /// Objects are visited depth-first in slot order, this object first. The
    /// first index seen for a name wins; later conflicting assignments are
    /// ignored.
    pub fn collect_source_indices(&self, indices: &mut BTreeMap<String, u32>) {
        if let Some(names) = self.source_names() {
            for (&index, name) in names {
                match indices.entry(name.to_string()) {
                    Entry::Vacant(entry) => {
                        entry.insert(index);
                    }
                    Entry::Occupied(entry) if *entry.get() != index => {
                        warn!(
                            "object {:?} maps {:?} to source index {index}, keeping {}",
                            self.name(),
                            entry.key(),
                            entry.get()
                        );
                    }
                    Entry::Occupied(_) => {}
                }
            }
        }

        for child in self.children() {
            if let ObjectNode::Object(nested) = child {
                nested.collect_source_indices(indices);
            }
        }
    }

    /// Whether the merged source indices are exactly `0..n`.
    ///
    /// A tree without any source table counts as contiguous.
    pub fn has_contiguous_source_indices(&self) -> bool {
        let mut indices = BTreeMap::new();
        self.collect_source_indices(&mut indices);

        let distinct: BTreeSet<u32> = indices.into_values().collect();
        let count = distinct.len() as u32;
        distinct.into_iter().eq(0..count)
    }
}
