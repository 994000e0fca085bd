//! Textual rendering of object trees.
//!
//! The output is the object syntax accepted by [`crate::reader`]:
//!
//! ```text
//! /// @use-src 0:"a.sol"
//! object "A" {
//!     code { ... }
//!     object "B" { ... }
//!     data "D" hex"0102"
//! }
//! ```

use std::fmt::{self, Write};

use yul_object_core::utils::{escape_and_quote, indent};
use yul_object_core::{CharStreamProvider, DebugInfoSelection};

use crate::code::PrintContext;
use crate::debug_data::SourceNameMap;
use crate::node::ObjectNode;
use crate::object::Object;

/// Builder for rendering an object tree as text.
pub struct ObjectPrinter<'o, 's> {
    object: &'o Object,
    selection: DebugInfoSelection,
    sources: Option<&'s dyn CharStreamProvider>,
}

impl<'o, 's> ObjectPrinter<'o, 's> {
    pub fn new(object: &'o Object) -> Self {
        Self {
            object,
            selection: DebugInfoSelection::default(),
            sources: None,
        }
    }

    pub fn selection(mut self, selection: DebugInfoSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Original sources, consulted only for `@src` snippets.
    pub fn sources(mut self, sources: &'s dyn CharStreamProvider) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        w.write_str(&self.render_object(self.object, None))
    }

    fn render_object(&self, object: &Object, inherited: Option<&SourceNameMap>) -> String {
        let mut out = String::new();

        if self.selection.includes_use_src()
            && let Some(debug_data) = object.debug_data()
            && debug_data.source_names.is_some()
        {
            out.push_str("/// ");
            out.push_str(&debug_data.format_use_src_comment());
            out.push('\n');
        }

        let source_names = object.source_names().or(inherited);
        let ctx = PrintContext::new(self.selection, self.sources).with_source_names(source_names);

        // Code-only form: a bare block with no surrounding object.
        if object.name().is_empty()
            && object.children_len() == 0
            && let Some(code) = object.code()
        {
            out.push_str(&code.print(&ctx));
            return out;
        }

        let mut items = Vec::with_capacity(object.children_len() + 1);
        if let Some(code) = object.code() {
            items.push(format!("code {}", code.print(&ctx)));
        }
        for child in object.children() {
            items.push(match child {
                ObjectNode::Data(data) => data.to_string(),
                ObjectNode::Object(nested) => self.render_object(nested, source_names),
            });
        }

        out.push_str("object ");
        out.push_str(&escape_and_quote(object.name()));
        out.push_str(" {\n");
        if !items.is_empty() {
            out.push_str(&indent(&items.join("\n")));
            out.push('\n');
        }
        out.push('}');
        out
    }
}

impl Object {
    pub fn printer(&self) -> ObjectPrinter<'_, '_> {
        ObjectPrinter::new(self)
    }

    /// Parseable text of this object and its subtree.
    pub fn to_string_with(
        &self,
        selection: DebugInfoSelection,
        sources: Option<&dyn CharStreamProvider>,
    ) -> String {
        let printer = ObjectPrinter::new(self).selection(selection);
        match sources {
            Some(sources) => printer.sources(sources).dump(),
            None => printer.dump(),
        }
    }
}

impl ObjectNode {
    pub fn to_string_with(
        &self,
        selection: DebugInfoSelection,
        sources: Option<&dyn CharStreamProvider>,
    ) -> String {
        match self {
            Self::Data(data) => data.to_string(),
            Self::Object(object) => object.to_string_with(selection, sources),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.printer().format(f)
    }
}
