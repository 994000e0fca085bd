//! Debug-info selection for textual output.
//!
//! Controls which annotations a printer emits around code:
//! - `location`: `@src` source-location comments
//! - `snippet`: a quoted excerpt of the original source next to `@src`
//! - `ast-id`: `@ast-id` comments
//! - `use-src`: the `/// @use-src` pragma in front of an object
//!
//! Parsed from a comma-separated list (`"location,snippet"`), or the
//! keywords `all` / `none`. Also deserializable from a settings file, either
//! as such a string or as a table of booleans.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Errors produced when parsing a selection string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DebugInfoSelectionError {
    #[error("empty debug info selection")]
    Empty,

    #[error("unknown debug info component: {0:?}")]
    UnknownComponent(String),

    #[error("{0:?} cannot be combined with other components")]
    ExclusiveKeyword(String),

    #[error("'snippet' requires 'location'")]
    SnippetWithoutLocation,
}

/// Which debug annotations to include when rendering text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct DebugInfoSelection {
    pub(crate) location: bool,
    pub(crate) snippet: bool,
    pub(crate) ast_id: bool,
    pub(crate) use_src: bool,
}

const COMPONENTS: [&str; 4] = ["location", "snippet", "ast-id", "use-src"];

impl Default for DebugInfoSelection {
    fn default() -> Self {
        Self {
            location: true,
            snippet: true,
            ast_id: false,
            use_src: true,
        }
    }
}

impl DebugInfoSelection {
    pub const ALL: Self = Self {
        location: true,
        snippet: true,
        ast_id: true,
        use_src: true,
    };

    pub const NONE: Self = Self {
        location: false,
        snippet: false,
        ast_id: false,
        use_src: false,
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Only `@src` comments, no snippets or pragmas.
    pub fn only_location() -> Self {
        Self {
            location: true,
            ..Self::NONE
        }
    }

    pub fn location(mut self, value: bool) -> Self {
        self.location = value;
        self
    }

    pub fn snippet(mut self, value: bool) -> Self {
        self.snippet = value;
        self
    }

    pub fn ast_id(mut self, value: bool) -> Self {
        self.ast_id = value;
        self
    }

    pub fn use_src(mut self, value: bool) -> Self {
        self.use_src = value;
        self
    }

    pub fn includes_location(&self) -> bool {
        self.location
    }

    /// Snippets are only meaningful next to a location.
    pub fn includes_snippet(&self) -> bool {
        self.location && self.snippet
    }

    pub fn includes_ast_id(&self) -> bool {
        self.ast_id
    }

    pub fn includes_use_src(&self) -> bool {
        self.use_src
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }

    fn flags(&self) -> [bool; 4] {
        [self.location, self.snippet, self.ast_id, self.use_src]
    }

    fn set(&mut self, component: &str) -> bool {
        match component {
            "location" => self.location = true,
            "snippet" => self.snippet = true,
            "ast-id" => self.ast_id = true,
            "use-src" => self.use_src = true,
            _ => return false,
        }
        true
    }

    fn validate(self) -> Result<Self, DebugInfoSelectionError> {
        if self.snippet && !self.location {
            return Err(DebugInfoSelectionError::SnippetWithoutLocation);
        }
        Ok(self)
    }
}

impl FromStr for DebugInfoSelection {
    type Err = DebugInfoSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        match components.as_slice() {
            [] => return Err(DebugInfoSelectionError::Empty),
            ["all"] => return Ok(Self::ALL),
            ["none"] => return Ok(Self::NONE),
            _ => {}
        }

        let mut selection = Self::NONE;
        for component in components {
            if matches!(component, "all" | "none") {
                return Err(DebugInfoSelectionError::ExclusiveKeyword(
                    component.to_string(),
                ));
            }
            if !selection.set(component) {
                return Err(DebugInfoSelectionError::UnknownComponent(
                    component.to_string(),
                ));
            }
        }
        selection.validate()
    }
}

impl fmt::Display for DebugInfoSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        if self.is_none() {
            return f.write_str("none");
        }

        let mut first = true;
        for (name, enabled) in COMPONENTS.iter().zip(self.flags()) {
            if !enabled {
                continue;
            }
            if !first {
                f.write_str(",")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

/// Settings-file form: either `"location,snippet"` or a table of booleans.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelection {
    List(String),
    Flags {
        #[serde(default)]
        location: bool,
        #[serde(default)]
        snippet: bool,
        #[serde(default, rename = "ast-id")]
        ast_id: bool,
        #[serde(default, rename = "use-src")]
        use_src: bool,
    },
}

impl TryFrom<RawSelection> for DebugInfoSelection {
    type Error = DebugInfoSelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        match raw {
            RawSelection::List(list) => list.parse(),
            RawSelection::Flags {
                location,
                snippet,
                ast_id,
                use_src,
            } => Self {
                location,
                snippet,
                ast_id,
                use_src,
            }
            .validate(),
        }
    }
}
