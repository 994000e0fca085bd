//! Tree node kinds: named data blobs and nested objects.

use std::fmt;

use yul_object_core::utils::escape_and_quote;

use crate::object::Object;

/// Named, immutable byte payload inside an object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Data {
    name: String,
    data: Vec<u8>,
}

impl Data {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "data {} hex\"{}\"",
            escape_and_quote(&self.name),
            hex::encode(&self.data)
        )
    }
}

/// A child of an object.
#[derive(Clone, Debug)]
pub enum ObjectNode {
    Data(Data),
    Object(Object),
}

impl ObjectNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Data(data) => data.name(),
            Self::Object(object) => object.name(),
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            Self::Data(_) => None,
        }
    }

    pub fn as_data(&self) -> Option<&Data> {
        match self {
            Self::Data(data) => Some(data),
            Self::Object(_) => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }
}

impl From<Data> for ObjectNode {
    fn from(data: Data) -> Self {
        Self::Data(data)
    }
}

impl From<Object> for ObjectNode {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl fmt::Display for ObjectNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(data) => fmt::Display::fmt(data, f),
            Self::Object(object) => fmt::Display::fmt(object, f),
        }
    }
}
