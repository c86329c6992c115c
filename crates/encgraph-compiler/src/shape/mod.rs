//! Explicit value shapes.
//!
//! A `Schema` names shapes so they can refer to each other, and to
//! themselves, through `Shape::Ref`. Schemas are plain serde data, usually
//! loaded from JSON:
//!
//! ```json
//! { "definitions": { "Point": { "kind": "struct", "fields": [
//!     { "name": "x", "shape": { "kind": "int" } },
//!     { "name": "y", "shape": { "kind": "int" } } ] } } }
//! ```

mod key;
mod layout;


use std::fmt;

use encgraph_ir::Scalar;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use key::field_key;
pub use layout::field_offsets;

/// Layout of a value the encoder can walk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Int,
    Uint,
    Float,
    Bool,
    String,
    Bytes,
    /// Variable-length sequence.
    Slice { elem: Box<Shape> },
    /// Fixed-length sequence.
    Array { len: u32, elem: Box<Shape> },
    Map { key: Box<Shape>, value: Box<Shape> },
    /// Value whose concrete shape is only known at encode time.
    Interface,
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    /// Pointer-sized reference to a named definition.
    Ref { name: String },
}

impl Shape {
    pub fn slice(elem: Shape) -> Self {
        Shape::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u32, elem: Shape) -> Self {
        Shape::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Shape, value: Shape) -> Self {
        Shape::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn record(fields: Vec<Field>) -> Self {
        Shape::Struct { fields }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Shape::Ref { name: name.into() }
    }

    /// The scalar kind, for shapes that encode in a single instruction.
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Shape::Int => Some(Scalar::Int),
            Shape::Uint => Some(Scalar::Uint),
            Shape::Float => Some(Scalar::Float),
            Shape::Bool => Some(Scalar::Bool),
            Shape::String => Some(Scalar::String),
            Shape::Bytes => Some(Scalar::Bytes),
            _ => None,
        }
    }
}

/// Type names, used to register `TypeId`s.
impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Int => f.write_str("int"),
            Shape::Uint => f.write_str("uint"),
            Shape::Float => f.write_str("float"),
            Shape::Bool => f.write_str("bool"),
            Shape::String => f.write_str("string"),
            Shape::Bytes => f.write_str("bytes"),
            Shape::Slice { elem } => write!(f, "[]{elem}"),
            Shape::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Shape::Map { key, value } => write!(f, "map[{key}]{value}"),
            Shape::Interface => f.write_str("interface{}"),
            Shape::Struct { fields } => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.shape)?;
                }
                f.write_str("}")
            }
            Shape::Ref { name } => f.write_str(name),
        }
    }
}

/// One record field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Output key override. `"-"` omits the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Untagged embedded records have their fields promoted into the parent.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub embedded: bool,
    pub shape: Shape,
}

impl Field {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            tag: None,
            embedded: false,
            shape,
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn is_skipped(&self) -> bool {
        self.tag.as_deref() == Some("-")
    }

    /// Tagged key if one is given, the field name otherwise.
    pub fn key_name(&self) -> &str {
        match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => tag,
            _ => &self.name,
        }
    }

    pub fn is_tagged(&self) -> bool {
        self.tag.as_deref().is_some_and(|tag| !tag.is_empty())
    }
}

/// Named shapes, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub definitions: IndexMap<String, Shape>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.definitions.insert(name.into(), shape);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Shape> {
        self.definitions.get(name)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
