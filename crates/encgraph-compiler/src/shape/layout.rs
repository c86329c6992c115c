//! Byte layout of shapes.
//!
//! Scalars and headers use 64-bit layouts: strings and interfaces are two
//! words, slices and byte strings three, maps and references one.

use super::{Field, Shape};

impl Shape {
    /// Size of a value in bytes, padded to its alignment.
    pub fn size(&self) -> u32 {
        match self {
            Shape::Bool => 1,
            Shape::Int | Shape::Uint | Shape::Float | Shape::Map { .. } | Shape::Ref { .. } => 8,
            Shape::String | Shape::Interface => 16,
            Shape::Bytes | Shape::Slice { .. } => 24,
            Shape::Array { len, elem } => len.saturating_mul(elem.size()),
            Shape::Struct { fields } => layout(fields).1,
        }
    }

    pub fn align(&self) -> u32 {
        match self {
            Shape::Bool => 1,
            Shape::Array { elem, .. } => elem.align(),
            Shape::Struct { fields } => fields.iter().map(|f| f.shape.align()).max().unwrap_or(1),
            _ => 8,
        }
    }
}

/// Byte offset of each field inside its record.
pub fn field_offsets(fields: &[Field]) -> Vec<u32> {
    layout(fields).0
}

fn layout(fields: &[Field]) -> (Vec<u32>, u32) {
    let mut offsets = Vec::with_capacity(fields.len());
    let mut offset = 0u32;
    let mut align = 1;

    for field in fields {
        let field_align = field.shape.align();
        align = align.max(field_align);
        offset = align_up(offset, field_align);
        offsets.push(offset);
        offset = offset.saturating_add(field.shape.size());
    }

    (offsets, align_up(offset, align))
}

fn align_up(offset: u32, align: u32) -> u32 {
    offset.div_ceil(align).saturating_mul(align)
}
