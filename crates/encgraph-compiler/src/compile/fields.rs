//! Record field flattening and duplicate-key resolution.
//!
//! Untagged embedded records promote their fields into the parent, one level
//! deeper. When several fields end up with the same key, the shallowest one
//! wins; ties are broken by a single tagged field, and otherwise every
//! contender is dropped.

use indexmap::IndexMap;

use crate::shape::{Field, Shape, field_offsets};

/// A field as seen from the record being lowered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FlatField<'s> {
    pub key: &'s str,
    pub tagged: bool,
    /// Promoted from an embedded record.
    pub anonymous: bool,
    pub depth: u32,
    /// Byte offset from the start of the outermost record.
    pub offset: u32,
    pub shape: &'s Shape,
}

/// Fields in declaration order, with embedded records expanded and `"-"`
/// fields removed.
pub(crate) fn flatten(fields: &[Field]) -> Vec<FlatField<'_>> {
    let mut out = Vec::new();
    collect(fields, 0, 0, &mut out);
    out
}

fn collect<'s>(fields: &'s [Field], base: u32, depth: u32, out: &mut Vec<FlatField<'s>>) {
    for (field, offset) in fields.iter().zip(field_offsets(fields)) {
        if field.is_skipped() {
            continue;
        }
        if field.embedded
            && !field.is_tagged()
            && let Shape::Struct { fields: inner } = &field.shape
        {
            collect(inner, base + offset, depth + 1, out);
            continue;
        }
        out.push(FlatField {
            key: field.key_name(),
            tagged: field.is_tagged(),
            anonymous: depth > 0,
            depth,
            offset: base + offset,
            shape: &field.shape,
        });
    }
}

/// `true` for every field that loses a key conflict.
pub(crate) fn conflict_losers(fields: &[FlatField<'_>]) -> Vec<bool> {
    let mut by_key: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (i, field) in fields.iter().enumerate() {
        by_key.entry(field.key).or_default().push(i);
    }

    let mut losers = vec![false; fields.len()];
    for contenders in by_key.values().filter(|c| c.len() > 1) {
        let winner = dominant(fields, contenders);
        for &i in contenders {
            losers[i] = Some(i) != winner;
        }
    }
    losers
}

fn dominant(fields: &[FlatField<'_>], contenders: &[usize]) -> Option<usize> {
    let depth = contenders.iter().map(|&i| fields[i].depth).min()?;
    let shallow: Vec<usize> = contenders
        .iter()
        .copied()
        .filter(|&i| fields[i].depth == depth)
        .collect();
    if let [only] = shallow[..] {
        return Some(only);
    }

    let tagged: Vec<usize> = shallow.into_iter().filter(|&i| fields[i].tagged).collect();
    match tagged[..] {
        [only] => Some(only),
        _ => None,
    }
}
