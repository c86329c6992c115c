#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Instruction graph for the encgraph value encoder.
//!
//! This crate contains:
//! - The IR unit (`Node`), its opcode families and slot types
//! - The node arena (`Graph`) and compiled graphs (`Code`)
//! - Graph transformations: copy, re-index, splice, sizing, verification
//! - Disassembly for diagnostics and golden tests
//! - The per-encode register file

mod dump;
mod graph;
mod invariants;
mod node;
mod opcode;
mod registers;
mod slot;
mod subroutine;
pub mod transform;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
pub(crate) mod test_utils;

pub use dump::{disassemble, dump};
pub use graph::{Code, Graph, Walk};
pub use node::{FieldKey, Node, NodeId};
pub use opcode::{CodeType, Opcode, Scalar};
pub use registers::{RegisterError, RegisterFile};
pub use slot::{Length, SLOT_SIZE, SlotOffset};
pub use subroutine::Subroutine;
pub use transform::{before_last, copy, register_file_size, reindex_down, splice_skip, verify};
