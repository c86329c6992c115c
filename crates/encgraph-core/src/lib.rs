#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core handles shared by the encgraph crates.
//!
//! - `TypeId` / `TypeTable`: opaque type handles carried by instruction nodes
//! - `Colors`: ANSI palette for disassembly output

mod colors;
mod types;


pub use colors::Colors;
pub use types::{TypeId, TypeTable};
