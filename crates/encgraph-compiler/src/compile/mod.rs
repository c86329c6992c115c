//! Shape lowering into instruction graphs.
//!
//! # Module Organization
//!
//! - `context`: compile counters (register slots, display indices) and views
//! - `constructors`: one function per instruction family, wiring slots
//! - `lower`: shape-directed construction of sub-graphs
//! - `fields`: embedded-field flattening and duplicate-key resolution
//! - `compiler`: entry points and the recursive subroutine worklist
//! - `subroutine_table`: compile-once handles shared across compilers

pub mod constructors;
mod compiler;
mod context;
mod error;
mod fields;
mod invariants;
mod lower;
mod subroutine_table;

#[cfg(test)]
mod lower_tests;

pub use compiler::{Compiler, CompilerBuilder};
pub use context::{CompileCtx, CompileState};
pub use error::CompileError;
pub use subroutine_table::SubroutineTable;
