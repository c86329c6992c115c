//! encgraph compiler: lowers value shapes into instruction graphs.
//!
//! This crate provides:
//! - `shape` - explicit, serde-loadable descriptions of value layouts
//! - `compile` - the compile context, graph constructors, shape lowering
//!   and the shared table of recursive subroutines

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod shape;

#[cfg(test)]
pub mod test_utils;

pub use compile::{
    CompileCtx, CompileError, CompileState, Compiler, CompilerBuilder, SubroutineTable,
};
pub use shape::{Field, Schema, Shape};
