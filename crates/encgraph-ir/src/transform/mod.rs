//! Graph transformations.
//!
//! All passes follow the fallthrough edge (`Graph::fallthrough`): a loop
//! closing element or map key resumes through `end`, everything else through
//! `next`. Misuse (splicing unrelated chains, re-indexing slot zero, a chain
//! without a terminal) panics rather than producing a corrupt graph.

mod copy;
mod length;
mod reindex;
mod splice;
mod verify;

#[cfg(test)]
mod splice_tests;

pub use copy::copy;
pub use length::{before_last, register_file_size};
pub use reindex::reindex_down;
pub use splice::splice_skip;
pub use verify::verify;
