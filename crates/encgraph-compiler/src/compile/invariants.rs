//! Compiler invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

pub(super) fn ensure_indent(indent: u32, delta: i32) -> u32 {
    indent
        .checked_add_signed(delta)
        .unwrap_or_else(|| panic!("CompileCtx: depth {indent} + {delta} is negative"))
}
