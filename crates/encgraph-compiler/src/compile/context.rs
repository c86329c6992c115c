//! Compile counters and context views.

use encgraph_core::TypeId;
use encgraph_ir::{Graph, Node, NodeId, SlotOffset};

use super::invariants::ensure_indent;

/// Counters shared by every view of one top-level compile.
///
/// The register counter only moves forward, so each allocated slot is unique
/// within the compile.
#[derive(Debug, Default)]
pub struct CompileState {
    graph: Graph,
    ptr_index: u32,
    opcode_index: u32,
}

impl CompileState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Next free register slot, as a slot index.
    pub fn ptr_index(&self) -> u32 {
        self.ptr_index
    }

    pub fn opcode_index(&self) -> u32 {
        self.opcode_index
    }
}

/// A view of the compile state at one type, depth and root flag.
///
/// Views created with `view` or `nested` reborrow the same `CompileState`,
/// so allocations made through any of them are seen by all.
pub struct CompileCtx<'s> {
    state: &'s mut CompileState,
    typ: Option<TypeId>,
    indent: u32,
    root: bool,
}

impl<'s> CompileCtx<'s> {
    pub fn new(state: &'s mut CompileState) -> Self {
        Self {
            state,
            typ: None,
            indent: 0,
            root: false,
        }
    }

    pub fn typ(&self) -> Option<TypeId> {
        self.typ
    }

    pub fn indent(&self) -> u32 {
        self.indent
    }

    pub fn root(&self) -> bool {
        self.root
    }

    /// Next unused register slot.
    #[inline]
    pub fn current_offset(&self) -> SlotOffset {
        SlotOffset::from_index(self.state.ptr_index)
    }

    #[inline]
    pub fn display_idx(&self) -> u32 {
        self.state.opcode_index
    }

    /// Consume one register slot.
    #[inline]
    pub fn advance(&mut self) {
        self.state.ptr_index += 1;
    }

    #[inline]
    pub fn advance_display(&mut self) {
        self.state.opcode_index += 1;
    }

    /// Consume one slot and one display index, after emitting an instruction.
    #[inline]
    pub fn step(&mut self) {
        self.advance();
        self.advance_display();
    }

    /// Same settings, sharing the counters.
    pub fn view(&mut self) -> CompileCtx<'_> {
        CompileCtx {
            state: &mut *self.state,
            typ: self.typ,
            indent: self.indent,
            root: self.root,
        }
    }

    /// View at depth `indent + delta`. A nested value is never the root.
    ///
    /// # Panics
    /// Panics if the resulting depth is negative.
    pub fn nested(&mut self, delta: i32) -> CompileCtx<'_> {
        let indent = ensure_indent(self.indent, delta);
        CompileCtx {
            indent,
            root: false,
            ..self.view()
        }
    }

    pub fn with_type(self, typ: Option<TypeId>) -> Self {
        Self { typ, ..self }
    }

    pub fn with_root(self, root: bool) -> Self {
        Self { root, ..self }
    }

    pub fn graph(&self) -> &Graph {
        &self.state.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.state.graph
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        self.state.graph.push(node)
    }
}
