//! Graph constructors.
//!
//! One function per instruction family. Each allocates the register slots its
//! family needs from the context and returns the new node; the caller calls
//! `CompileCtx::step` afterwards. Non-container constructors wire `next` to a
//! fresh `End`; container headers are left for lowering to link.

use std::sync::Arc;

use encgraph_ir::{FieldKey, Length, Node, NodeId, Opcode, SlotOffset, Subroutine};

use super::context::CompileCtx;

fn base(ctx: &CompileCtx<'_>, op: Opcode, idx: SlotOffset) -> Node {
    Node::at(op, idx)
        .display(ctx.display_idx())
        .indent(ctx.indent())
        .typ(ctx.typ())
}

/// Terminal at the current slot.
pub fn new_end(ctx: &mut CompileCtx<'_>) -> NodeId {
    let node = base(ctx, Opcode::End, ctx.current_offset());
    ctx.push(node)
}

pub fn new_op_with_next(ctx: &mut CompileCtx<'_>, op: Opcode, next: NodeId) -> NodeId {
    let node = base(ctx, op, ctx.current_offset()).then(next);
    ctx.push(node)
}

/// Single-slot instruction followed by a fresh terminal.
pub fn new_op(ctx: &mut CompileCtx<'_>, op: Opcode) -> NodeId {
    let end = new_end(ctx);
    new_op_with_next(ctx, op, end)
}

/// Record field emission. `head` is the record's first field, or `None` when
/// this node is the first.
pub fn struct_field(
    ctx: &mut CompileCtx<'_>,
    op: Opcode,
    key: FieldKey,
    offset: u32,
    head: Option<NodeId>,
) -> NodeId {
    let id = new_op(ctx, op);
    let head_idx = head
        .and_then(|h| ctx.graph()[h].head_idx)
        .unwrap_or(ctx.graph()[id].idx);

    let node = &mut ctx.graph_mut()[id];
    node.field = Some(key);
    node.offset = offset;
    node.head_idx = Some(head_idx);
    id
}

pub fn slice_header(ctx: &mut CompileCtx<'_>) -> NodeId {
    let idx = ctx.current_offset();
    ctx.advance();
    let elem = ctx.current_offset();
    ctx.advance();
    let length = ctx.current_offset();

    let node = base(ctx, Opcode::SliceHead, idx)
        .head(idx)
        .elem_slot(elem)
        .length(Length::Slot(length));
    ctx.push(node)
}

pub fn slice_elem(ctx: &mut CompileCtx<'_>, header: NodeId, size: u32) -> NodeId {
    element(ctx, Opcode::SliceElem, header, size)
}

pub fn array_header(ctx: &mut CompileCtx<'_>, len: u32) -> NodeId {
    let idx = ctx.current_offset();
    ctx.advance();
    let elem = ctx.current_offset();

    let node = base(ctx, Opcode::ArrayHead, idx)
        .head(idx)
        .elem_slot(elem)
        .length(Length::Count(len));
    ctx.push(node)
}

pub fn array_elem(ctx: &mut CompileCtx<'_>, header: NodeId, size: u32) -> NodeId {
    element(ctx, Opcode::ArrayElem, header, size)
}

fn element(ctx: &mut CompileCtx<'_>, op: Opcode, header: NodeId, size: u32) -> NodeId {
    let h = &ctx.graph()[header];
    let (head_idx, elem_idx, length) = (h.head_idx, h.elem_idx, h.length);

    let mut node = base(ctx, op, ctx.current_offset()).size(size);
    node.head_idx = head_idx;
    node.elem_idx = elem_idx;
    node.length = length;
    ctx.push(node)
}

/// Map header: value, element, length and iterator slots. `with_load` picks
/// `MapHeadLoad`, used when the map is read out of a record field.
pub fn map_header(ctx: &mut CompileCtx<'_>, with_load: bool) -> NodeId {
    let op = if with_load {
        Opcode::MapHeadLoad
    } else {
        Opcode::MapHead
    };
    let idx = ctx.current_offset();
    ctx.advance();
    let elem = ctx.current_offset();
    ctx.advance();
    let length = ctx.current_offset();
    ctx.advance();
    let iter = ctx.current_offset();

    let node = base(ctx, op, idx)
        .elem_slot(elem)
        .length(Length::Slot(length))
        .iter_slot(iter);
    ctx.push(node)
}

pub fn map_key(ctx: &mut CompileCtx<'_>, header: NodeId) -> NodeId {
    map_child(ctx, Opcode::MapKey, header)
}

pub fn map_value(ctx: &mut CompileCtx<'_>, header: NodeId) -> NodeId {
    map_child(ctx, Opcode::MapValue, header)
}

fn map_child(ctx: &mut CompileCtx<'_>, op: Opcode, header: NodeId) -> NodeId {
    let h = &ctx.graph()[header];
    let (elem_idx, length, map_iter) = (h.elem_idx, h.length, h.map_iter);

    let mut node = base(ctx, op, ctx.current_offset());
    node.elem_idx = elem_idx;
    node.length = length;
    node.map_iter = map_iter;
    ctx.push(node)
}

/// Map end: a position slot for sorted output, then its own value slot.
pub fn map_end(ctx: &mut CompileCtx<'_>, header: NodeId) -> NodeId {
    let length = ctx.graph()[header].length;
    let pos = ctx.current_offset();
    ctx.advance();
    let idx = ctx.current_offset();

    let end = new_end(ctx);
    let mut node = base(ctx, Opcode::MapEnd, idx).pos_slot(pos).then(end);
    node.length = length;
    ctx.push(node)
}

/// Polymorphic value, dispatched at encode time.
pub fn interface(ctx: &mut CompileCtx<'_>) -> NodeId {
    let id = new_op(ctx, Opcode::Interface);
    let root = ctx.root();
    ctx.graph_mut()[id].root = root;
    id
}

/// Call into a separately compiled subroutine.
pub fn recursive(ctx: &mut CompileCtx<'_>, jmp: &Arc<Subroutine>) -> NodeId {
    let end = new_end(ctx);
    let node = base(ctx, Opcode::StructFieldRecursive, ctx.current_offset())
        .subroutine(jmp)
        .then(end);
    ctx.push(node)
}
