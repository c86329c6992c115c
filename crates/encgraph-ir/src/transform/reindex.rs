//! Re-index after removing the front node of a chain.

use crate::graph::Graph;
use crate::invariants::ensure_slot_above_zero;
use crate::node::NodeId;
use crate::slot::{Length, SlotOffset};

/// Shift every slot on the fallthrough path from `head` down by one.
///
/// Only legal right after one register-consuming node was removed from in
/// front of `head`. The value slot and display index must be nonzero; other
/// slots are shifted when nonzero. Fixed array counts are not registers and
/// stay unchanged.
pub fn reindex_down(graph: &mut Graph, head: NodeId) {
    let path: Vec<NodeId> = graph.walk(head).collect();

    for id in path {
        let node = &mut graph[id];
        let op = node.op;

        node.display_idx = node
            .display_idx
            .checked_sub(1)
            .unwrap_or_else(|| panic!("reindex_down: {op} already at display index 0"));
        node.idx = ensure_slot_above_zero(node.idx, op);

        for slot in [
            &mut node.head_idx,
            &mut node.elem_idx,
            &mut node.map_iter,
            &mut node.map_pos,
        ] {
            *slot = slot.map(shift_nonzero);
        }
        if let Some(Length::Slot(offset)) = node.length {
            node.length = Some(Length::Slot(shift_nonzero(offset)));
        }
    }
}

fn shift_nonzero(slot: SlotOffset) -> SlotOffset {
    slot.prev().unwrap_or(slot)
}
