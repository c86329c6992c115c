//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::slot::SlotOffset;

impl Graph {
    pub(crate) fn ensure_node(&self, id: NodeId) -> &Node {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "Graph: node {id} out of bounds (arena has {} nodes)",
                self.len()
            )
        })
    }

    pub(crate) fn ensure_node_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.len();
        self.get_mut(id)
            .unwrap_or_else(|| panic!("Graph: node {id} out of bounds (arena has {len} nodes)"))
    }

    pub(crate) fn ensure_fallthrough(&self, id: NodeId) -> NodeId {
        self.fallthrough(id).unwrap_or_else(|| {
            panic!(
                "Graph: {} at {id} has no fallthrough successor (chain does not reach End)",
                self[id].op
            )
        })
    }

    pub(crate) fn ensure_budget(&self, budget: usize, id: NodeId) -> usize {
        budget.checked_sub(1).unwrap_or_else(|| {
            panic!("Graph: fallthrough cycle through {} at {id}", self[id].op)
        })
    }
}

impl Node {
    pub(crate) fn ensure_recursive_call(&self) {
        if !self.op.is_recursive_call() {
            panic!("Node: subroutine reference on non-recursive {}", self.op);
        }
    }
}

pub(crate) fn ensure_slot_above_zero(slot: SlotOffset, op: impl std::fmt::Display) -> SlotOffset {
    slot.prev().unwrap_or_else(|| {
        panic!("reindex_down: {op} already at slot 0 (no node was removed in front of it)")
    })
}
