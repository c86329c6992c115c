//! Structural verification.
//!
//! Checks the invariants every constructor promises. Lowering runs it on the
//! finished graph in debug builds; tests run it everywhere.

use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::opcode::CodeType;

/// Assert the structural invariants of the graph reachable from `head`.
///
/// # Panics
/// Panics with a description of the first violated invariant.
pub fn verify(graph: &Graph, head: NodeId) {
    for id in graph.reachable(head) {
        let node = &graph[id];

        if node.op.is_end() && node.next.is_some() {
            panic!("verify: terminal at {id} has a successor");
        }
        if node.op.is_recursive_call() != node.has_subroutine() {
            panic!(
                "verify: {} at {id} {} a subroutine reference",
                node.op,
                if node.has_subroutine() { "carries" } else { "lacks" }
            );
        }
        if !node.op.is_end() && graph.fallthrough(id).is_none() {
            panic!("verify: {} at {id} has no fallthrough successor", node.op);
        }

        match node.op.code_type() {
            CodeType::SliceHead | CodeType::ArrayHead => {
                if let Some(elem) = node.elem {
                    ensure_mirrors(node, &graph[elem], id, true);
                }
            }
            CodeType::MapHead => {
                for child in [node.map_key, node.map_value].into_iter().flatten() {
                    ensure_mirrors(node, &graph[child], id, false);
                    if graph[child].map_iter != node.map_iter {
                        panic!("verify: map child {child} does not mirror iterator of {id}");
                    }
                }
            }
            _ => {}
        }
    }

    // Drives the walk to the terminal; panics on dangling or cyclic paths.
    graph.walk(head).for_each(drop);
}

fn ensure_mirrors(header: &Node, child: &Node, id: NodeId, with_head: bool) {
    let head_ok = !with_head || child.head_idx == header.head_idx;
    if !head_ok || child.elem_idx != header.elem_idx || child.length != header.length {
        panic!(
            "verify: {} does not mirror the container slots of {} at {id}",
            child.op, header.op
        );
    }
}
