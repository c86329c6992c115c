//! Chain measurements.

use crate::graph::Graph;
use crate::node::NodeId;

/// Number of register slots needed to execute the graph at `head`.
///
/// Tracks the highest slot index of every node on the fallthrough path and
/// stops after a sub-graph boundary (`InterfaceEnd`,
/// `StructFieldRecursiveEnd`). One slot is reserved for the terminal and one
/// converts the zero-based index into a count.
pub fn register_file_size(graph: &Graph, head: NodeId) -> usize {
    let mut max = 0;
    for id in graph.walk(head) {
        let node = &graph[id];
        if let Some(top) = node.slots().map(|s| s.index()).max() {
            max = max.max(top);
        }
        if node.op.closes_subgraph() {
            break;
        }
    }
    max as usize + 2
}

/// The node whose fallthrough successor is the terminal `End`.
///
/// Lowering uses it to splice a finished sub-graph into a longer chain.
///
/// # Panics
/// Panics if `head` is itself the terminal.
pub fn before_last(graph: &Graph, head: NodeId) -> NodeId {
    let mut last = None;
    for id in graph.walk(head) {
        last = Some(id);
    }
    last.unwrap_or_else(|| panic!("before_last: chain at {head} is only a terminal"))
}
