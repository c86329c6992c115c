//! Field-skip splicing.

use crate::graph::Graph;
use crate::node::NodeId;

/// Remove record field `cur` from the execution path after `prev`.
///
/// `prev.next_field` takes over `cur.next_field`, and the node on `prev`'s
/// fallthrough path that led into `cur` is redirected to where `cur`'s next
/// field starts (or to `cur`'s own successor when it has no next field).
/// Slot numbering is untouched.
///
/// # Panics
/// Panics if `cur` is not reachable from `prev` before the terminal.
pub fn splice_skip(graph: &mut Graph, prev: NodeId, cur: NodeId) {
    if prev == cur {
        panic!("splice_skip: cannot skip {cur} from itself");
    }

    let next_field = graph[cur].next_field;
    let target = next_field.unwrap_or_else(|| graph.ensure_fallthrough(cur));
    graph[prev].next_field = next_field;

    let mut code = prev;
    let mut budget = graph.len();
    loop {
        budget = graph.ensure_budget(budget, code);
        let next = graph.ensure_fallthrough(code);
        if next == cur {
            graph.set_fallthrough(code, target);
            return;
        }
        if graph[next].op.is_end() {
            panic!("splice_skip: {cur} is not on the field chain of {prev}");
        }
        code = next;
    }
}
