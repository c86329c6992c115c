//! Sharing-preserving deep copy.

use std::collections::HashMap;

use crate::graph::{Code, Graph};
use crate::node::NodeId;

/// Copy everything reachable from `head` into a fresh arena.
///
/// Converging paths stay converged: each original node is copied once,
/// memoized by its `NodeId`. Subroutine references are shared, not copied.
pub fn copy(graph: &Graph, head: NodeId) -> Code {
    let mut out = Graph::new();
    let mut copies: HashMap<NodeId, NodeId> = HashMap::new();
    let mut pending = vec![head];

    copies.insert(head, out.push(graph[head].detached()));

    while let Some(original) = pending.pop() {
        let mut links = [None; 6];
        for (slot, link) in graph[original].links().into_iter().enumerate() {
            let Some(target) = link else {
                continue;
            };
            let copied = *copies.entry(target).or_insert_with(|| {
                pending.push(target);
                out.push(graph[target].detached())
            });
            links[slot] = Some(copied);
        }
        out[copies[&original]].set_links(links);
    }

    Code::new(out, copies[&head])
}
