//! Node arena and compiled graphs.

use std::ops::{Index, IndexMut};
use std::sync::Arc;

use encgraph_core::Colors;

use crate::dump;
use crate::node::{Node, NodeId};
use crate::subroutine::Subroutine;
use crate::transform;

/// Arena of instruction nodes addressed by `NodeId`.
///
/// Constructors leave unreachable terminals behind when chains are relinked;
/// `transform::copy` produces a compact arena holding only reachable nodes.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.as_usize())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.as_usize())
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Successor used to resume after `id`: `end` for loop-closing kinds,
    /// `next` for every other kind.
    #[inline]
    pub fn fallthrough(&self, id: NodeId) -> Option<NodeId> {
        let node = &self[id];
        if node.op.falls_through_end() {
            node.end
        } else {
            node.next
        }
    }

    /// Rewrite the fallthrough successor of `id`.
    pub fn set_fallthrough(&mut self, id: NodeId, target: NodeId) {
        let node = &mut self[id];
        if node.op.falls_through_end() {
            node.end = Some(target);
        } else {
            node.next = Some(target);
        }
    }

    /// Nodes on the fallthrough path from `head`, stopping before `End`.
    pub fn walk(&self, head: NodeId) -> Walk<'_> {
        Walk {
            graph: self,
            current: Some(head),
            budget: self.nodes.len(),
        }
    }

    /// Every node reachable from `head` through any link, in discovery order.
    pub fn reachable(&self, head: NodeId) -> Vec<NodeId> {
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut stack = vec![head];

        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut seen[id.as_usize()], true) {
                continue;
            }
            order.push(id);
            // Reversed so map_key is explored first and next last.
            stack.extend(self[id].links().into_iter().rev().flatten());
        }

        order
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        self.ensure_node(id)
    }
}

impl IndexMut<NodeId> for Graph {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        self.ensure_node_mut(id)
    }
}

/// Iterator over a fallthrough path.
///
/// # Panics
/// Panics if a non-terminal node has no successor, or if the path is longer
/// than the arena (a fallthrough cycle).
pub struct Walk<'a> {
    graph: &'a Graph,
    current: Option<NodeId>,
    budget: usize,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        if self.graph[id].op.is_end() {
            self.current = None;
            return None;
        }
        self.budget = self.graph.ensure_budget(self.budget, id);
        self.current = Some(self.graph.ensure_fallthrough(id));
        Some(id)
    }
}

/// A finished instruction graph: an arena plus its entry node.
///
/// Recursive calls only hold weak handles, so a top-level `Code` also owns
/// every subroutine it can reach. Subroutine bodies own none; their owner is
/// the top-level code or the compiler's table.
#[derive(Clone, Debug)]
pub struct Code {
    graph: Graph,
    head: NodeId,
    subroutines: Vec<Arc<Subroutine>>,
}

impl Code {
    pub fn new(graph: Graph, head: NodeId) -> Self {
        Self {
            graph,
            head,
            subroutines: Vec::new(),
        }
    }

    /// Take ownership of `subroutines` for as long as this code lives.
    pub fn with_subroutines(mut self, subroutines: Vec<Arc<Subroutine>>) -> Self {
        self.subroutines = subroutines;
        self
    }

    /// Subroutines kept alive by this code.
    pub fn subroutines(&self) -> &[Arc<Subroutine>] {
        &self.subroutines
    }

    /// Every subroutine called from this code, directly or through the bodies
    /// of other subroutines, in first-call order.
    pub fn reachable_subroutines(&self) -> Vec<Arc<Subroutine>> {
        let mut found = Vec::new();
        collect_calls(&self.graph, self.head, &mut found);

        let mut next = 0;
        while next < found.len() {
            let sub = Arc::clone(&found[next]);
            if let Some(body) = sub.code() {
                collect_calls(body.graph(), body.head(), &mut found);
            }
            next += 1;
        }
        found
    }

    #[inline]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn head_node(&self) -> &Node {
        &self.graph[self.head]
    }

    /// Replace the entry node, e.g. after dropping the old head.
    pub fn set_head(&mut self, head: NodeId) {
        self.head = head;
    }

    pub fn into_parts(self) -> (Graph, NodeId) {
        (self.graph, self.head)
    }

    /// Independent copy with a compact arena.
    pub fn copy(&self) -> Code {
        transform::copy(&self.graph, self.head).with_subroutines(self.subroutines.clone())
    }

    pub fn register_file_size(&self) -> usize {
        transform::register_file_size(&self.graph, self.head)
    }

    pub fn reindex_down(&mut self) {
        transform::reindex_down(&mut self.graph, self.head);
    }

    pub fn verify(&self) {
        transform::verify(&self.graph, self.head);
    }

    pub fn disassemble(&self) -> String {
        dump::disassemble(&self.graph, self.head)
    }

    pub fn dump(&self, colors: Colors) -> String {
        dump::dump(&self.graph, self.head, colors)
    }
}

fn collect_calls(graph: &Graph, head: NodeId, found: &mut Vec<Arc<Subroutine>>) {
    for id in graph.reachable(head) {
        if let Some(sub) = graph[id].jmp()
            && !found.iter().any(|s| Arc::ptr_eq(s, &sub))
        {
            found.push(sub);
        }
    }
}
