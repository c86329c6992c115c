//! The IR unit.

use std::sync::{Arc, Weak};

use encgraph_core::TypeId;

use crate::opcode::Opcode;
use crate::slot::{Length, SlotOffset};
use crate::subroutine::Subroutine;

/// Index of a node in its `Graph` arena.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key metadata carried by record field instructions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldKey {
    /// Quoted key plus separator, ready to copy into the output.
    pub key: Vec<u8>,
    /// `key` with HTML-sensitive bytes escaped.
    pub escaped_key: Vec<u8>,
    /// Key text for disassembly.
    pub display_key: String,
    /// Key came from an explicit tag rather than the field name.
    pub is_tagged: bool,
    /// Field was promoted from an embedded record.
    pub anonymous: bool,
}

impl FieldKey {
    pub fn new(display_key: impl Into<String>, key: Vec<u8>, escaped_key: Vec<u8>) -> Self {
        Self {
            key,
            escaped_key,
            display_key: display_key.into(),
            is_tagged: false,
            anonymous: false,
        }
    }

    pub fn tagged(mut self, is_tagged: bool) -> Self {
        self.is_tagged = is_tagged;
        self
    }

    pub fn anonymous(mut self, anonymous: bool) -> Self {
        self.anonymous = anonymous;
        self
    }
}

/// One instruction of the graph.
///
/// Slots other than `idx` are optional; which ones a node carries depends on
/// its opcode family. Links point into the same arena.
#[derive(Clone, Debug)]
pub struct Node {
    pub op: Opcode,
    pub typ: Option<TypeId>,
    pub display_idx: u32,
    pub field: Option<FieldKey>,
    pub root: bool,
    pub indent: u32,

    pub idx: SlotOffset,
    pub head_idx: Option<SlotOffset>,
    pub elem_idx: Option<SlotOffset>,
    pub length: Option<Length>,
    pub map_iter: Option<SlotOffset>,
    pub map_pos: Option<SlotOffset>,
    /// Byte offset of a field inside its record.
    pub offset: u32,
    /// Byte size of one sequence element.
    pub size: u32,

    pub map_key: Option<NodeId>,
    pub map_value: Option<NodeId>,
    pub elem: Option<NodeId>,
    pub end: Option<NodeId>,
    pub next_field: Option<NodeId>,
    pub next: Option<NodeId>,

    jmp: Option<Weak<Subroutine>>,
}

impl Node {
    /// Instruction `op` reading its value from slot `idx`.
    pub fn at(op: Opcode, idx: SlotOffset) -> Self {
        Self {
            op,
            typ: None,
            display_idx: 0,
            field: None,
            root: false,
            indent: 0,
            idx,
            head_idx: None,
            elem_idx: None,
            length: None,
            map_iter: None,
            map_pos: None,
            offset: 0,
            size: 0,
            map_key: None,
            map_value: None,
            elem: None,
            end: None,
            next_field: None,
            next: None,
            jmp: None,
        }
    }

    pub fn display(mut self, display_idx: u32) -> Self {
        self.display_idx = display_idx;
        self
    }

    pub fn indent(mut self, indent: u32) -> Self {
        self.indent = indent;
        self
    }

    pub fn typ(mut self, typ: Option<TypeId>) -> Self {
        self.typ = typ;
        self
    }

    pub fn root(mut self, root: bool) -> Self {
        self.root = root;
        self
    }

    pub fn field(mut self, key: FieldKey) -> Self {
        self.field = Some(key);
        self
    }

    pub fn head(mut self, head_idx: SlotOffset) -> Self {
        self.head_idx = Some(head_idx);
        self
    }

    pub fn elem_slot(mut self, elem_idx: SlotOffset) -> Self {
        self.elem_idx = Some(elem_idx);
        self
    }

    pub fn length(mut self, length: Length) -> Self {
        self.length = Some(length);
        self
    }

    pub fn iter_slot(mut self, map_iter: SlotOffset) -> Self {
        self.map_iter = Some(map_iter);
        self
    }

    pub fn pos_slot(mut self, map_pos: SlotOffset) -> Self {
        self.map_pos = Some(map_pos);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the fallthrough successor.
    pub fn then(mut self, next: NodeId) -> Self {
        self.next = Some(next);
        self
    }

    /// Attach the subroutine of a recursive call.
    ///
    /// The node holds a weak reference: a body that calls itself must not own
    /// itself. Whoever runs the graph keeps the `Arc` alive, see
    /// `Code::subroutines`.
    ///
    /// # Panics
    /// Panics unless the opcode is `StructFieldRecursive`.
    pub fn subroutine(mut self, jmp: &Arc<Subroutine>) -> Self {
        self.ensure_recursive_call();
        self.jmp = Some(Arc::downgrade(jmp));
        self
    }

    /// Target of a recursive call, while some owner still holds it.
    pub fn jmp(&self) -> Option<Arc<Subroutine>> {
        self.jmp.as_ref().and_then(Weak::upgrade)
    }

    pub fn has_subroutine(&self) -> bool {
        self.jmp.is_some()
    }

    /// The six outgoing links, in a fixed order.
    pub(crate) fn links(&self) -> [Option<NodeId>; 6] {
        [
            self.map_key,
            self.map_value,
            self.elem,
            self.end,
            self.next_field,
            self.next,
        ]
    }

    pub(crate) fn set_links(&mut self, links: [Option<NodeId>; 6]) {
        let [map_key, map_value, elem, end, next_field, next] = links;
        self.map_key = map_key;
        self.map_value = map_value;
        self.elem = elem;
        self.end = end;
        self.next_field = next_field;
        self.next = next;
    }

    /// Copy of this node with every link cleared. The subroutine stays shared.
    pub(crate) fn detached(&self) -> Self {
        let mut node = self.clone();
        node.set_links([None; 6]);
        node
    }

    /// Populated register slots: value, container bookkeeping, register lengths.
    pub fn slots(&self) -> impl Iterator<Item = SlotOffset> + '_ {
        std::iter::once(self.idx)
            .chain(self.head_idx)
            .chain(self.elem_idx)
            .chain(self.length.and_then(Length::slot))
            .chain(self.map_iter)
            .chain(self.map_pos)
    }
}
