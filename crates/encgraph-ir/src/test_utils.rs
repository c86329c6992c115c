//! Hand-built graphs for unit tests.

use crate::{Code, FieldKey, Graph, Length, Node, NodeId, Opcode, SLOT_SIZE, Scalar, SlotOffset};

fn slot(i: u32) -> SlotOffset {
    SlotOffset::from_index(i)
}

pub fn key(name: &str) -> FieldKey {
    let quoted = format!("\"{name}\":").into_bytes();
    FieldKey::new(name, quoted.clone(), quoted)
}

/// Record of int fields: `Head(a) -> Field(b) -> ... -> StructEnd -> End`.
///
/// Field `i` lives in slot `i`; `StructEnd` takes the next slot.
pub fn int_record(names: &[&str]) -> (Code, Vec<NodeId>) {
    let mut g = Graph::new();
    let count = names.len() as u32;

    let end = g.push(Node::at(Opcode::End, slot(count + 1)).display(count + 1));
    let struct_end = g.push(
        Node::at(Opcode::StructEnd, slot(count))
            .display(count)
            .then(end),
    );

    let mut fields = Vec::new();
    let mut successor = struct_end;
    for (i, name) in names.iter().enumerate().rev() {
        let op = if i == 0 {
            Opcode::StructFieldHead(Some(Scalar::Int))
        } else {
            Opcode::StructField(Some(Scalar::Int))
        };
        let mut node = Node::at(op, slot(i as u32))
            .display(i as u32)
            .head(slot(0))
            .offset(i as u32 * SLOT_SIZE)
            .field(key(name))
            .then(successor);
        node.next_field = Some(successor);
        successor = g.push(node);
        fields.push(successor);
    }
    fields.reverse();

    (Code::new(g, fields[0]), fields)
}

/// `SliceHead -> Int -> SliceElem -> SliceEnd -> End`, starting at `base`.
pub fn int_slice(base: u32) -> Code {
    let mut g = Graph::new();
    let b = base;

    let end = g.push(Node::at(Opcode::End, slot(b + 6)).display(b + 4));
    let slice_end = g.push(Node::at(Opcode::SliceEnd, slot(b + 5)).display(b + 3).then(end));
    let header = g.push(
        Node::at(Opcode::SliceHead, slot(b))
            .display(b)
            .head(slot(b))
            .elem_slot(slot(b + 1))
            .length(Length::Slot(slot(b + 2))),
    );
    let value = g.push(
        Node::at(Opcode::Scalar(Scalar::Int), slot(b + 3))
            .display(b + 1)
            .indent(1),
    );
    let mut elem = Node::at(Opcode::SliceElem, slot(b + 4))
        .display(b + 2)
        .head(slot(b))
        .elem_slot(slot(b + 1))
        .length(Length::Slot(slot(b + 2)))
        .size(SLOT_SIZE)
        .then(value);
    elem.end = Some(slice_end);
    let elem = g.push(elem);

    g[value].next = Some(elem);
    g[header].next = Some(value);
    g[header].elem = Some(elem);
    g[header].end = Some(slice_end);

    Code::new(g, header)
}

/// `ArrayHead -> Int -> ArrayElem -> ArrayEnd -> End` with `len` elements.
pub fn int_array(base: u32, len: u32) -> Code {
    let mut g = Graph::new();
    let b = base;

    let end = g.push(Node::at(Opcode::End, slot(b + 5)).display(b + 4));
    let array_end = g.push(Node::at(Opcode::ArrayEnd, slot(b + 4)).display(b + 3).then(end));
    let header = g.push(
        Node::at(Opcode::ArrayHead, slot(b))
            .display(b)
            .head(slot(b))
            .elem_slot(slot(b + 1))
            .length(Length::Count(len)),
    );
    let value = g.push(
        Node::at(Opcode::Scalar(Scalar::Int), slot(b + 2))
            .display(b + 1)
            .indent(1),
    );
    let mut elem = Node::at(Opcode::ArrayElem, slot(b + 3))
        .display(b + 2)
        .head(slot(b))
        .elem_slot(slot(b + 1))
        .length(Length::Count(len))
        .size(SLOT_SIZE)
        .then(value);
    elem.end = Some(array_end);
    let elem = g.push(elem);

    g[value].next = Some(elem);
    g[header].next = Some(value);
    g[header].elem = Some(elem);
    g[header].end = Some(array_end);

    Code::new(g, header)
}

/// Map of int keys to bool values, laid out the way lowering emits it:
/// `MapHead -> Int -> MapValue -> Bool -> MapKey -> MapEnd -> End`, with
/// `MapKey` looping back to the key code.
pub fn int_map(base: u32) -> Code {
    let mut g = Graph::new();
    let b = base;
    let length = Length::Slot(slot(b + 2));

    let end = g.push(Node::at(Opcode::End, slot(b + 10)).display(b + 6));
    let map_end = g.push(
        Node::at(Opcode::MapEnd, slot(b + 9))
            .display(b + 5)
            .pos_slot(slot(b + 8))
            .length(length)
            .then(end),
    );
    let header = g.push(
        Node::at(Opcode::MapHead, slot(b))
            .display(b)
            .elem_slot(slot(b + 1))
            .length(length)
            .iter_slot(slot(b + 3)),
    );
    let key_code = g.push(
        Node::at(Opcode::Scalar(Scalar::Int), slot(b + 4))
            .display(b + 1)
            .indent(1),
    );
    let value = g.push(map_child(Opcode::MapValue, b, b + 5, b + 2));
    let value_code = g.push(
        Node::at(Opcode::Scalar(Scalar::Bool), slot(b + 6))
            .display(b + 3)
            .indent(1),
    );
    let key = g.push(map_child(Opcode::MapKey, b, b + 7, b + 4));

    g[header].next = Some(key_code);
    g[header].map_key = Some(key);
    g[header].map_value = Some(value);
    g[header].end = Some(map_end);
    g[key_code].next = Some(value);
    g[value].next = Some(value_code);
    g[value].end = Some(map_end);
    g[value_code].next = Some(key);
    g[key].next = Some(key_code);
    g[key].end = Some(map_end);

    Code::new(g, header)
}

fn map_child(op: Opcode, base: u32, idx: u32, display: u32) -> Node {
    Node::at(op, slot(idx))
        .display(display)
        .elem_slot(slot(base + 1))
        .length(Length::Slot(slot(base + 2)))
        .iter_slot(slot(base + 3))
}
