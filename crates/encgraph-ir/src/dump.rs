//! Human-readable disassembly.
//!
//! One line per instruction along the fallthrough path:
//! `[display]` + one `-` per nesting level + opcode + slot list. Slots are
//! printed as slot counts, not byte offsets. Output is deterministic and is
//! used for golden tests.

use encgraph_core::Colors;

use crate::graph::Graph;
use crate::node::{Node, NodeId};
use crate::opcode::CodeType;
use crate::slot::SlotOffset;

/// Plain disassembly of the graph at `head`.
pub fn disassemble(graph: &Graph, head: NodeId) -> String {
    dump(graph, head, Colors::OFF)
}

/// Disassembly with the given palette.
pub fn dump(graph: &Graph, head: NodeId, colors: Colors) -> String {
    graph
        .walk(head)
        .map(|id| format_line(&graph[id], &colors))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_line(node: &Node, c: &Colors) -> String {
    let op_style = if node.op.transfers_control() { c.call } else { c.opcode };
    format!(
        "[{}]{}{} {}",
        node.display_idx,
        c.paint(c.slots, &"-".repeat(node.indent as usize)),
        c.paint(op_style, &node.op.to_string()),
        c.paint(c.slots, &format!("({})", format_slots(node, c))),
    )
}

fn format_slots(node: &Node, c: &Colors) -> String {
    let idx = node.idx.index();
    let head = count(node.head_idx);
    let elem = count(node.elem_idx);
    let length = node.length.map_or(0, |l| l.display_value());
    let iter = count(node.map_iter);

    match node.op.code_type() {
        CodeType::SliceHead | CodeType::ArrayHead => {
            format!("[idx:{idx}][headIdx:{head}][elemIdx:{elem}][length:{length}]")
        }
        CodeType::MapHead => format!(
            "[idx:{idx}][headIdx:{head}][elemIdx:{elem}][length:{length}][mapIter:{iter}]"
        ),
        CodeType::SliceElem | CodeType::ArrayElem => format!(
            "[idx:{idx}][headIdx:{head}][elemIdx:{elem}][length:{length}][size:{}]",
            node.size
        ),
        CodeType::MapKey => {
            format!("[idx:{idx}][elemIdx:{elem}][length:{length}][mapIter:{iter}]")
        }
        CodeType::MapValue => format!("[idx:{idx}][mapIter:{iter}]"),
        CodeType::MapEnd => format!(
            "[idx:{idx}][mapPos:{}][length:{length}]",
            count(node.map_pos)
        ),
        CodeType::StructField => format!(
            "[idx:{idx}][key:{}{}{}][offset:{}][headIdx:{head}]",
            c.reset,
            c.paint(c.key, node.field.as_ref().map_or("", |f| f.display_key.as_str())),
            c.slots,
            node.offset
        ),
        CodeType::Op | CodeType::StructEnd => format!("[idx:{idx}]"),
    }
}

fn count(slot: Option<SlotOffset>) -> u32 {
    slot.map_or(0, SlotOffset::index)
}
