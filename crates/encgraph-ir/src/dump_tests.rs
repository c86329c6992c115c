use encgraph_core::Colors;

use crate::test_utils::{int_array, int_record, int_slice};
use crate::{Graph, Node, Opcode, SlotOffset, dump};

#[test]
fn record_fields() {
    let (code, _) = int_record(&["a", "b"]);

    insta::assert_snapshot!(code.disassemble(), @r"
    [0]StructFieldHeadInt ([idx:0][key:a][offset:0][headIdx:0])
    [1]StructFieldInt ([idx:1][key:b][offset:8][headIdx:0])
    [2]StructEnd ([idx:2])
    ");
}

#[test]
fn slice_loop_printed_once() {
    let code = int_slice(0);

    insta::assert_snapshot!(code.disassemble(), @r"
    [0]SliceHead ([idx:0][headIdx:0][elemIdx:1][length:2])
    [1]-Int ([idx:3])
    [2]SliceElem ([idx:4][headIdx:0][elemIdx:1][length:2][size:8])
    [3]SliceEnd ([idx:5])
    ");
}

#[test]
fn array_length_is_a_count() {
    let code = int_array(2, 7);

    insta::assert_snapshot!(code.disassemble(), @r"
    [2]ArrayHead ([idx:2][headIdx:2][elemIdx:3][length:7])
    [3]-Int ([idx:4])
    [4]ArrayElem ([idx:5][headIdx:2][elemIdx:3][length:7][size:8])
    [5]ArrayEnd ([idx:6])
    ");
}

#[test]
fn disassembly_is_stable() {
    let code = int_slice(3);
    assert_eq!(code.disassemble(), code.disassemble());
}

#[test]
fn colored_dump_wraps_opcodes() {
    let (code, _) = int_record(&["a"]);
    let out = code.dump(Colors::ON);

    assert!(out.contains("\x1b[34mStructFieldHeadInt\x1b[0m"));
    assert!(out.contains("[key:\x1b[0m\x1b[32ma\x1b[0m\x1b[2m]"));
    assert_eq!(code.dump(Colors::OFF), code.disassemble());
}

#[test]
fn colored_dump_marks_control_transfers() {
    let mut g = Graph::new();
    let end = g.push(Node::at(Opcode::End, SlotOffset::from_index(1)));
    let head = g.push(Node::at(Opcode::InterfaceEnd, SlotOffset::ZERO).then(end));
    let out = dump(&g, head, Colors::ON);

    assert!(out.contains("\x1b[35mInterfaceEnd\x1b[0m"), "{out}");
    assert!(out.ends_with("\x1b[2m([idx:0])\x1b[0m"), "{out}");
    assert_eq!(code.dump(Colors::OFF), code.disassemble());
}
