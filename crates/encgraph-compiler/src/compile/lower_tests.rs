use encgraph_ir::{Opcode, Scalar};

use crate::test_utils::{compile_root, disassemble, field, root_schema};
use crate::{CompileError, Compiler, Schema, Shape};

#[test]
fn record_with_sequence_field() {
    let shape = Shape::record(vec![
        field("a", Shape::Int),
        field("b", Shape::slice(Shape::Int)),
    ]);
    let code = compile_root(&root_schema(shape), "Root");

    insta::assert_snapshot!(code.disassemble(), @r"
    [0]StructFieldHeadInt ([idx:0][key:a][offset:0][headIdx:0])
    [1]StructField ([idx:1][key:b][offset:8][headIdx:0])
    [2]-SliceHead ([idx:2][headIdx:2][elemIdx:3][length:4])
    [3]--Int ([idx:5])
    [4]-SliceElem ([idx:6][headIdx:2][elemIdx:3][length:4][size:8])
    [5]-SliceEnd ([idx:7])
    [6]StructEnd ([idx:8])
    ");
    assert_eq!(code.register_file_size(), 10);
}

#[test]
fn fixed_array() {
    insta::assert_snapshot!(disassemble(Shape::array(3, Shape::Int)), @r"
    [0]ArrayHead ([idx:0][headIdx:0][elemIdx:1][length:3])
    [1]-Int ([idx:2])
    [2]ArrayElem ([idx:3][headIdx:0][elemIdx:1][length:3][size:8])
    [3]ArrayEnd ([idx:4])
    ");
}

#[test]
fn sequence_of_records() {
    let elem = Shape::record(vec![field("x", Shape::Int), field("y", Shape::String)]);

    insta::assert_snapshot!(disassemble(Shape::slice(elem)), @r"
    [0]SliceHead ([idx:0][headIdx:0][elemIdx:1][length:2])
    [1]-StructFieldHeadInt ([idx:3][key:x][offset:0][headIdx:3])
    [2]-StructFieldString ([idx:4][key:y][offset:8][headIdx:3])
    [3]-StructEnd ([idx:5])
    [4]SliceElem ([idx:6][headIdx:0][elemIdx:1][length:2][size:24])
    [5]SliceEnd ([idx:7])
    ");
}

#[test]
fn top_level_map() {
    let code = compile_root(&root_schema(Shape::map(Shape::Int, Shape::Bool)), "Root");

    insta::assert_snapshot!(code.disassemble(), @r"
    [0]MapHead ([idx:0][headIdx:0][elemIdx:1][length:2][mapIter:3])
    [1]-Int ([idx:4])
    [2]MapValue ([idx:5][mapIter:3])
    [3]-Bool ([idx:6])
    [4]MapKey ([idx:7][elemIdx:1][length:2][mapIter:3])
    [5]MapEnd ([idx:9][mapPos:8][length:2])
    ");
    assert_eq!(code.register_file_size(), 11);
}

#[test]
fn map_in_record_field_loads() {
    let shape = Shape::record(vec![field("m", Shape::map(Shape::String, Shape::Int))]);

    insta::assert_snapshot!(disassemble(shape), @r"
    [0]StructFieldHead ([idx:0][key:m][offset:0][headIdx:0])
    [1]-MapHeadLoad ([idx:1][headIdx:0][elemIdx:2][length:3][mapIter:4])
    [2]--String ([idx:5])
    [3]-MapValue ([idx:6][mapIter:4])
    [4]--Int ([idx:7])
    [5]-MapKey ([idx:8][elemIdx:2][length:3][mapIter:4])
    [6]-MapEnd ([idx:10][mapPos:9][length:3])
    [7]StructEnd ([idx:11])
    ");
}

#[test]
fn map_loop_closes_on_key_code() {
    let code = compile_root(&root_schema(Shape::map(Shape::String, Shape::Int)), "Root");
    let g = code.graph();
    let header = &g[code.head()];
    let key_code = header.next.unwrap();
    let key = header.map_key.unwrap();

    assert_eq!(g[key].next, Some(key_code));
    assert_eq!(g[key].end, header.end);
    assert_eq!(g[header.map_value.unwrap()].end, header.end);
}

#[test]
fn referenced_definition_is_inlined() {
    let schema = Schema::new()
        .define(
            "Point",
            Shape::record(vec![field("x", Shape::Int), field("y", Shape::Int)]),
        )
        .define("Root", Shape::record(vec![field("p", Shape::reference("Point"))]));
    let mut compiler = Compiler::new(&schema);
    let code = compiler.compile_root("Root").unwrap();

    insta::assert_snapshot!(code.disassemble(), @r"
    [0]StructFieldHead ([idx:0][key:p][offset:0][headIdx:0])
    [1]-StructFieldHeadInt ([idx:1][key:x][offset:0][headIdx:1])
    [2]-StructFieldInt ([idx:2][key:y][offset:8][headIdx:1])
    [3]-StructEnd ([idx:3])
    [4]StructEnd ([idx:4])
    ");
    assert!(compiler.subroutines().is_empty());

    let point = code.graph().walk(code.head()).nth(1).unwrap();
    let typ = code.graph()[point].typ.unwrap();
    assert_eq!(compiler.types().name(typ), "Point");
}

#[test]
fn nodes_carry_their_type() {
    let schema = root_schema(Shape::slice(Shape::Int));
    let mut compiler = Compiler::new(&schema);
    let code = compiler.compile_root("Root").unwrap();
    let g = code.graph();
    let value = g[code.head()].next.unwrap();

    assert_eq!(compiler.types().name(g[code.head()].typ.unwrap()), "Root");
    assert_eq!(compiler.types().name(g[value].typ.unwrap()), "int");
}

#[test]
fn empty_record_is_lone_struct_end() {
    insta::assert_snapshot!(disassemble(Shape::record(vec![])), @"[0]StructEnd ([idx:0])");
}

#[test]
fn top_level_interface_is_root() {
    let code = compile_root(&root_schema(Shape::Interface), "Root");

    insta::assert_snapshot!(code.disassemble(), @"[0]Interface ([idx:0])");
    assert!(code.head_node().root);
}

#[test]
fn nested_interface_is_not_root() {
    let code = compile_root(&root_schema(Shape::slice(Shape::Interface)), "Root");
    let g = code.graph();
    let value = g[code.head()].next.unwrap();

    assert_eq!(g[value].op, Opcode::Interface);
    assert!(!g[value].root);
}

#[test]
fn interface_field_is_not_root() {
    let shape = Shape::record(vec![field("v", Shape::Interface)]);
    let code = compile_root(&root_schema(shape), "Root");
    let g = code.graph();
    let value = g[code.head()].next.unwrap();

    assert_eq!(g[value].op, Opcode::Interface);
    assert!(!g[value].root);
}

#[test]
fn map_key_through_alias() {
    let schema = Schema::new()
        .define("Root", Shape::map(Shape::reference("Name"), Shape::Int))
        .define("Name", Shape::reference("Label"))
        .define("Label", Shape::String);
    let mut compiler = Compiler::builder(&schema).verify(true).build();
    let code = compiler.compile_root("Root").unwrap();

    let g = code.graph();
    let key_code = g[code.head()].next.unwrap();
    assert_eq!(g[key_code].op, Opcode::Scalar(Scalar::String));
    assert_eq!(compiler.types().name(g[key_code].typ.unwrap()), "Name");
}

#[test]
fn alias_to_unsupported_map_key() {
    let schema = Schema::new()
        .define("Root", Shape::map(Shape::reference("Ratio"), Shape::Int))
        .define("Ratio", Shape::Float);
    let err = Compiler::new(&schema).compile_root("Root").unwrap_err();

    assert_eq!(err, CompileError::UnsupportedMapKey("Ratio".to_owned()));
}

#[test]
fn unsupported_map_key() {
    let schema = root_schema(Shape::map(Shape::Float, Shape::Int));
    let err = Compiler::new(&schema).compile_root("Root").unwrap_err();

    assert_eq!(err, CompileError::UnsupportedMapKey("float".to_owned()));
    assert_eq!(err.to_string(), "unsupported map key type `float`");
}

#[test]
fn unknown_definition() {
    let schema = root_schema(Shape::slice(Shape::reference("Missing")));

    let err = Compiler::new(&schema).compile_root("Root").unwrap_err();
    assert_eq!(err, CompileError::UnknownDefinition("Missing".to_owned()));

    let err = Compiler::new(&schema).compile_root("Nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown definition `Nope`");
}

#[test]
fn compiled_graphs_are_compact() {
    let shape = Shape::record(vec![
        field("a", Shape::Int),
        field("b", Shape::slice(Shape::Int)),
    ]);
    let code = compile_root(&root_schema(shape), "Root");

    // seven instructions plus the terminal
    assert_eq!(code.graph().len(), 8);
}
