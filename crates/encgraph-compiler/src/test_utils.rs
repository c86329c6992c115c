//! Test helpers.

use encgraph_ir::Code;

use crate::{Compiler, Field, Schema, Shape};

pub fn field(name: &str, shape: Shape) -> Field {
    Field::new(name, shape)
}

/// Schema with a single definition named `Root`.
pub fn root_schema(shape: Shape) -> Schema {
    Schema::new().define("Root", shape)
}

pub fn compile_root(schema: &Schema, name: &str) -> Code {
    Compiler::builder(schema)
        .verify(true)
        .build()
        .compile_root(name)
        .unwrap()
}

/// Disassembly of `shape` compiled as `Root`.
pub fn disassemble(shape: Shape) -> String {
    compile_root(&root_schema(shape), "Root").disassemble()
}
