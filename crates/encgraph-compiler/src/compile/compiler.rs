//! Compiler state and entry points.

use std::sync::Arc;

use encgraph_core::{TypeId, TypeTable};
use encgraph_ir::{Code, Opcode, before_last};

use crate::shape::{Schema, Shape};

use super::constructors;
use super::context::{CompileCtx, CompileState};
use super::error::CompileError;
use super::lower::Position;
use super::subroutine_table::SubroutineTable;

/// Lowers the shapes of one schema into instruction graphs.
///
/// A definition that refers back to itself while being lowered becomes a
/// recursive call. Bodies of such subroutines are compiled after the graph
/// that first referenced them and linked into the shared `SubroutineTable`.
pub struct Compiler<'a> {
    schema: &'a Schema,
    subroutines: Arc<SubroutineTable>,
    verify: bool,
    pub(super) types: TypeTable,
    /// Definitions currently being inlined, innermost last.
    pub(super) in_progress: Vec<String>,
    /// Referenced subroutines that may still need a body.
    pub(super) pending: Vec<String>,
}

/// Builder for `Compiler`.
pub struct CompilerBuilder<'a> {
    schema: &'a Schema,
    subroutines: Option<Arc<SubroutineTable>>,
    verify: bool,
}

impl<'a> CompilerBuilder<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            subroutines: None,
            verify: cfg!(debug_assertions),
        }
    }

    /// Share a subroutine table with other compilers.
    pub fn subroutines(mut self, table: Arc<SubroutineTable>) -> Self {
        self.subroutines = Some(table);
        self
    }

    /// Run structural verification on every finished graph.
    /// Defaults to on in debug builds.
    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn build(self) -> Compiler<'a> {
        Compiler {
            schema: self.schema,
            subroutines: self.subroutines.unwrap_or_default(),
            verify: self.verify,
            types: TypeTable::new(),
            in_progress: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<'a> Compiler<'a> {
    pub fn builder(schema: &'a Schema) -> CompilerBuilder<'a> {
        CompilerBuilder::new(schema)
    }

    pub fn new(schema: &'a Schema) -> Self {
        Self::builder(schema).build()
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn subroutines(&self) -> &Arc<SubroutineTable> {
        &self.subroutines
    }

    /// Type names registered so far; node `typ` handles index into it.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Compile the named definition as a top-level value.
    pub fn compile_root(&mut self, name: &str) -> Result<Code, CompileError> {
        let shape = self.definition(name)?;
        let typ = Some(self.types.register(name));
        log::debug!("compiling `{name}`");

        self.in_progress.push(name.to_owned());
        let code = self.compile_graph(shape, typ, true, None);
        self.in_progress.pop();

        self.finish(code?)
    }

    /// Compile an anonymous shape as a top-level value.
    pub fn compile_shape(&mut self, shape: &Shape) -> Result<Code, CompileError> {
        let typ = self.type_of(shape);
        log::debug!("compiling `{shape}`");

        let code = self.compile_graph(shape, typ, true, None)?;
        self.finish(code)
    }

    /// Compile the dispatch target of a polymorphic value holding `shape`.
    ///
    /// The graph ends in `InterfaceEnd`, which hands control back to the
    /// interface call site.
    pub fn compile_dynamic(&mut self, shape: &Shape) -> Result<Code, CompileError> {
        let typ = self.type_of(shape);
        log::debug!("compiling dynamic `{shape}`");

        let code = self.compile_graph(shape, typ, false, Some(Opcode::InterfaceEnd))?;
        self.finish(code)
    }

    pub(super) fn definition(&self, name: &str) -> Result<&'a Shape, CompileError> {
        self.schema
            .get(name)
            .ok_or_else(|| CompileError::UnknownDefinition(name.to_owned()))
    }

    /// Follow `ref` aliases to the shape they name.
    ///
    /// Gives up after one hop per definition, so alias cycles resolve to a
    /// `ref`.
    pub(super) fn resolve<'s>(&self, shape: &'s Shape) -> Result<&'s Shape, CompileError>
    where
        'a: 's,
    {
        let mut shape = shape;
        for _ in 0..=self.schema.definitions.len() {
            let Shape::Ref { name } = shape else {
                break;
            };
            shape = self.definition(name)?;
        }
        Ok(shape)
    }

    pub(super) fn type_of(&mut self, shape: &Shape) -> Option<TypeId> {
        Some(self.types.register(&shape.to_string()))
    }

    /// Lower `shape` in a fresh compile state, append `tail` if given, and
    /// compact the result.
    fn compile_graph(
        &mut self,
        shape: &Shape,
        typ: Option<TypeId>,
        root: bool,
        tail: Option<Opcode>,
    ) -> Result<Code, CompileError> {
        let mut state = CompileState::new();
        let mut ctx = CompileCtx::new(&mut state).with_type(typ).with_root(root);

        let head = self.lower(&mut ctx, shape, Position::Value)?;
        if let Some(op) = tail {
            let tail = constructors::new_op(&mut ctx, op);
            ctx.step();
            let g = ctx.graph_mut();
            let last = before_last(g, head);
            g.set_fallthrough(last, tail);
        }

        let code = Code::new(state.into_graph(), head).copy();
        if self.verify {
            code.verify();
        }
        Ok(code)
    }

    /// Link every subroutine referenced so far, then hand back `code`.
    fn finish(&mut self, code: Code) -> Result<Code, CompileError> {
        while let Some(name) = self.pending.pop() {
            let typ = Some(self.types.register(&name));
            let sub = self.subroutines.handle(&name, typ);
            if sub.is_linked() {
                continue;
            }

            let shape = self.definition(&name)?;
            self.in_progress.push(name.clone());
            let tail = Some(Opcode::StructFieldRecursiveEnd);
            let body = self.compile_graph(shape, sub.typ(), false, tail);
            self.in_progress.pop();

            let body = body?;
            let nodes = body.graph().len();
            if sub.link(body) {
                log::debug!("subroutine `{name}` linked ({nodes} nodes)");
            } else {
                log::debug!("subroutine `{name}` was linked concurrently, dropping this body");
            }
        }

        let subroutines = code.reachable_subroutines();
        log::debug!(
            "compiled {} nodes, register file of {} slots, {} subroutines",
            code.graph().len(),
            code.register_file_size(),
            subroutines.len()
        );
        Ok(code.with_subroutines(subroutines))
    }
}
