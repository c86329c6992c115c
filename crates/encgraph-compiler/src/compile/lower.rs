//! Shape-directed graph construction.

use encgraph_ir::{NodeId, Opcode, Scalar, before_last, splice_skip};

use crate::shape::{Field, Shape, field_key};

use super::compiler::Compiler;
use super::constructors;
use super::context::CompileCtx;
use super::error::CompileError;
use super::fields::{conflict_losers, flatten};

/// Where a value is read from; maps read out of a record field load first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Position {
    Value,
    Field,
}

impl Compiler<'_> {
    /// Build the sub-graph for `shape` and return its head.
    ///
    /// The sub-graph ends in a fresh `End`; callers relink it through
    /// `before_last`.
    pub(super) fn lower(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        shape: &Shape,
        position: Position,
    ) -> Result<NodeId, CompileError> {
        match shape {
            Shape::Slice { elem } => self.lower_slice(ctx, elem),
            Shape::Array { len, elem } => self.lower_array(ctx, *len, elem),
            Shape::Map { key, value } => self.lower_map(ctx, key, value, position),
            Shape::Struct { fields } => self.lower_struct(ctx, fields),
            Shape::Ref { name } => self.lower_ref(ctx, name, position),
            Shape::Interface => {
                let id = constructors::interface(ctx);
                ctx.step();
                Ok(id)
            }
            Shape::Int => Ok(lower_scalar(ctx, Scalar::Int)),
            Shape::Uint => Ok(lower_scalar(ctx, Scalar::Uint)),
            Shape::Float => Ok(lower_scalar(ctx, Scalar::Float)),
            Shape::Bool => Ok(lower_scalar(ctx, Scalar::Bool)),
            Shape::String => Ok(lower_scalar(ctx, Scalar::String)),
            Shape::Bytes => Ok(lower_scalar(ctx, Scalar::Bytes)),
        }
    }

    // header => code => elem => end
    //            ^        |
    //            |________|
    fn lower_slice(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        elem: &Shape,
    ) -> Result<NodeId, CompileError> {
        let header = constructors::slice_header(ctx);
        ctx.step();

        let typ = self.type_of(elem);
        let code = self.lower(&mut ctx.nested(1).with_type(typ), elem, Position::Value)?;

        let elem_node = constructors::slice_elem(ctx, header, elem.size());
        ctx.step();
        let end = constructors::new_op(ctx, Opcode::SliceEnd);
        ctx.step();

        close_loop(ctx, header, code, elem_node, end);
        Ok(header)
    }

    fn lower_array(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        len: u32,
        elem: &Shape,
    ) -> Result<NodeId, CompileError> {
        let header = constructors::array_header(ctx, len);
        ctx.step();

        let typ = self.type_of(elem);
        let code = self.lower(&mut ctx.nested(1).with_type(typ), elem, Position::Value)?;

        let elem_node = constructors::array_elem(ctx, header, elem.size());
        ctx.step();
        let end = constructors::new_op(ctx, Opcode::ArrayEnd);
        ctx.step();

        close_loop(ctx, header, code, elem_node, end);
        Ok(header)
    }

    // header => key code => value => value code => key => end
    //              ^                                |
    //              |________________________________|
    fn lower_map(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        key: &Shape,
        value: &Shape,
        position: Position,
    ) -> Result<NodeId, CompileError> {
        let Some(key_scalar @ (Scalar::String | Scalar::Int | Scalar::Uint | Scalar::Bool)) =
            self.resolve(key)?.scalar()
        else {
            return Err(CompileError::UnsupportedMapKey(key.to_string()));
        };

        let header = constructors::map_header(ctx, position == Position::Field);
        ctx.step();

        let typ = self.type_of(key);
        let key_code = lower_scalar(&mut ctx.nested(1).with_type(typ), key_scalar);

        let value_node = constructors::map_value(ctx, header);
        ctx.step();

        let typ = self.type_of(value);
        let value_code = self.lower(&mut ctx.nested(1).with_type(typ), value, Position::Value)?;

        let key_node = constructors::map_key(ctx, header);
        ctx.step();
        let end = constructors::map_end(ctx, header);
        ctx.step();

        let g = ctx.graph_mut();
        g[header].map_key = Some(key_node);
        g[header].map_value = Some(value_node);
        g[header].next = Some(key_code);
        g[header].end = Some(end);

        let last = before_last(g, key_code);
        g.set_fallthrough(last, value_node);
        g[value_node].next = Some(value_code);
        g[value_node].end = Some(end);

        let last = before_last(g, value_code);
        g.set_fallthrough(last, key_node);
        g[key_node].next = Some(key_code);
        g[key_node].end = Some(end);

        Ok(header)
    }

    fn lower_struct(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        fields: &[Field],
    ) -> Result<NodeId, CompileError> {
        let flat = flatten(fields);
        let losers = conflict_losers(&flat);

        // Leading losers never become the record head.
        let Some(first) = losers.iter().position(|&lost| !lost) else {
            let end = constructors::new_op(ctx, Opcode::StructEnd);
            ctx.step();
            return Ok(end);
        };

        let mut head = None;
        let mut emitted: Vec<(NodeId, bool)> = Vec::new();
        let mut tail = None;

        for (field, &lost) in flat[first..].iter().zip(&losers[first..]) {
            let scalar = field.shape.scalar();
            let op = match head {
                None => Opcode::StructFieldHead(scalar),
                Some(_) => Opcode::StructField(scalar),
            };
            let key = field_key(field.key, field.tagged).anonymous(field.anonymous);
            let node = constructors::struct_field(ctx, op, key, field.offset, head);
            ctx.step();

            let last = if scalar.is_some() {
                node
            } else {
                let typ = self.type_of(field.shape);
                let mut inner = ctx.nested(1).with_type(typ);
                let value = self.lower(&mut inner, field.shape, Position::Field)?;
                let g = ctx.graph_mut();
                g[node].next = Some(value);
                before_last(g, value)
            };

            let g = ctx.graph_mut();
            if let Some(prev_tail) = tail {
                g.set_fallthrough(prev_tail, node);
            }
            if let Some(&(prev, _)) = emitted.last() {
                g[prev].next_field = Some(node);
            }
            head.get_or_insert(node);
            emitted.push((node, lost));
            tail = Some(last);
        }

        let end = constructors::new_op(ctx, Opcode::StructEnd);
        ctx.step();

        let (head, _) = emitted[0];
        let g = ctx.graph_mut();
        if let Some(tail) = tail {
            g.set_fallthrough(tail, end);
        }
        if let Some(&(last, _)) = emitted.last() {
            g[last].next_field = Some(end);
        }
        g[head].end = Some(end);

        let mut prev = head;
        for &(node, lost) in &emitted[1..] {
            if lost {
                log::trace!("record field {node}: duplicate key, skipped");
                splice_skip(g, prev, node);
            } else {
                prev = node;
            }
        }

        Ok(head)
    }

    fn lower_ref(
        &mut self,
        ctx: &mut CompileCtx<'_>,
        name: &str,
        position: Position,
    ) -> Result<NodeId, CompileError> {
        let shape = self.definition(name)?;
        let typ = Some(self.types.register(name));

        if self.in_progress.iter().any(|n| n == name) {
            let sub = self.subroutines().handle(name, typ);
            if !sub.is_linked() {
                self.pending.push(name.to_owned());
            }
            log::trace!("`{name}` refers back to itself: recursive call");
            let id = constructors::recursive(&mut ctx.view().with_type(typ), &sub);
            ctx.step();
            return Ok(id);
        }

        self.in_progress.push(name.to_owned());
        let head = self.lower(&mut ctx.view().with_type(typ), shape, position);
        self.in_progress.pop();
        head
    }
}

fn lower_scalar(ctx: &mut CompileCtx<'_>, scalar: Scalar) -> NodeId {
    let id = constructors::new_op(ctx, Opcode::Scalar(scalar));
    ctx.step();
    id
}

fn close_loop(ctx: &mut CompileCtx<'_>, header: NodeId, code: NodeId, elem: NodeId, end: NodeId) {
    let g = ctx.graph_mut();
    let last = before_last(g, code);
    g.set_fallthrough(last, elem);

    g[elem].next = Some(code);
    g[elem].end = Some(end);
    g[header].next = Some(code);
    g[header].elem = Some(elem);
    g[header].end = Some(end);
}
