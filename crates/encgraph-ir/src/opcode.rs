//! Instruction kinds and their families.

use std::fmt;

/// Scalar value encodings. A scalar either stands alone or is folded into a
/// record field instruction (`StructFieldInt`, ...).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Scalar {
    Int,
    Uint,
    Float,
    Bool,
    String,
    Bytes,
}

impl Scalar {
    pub fn name(self) -> &'static str {
        match self {
            Scalar::Int => "Int",
            Scalar::Uint => "Uint",
            Scalar::Float => "Float",
            Scalar::Bool => "Bool",
            Scalar::String => "String",
            Scalar::Bytes => "Bytes",
        }
    }
}

/// Operation performed by one instruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Opcode {
    /// Terminal. Every chain ends here.
    End,
    Scalar(Scalar),

    /// Dynamic value; the walker re-dispatches on the runtime shape.
    Interface,
    /// Terminal of a graph compiled as an interface dispatch target.
    InterfaceEnd,

    SliceHead,
    SliceElem,
    SliceEnd,

    ArrayHead,
    ArrayElem,
    ArrayEnd,

    MapHead,
    /// Map header whose walker loads key/value pairs up front.
    MapHeadLoad,
    MapKey,
    MapValue,
    MapEnd,

    /// First field of a record; `Some` folds a scalar value into the field.
    StructFieldHead(Option<Scalar>),
    StructField(Option<Scalar>),
    StructEnd,

    /// Call into an independently compiled subroutine.
    StructFieldRecursive,
    /// Terminal of a subroutine body.
    StructFieldRecursiveEnd,
}

/// Coarse grouping used by traversal and disassembly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum CodeType {
    Op,
    SliceHead,
    SliceElem,
    ArrayHead,
    ArrayElem,
    MapHead,
    MapKey,
    MapValue,
    MapEnd,
    StructField,
    StructEnd,
}

impl Opcode {
    pub fn code_type(self) -> CodeType {
        match self {
            Opcode::SliceHead => CodeType::SliceHead,
            Opcode::SliceElem => CodeType::SliceElem,
            Opcode::ArrayHead => CodeType::ArrayHead,
            Opcode::ArrayElem => CodeType::ArrayElem,
            Opcode::MapHead | Opcode::MapHeadLoad => CodeType::MapHead,
            Opcode::MapKey => CodeType::MapKey,
            Opcode::MapValue => CodeType::MapValue,
            Opcode::MapEnd => CodeType::MapEnd,
            Opcode::StructFieldHead(_) | Opcode::StructField(_) => CodeType::StructField,
            Opcode::StructEnd => CodeType::StructEnd,
            Opcode::End
            | Opcode::Scalar(_)
            | Opcode::Interface
            | Opcode::InterfaceEnd
            | Opcode::SliceEnd
            | Opcode::ArrayEnd
            | Opcode::StructFieldRecursive
            | Opcode::StructFieldRecursiveEnd => CodeType::Op,
        }
    }

    /// Loop-closing kinds resume through `end`; everything else through `next`.
    #[inline]
    pub fn falls_through_end(self) -> bool {
        matches!(
            self.code_type(),
            CodeType::ArrayElem | CodeType::SliceElem | CodeType::MapKey
        )
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self == Opcode::End
    }

    /// Kinds that close a sub-graph boundary for register sizing.
    #[inline]
    pub fn closes_subgraph(self) -> bool {
        matches!(self, Opcode::InterfaceEnd | Opcode::StructFieldRecursiveEnd)
    }

    /// Interface dispatch and recursive calls, with their returns.
    #[inline]
    pub fn transfers_control(self) -> bool {
        matches!(
            self,
            Opcode::Interface
                | Opcode::InterfaceEnd
                | Opcode::StructFieldRecursive
                | Opcode::StructFieldRecursiveEnd
        )
    }

    #[inline]
    pub fn is_recursive_call(self) -> bool {
        self == Opcode::StructFieldRecursive
    }

    /// The scalar folded into this instruction, if any.
    pub fn scalar(self) -> Option<Scalar> {
        match self {
            Opcode::Scalar(s) => Some(s),
            Opcode::StructFieldHead(s) | Opcode::StructField(s) => s,
            _ => None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opcode::End => "End",
            Opcode::Scalar(s) => s.name(),
            Opcode::Interface => "Interface",
            Opcode::InterfaceEnd => "InterfaceEnd",
            Opcode::SliceHead => "SliceHead",
            Opcode::SliceElem => "SliceElem",
            Opcode::SliceEnd => "SliceEnd",
            Opcode::ArrayHead => "ArrayHead",
            Opcode::ArrayElem => "ArrayElem",
            Opcode::ArrayEnd => "ArrayEnd",
            Opcode::MapHead => "MapHead",
            Opcode::MapHeadLoad => "MapHeadLoad",
            Opcode::MapKey => "MapKey",
            Opcode::MapValue => "MapValue",
            Opcode::MapEnd => "MapEnd",
            Opcode::StructFieldHead(s) => {
                return write!(f, "StructFieldHead{}", s.map_or("", Scalar::name));
            }
            Opcode::StructField(s) => {
                return write!(f, "StructField{}", s.map_or("", Scalar::name));
            }
            Opcode::StructEnd => "StructEnd",
            Opcode::StructFieldRecursive => "StructFieldRecursive",
            Opcode::StructFieldRecursiveEnd => "StructFieldRecursiveEnd",
        };
        f.write_str(name)
    }
}
