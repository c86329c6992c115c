//! Handles to independently compiled graphs.
//!
//! A recursive type is compiled once into its own `Code`; every call site
//! that recurses into it holds the same `Arc<Subroutine>`. Call sites are
//! created before the body is compiled, so the code is linked later, once.

use std::fmt;
use std::sync::OnceLock;

use encgraph_core::TypeId;

use crate::graph::Code;

pub struct Subroutine {
    name: String,
    typ: Option<TypeId>,
    code: OnceLock<Code>,
}

impl Subroutine {
    pub fn new(name: impl Into<String>, typ: Option<TypeId>) -> Self {
        Self {
            name: name.into(),
            typ,
            code: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn typ(&self) -> Option<TypeId> {
        self.typ
    }

    /// The linked body, if any.
    pub fn code(&self) -> Option<&Code> {
        self.code.get()
    }

    pub fn is_linked(&self) -> bool {
        self.code.get().is_some()
    }

    /// Link the compiled body. Returns `false` if another compile linked first;
    /// the losing `code` is dropped.
    pub fn link(&self, code: Code) -> bool {
        self.code.set(code).is_ok()
    }
}

// Bodies may call themselves; print the name only.
impl fmt::Debug for Subroutine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subroutine")
            .field("name", &self.name)
            .field("linked", &self.is_linked())
            .finish()
    }
}
