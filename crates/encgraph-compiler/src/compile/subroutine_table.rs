//! Compile-once table of recursive subroutines.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use encgraph_core::TypeId;
use encgraph_ir::Subroutine;
use indexmap::IndexMap;

/// Subroutine handles keyed by definition name.
///
/// Call sites get a handle before its body exists; whoever compiles the body
/// links it once. The table can be shared between compilers (and threads)
/// through an `Arc`.
#[derive(Debug, Default)]
pub struct SubroutineTable {
    entries: Mutex<IndexMap<String, Arc<Subroutine>>>,
}

impl SubroutineTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle for `name`, created unlinked on first request.
    pub fn handle(&self, name: &str, typ: Option<TypeId>) -> Arc<Subroutine> {
        let mut entries = self.lock();
        if let Some(sub) = entries.get(name) {
            return Arc::clone(sub);
        }

        log::trace!("subroutine `{name}`: new handle");
        let sub = Arc::new(Subroutine::new(name, typ));
        entries.insert(name.to_owned(), Arc::clone(&sub));
        sub
    }

    pub fn get(&self, name: &str) -> Option<Arc<Subroutine>> {
        self.lock().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// All handles in creation order.
    pub fn snapshot(&self) -> Vec<Arc<Subroutine>> {
        self.lock().values().cloned().collect()
    }

    // Entries are only ever inserted whole, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, IndexMap<String, Arc<Subroutine>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
