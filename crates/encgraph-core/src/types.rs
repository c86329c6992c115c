//! Opaque type handles.
//!
//! The graph never inspects a type; it only carries a `TypeId` so the
//! encode walker can find the value layout it was compiled for. `TypeTable`
//! hands out one id per distinct type name.

use indexmap::IndexSet;

/// Handle to a type registered in a `TypeTable`.
///
/// Ids are dense and ordered by registration.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, serde::Serialize)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Build an id from a raw index. The caller guarantees it came from a table.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Registry of type names, deduplicated.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    names: IndexSet<String>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type name, returning the existing id if already known.
    pub fn register(&mut self, name: &str) -> TypeId {
        if let Some(index) = self.names.get_index_of(name) {
            return TypeId(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        TypeId(index as u32)
    }

    /// Name of a registered type.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this table.
    pub fn name(&self, id: TypeId) -> &str {
        self.try_name(id)
            .unwrap_or_else(|| panic!("TypeTable: {id} was not registered here"))
    }

    pub fn try_name(&self, id: TypeId) -> Option<&str> {
        self.names.get_index(id.0 as usize).map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.names.get_index_of(name).map(|i| TypeId(i as u32))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (TypeId(i as u32), s.as_str()))
    }
}
