//! Compile errors.

/// Errors raised while lowering a schema.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("unknown definition `{0}`")]
    UnknownDefinition(String),

    #[error("unsupported map key type `{0}`")]
    UnsupportedMapKey(String),
}
