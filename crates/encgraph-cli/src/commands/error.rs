use std::io;

use encgraph_compiler::CompileError;

/// Failures surfaced to the user by `dump` and `size`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("invalid schema '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema has no definitions")]
    EmptySchema,

    #[error(transparent)]
    Compile(#[from] CompileError),
}
