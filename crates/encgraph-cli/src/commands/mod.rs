pub mod dump;
mod error;
mod schema_loader;
pub mod size;

#[cfg(test)]
mod schema_loader_tests;

use encgraph_compiler::{Compiler, Schema, Shape};
use encgraph_ir::Code;

pub use error::CliError;

/// Root definition name: the explicit `--root`, else the first definition.
fn resolve_root<'s>(schema: &'s Schema, root: Option<&'s str>) -> Result<&'s str, CliError> {
    match root {
        Some(name) => Ok(name),
        None => schema
            .definitions
            .keys()
            .next()
            .map(String::as_str)
            .ok_or(CliError::EmptySchema),
    }
}

/// Compile `root` either statically or as a polymorphic dispatch target.
fn compile(compiler: &mut Compiler<'_>, root: &str, dynamic: bool) -> Result<Code, CliError> {
    let code = if dynamic {
        compiler.compile_dynamic(&Shape::reference(root))?
    } else {
        compiler.compile_root(root)?
    };
    Ok(code)
}
