use std::fmt::Write as _;
use std::path::PathBuf;

use encgraph_compiler::{Compiler, Schema};

use super::schema_loader::load_schema;
use super::{CliError, compile, resolve_root};

pub struct SizeArgs {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub dynamic: bool,
}

pub fn run(args: SizeArgs) {
    let result = load_schema(&args.schema_path)
        .and_then(|schema| render(&schema, args.root.as_deref(), args.dynamic));

    match result {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// One `name slots` line for the root, then one per linked subroutine.
pub(super) fn render(
    schema: &Schema,
    root: Option<&str>,
    dynamic: bool,
) -> Result<String, CliError> {
    let root = resolve_root(schema, root)?;
    let mut compiler = Compiler::new(schema);
    let code = compile(&mut compiler, root, dynamic)?;

    let mut out = String::new();
    let _ = writeln!(out, "{root} {}", code.register_file_size());
    for sub in compiler.subroutines().snapshot() {
        if let Some(body) = sub.code() {
            let _ = writeln!(out, "{}* {}", sub.name(), body.register_file_size());
        }
    }
    Ok(out)
}
