use std::fmt::Write as _;
use std::path::PathBuf;

use encgraph_compiler::{Compiler, Schema};
use encgraph_core::Colors;

use super::schema_loader::load_schema;
use super::{CliError, compile, resolve_root};

pub struct DumpArgs {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub dynamic: bool,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let result = load_schema(&args.schema_path).and_then(|schema| {
        render(&schema, args.root.as_deref(), args.dynamic, Colors::new(args.color))
    });

    match result {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Disassemble `root` followed by every subroutine it links.
pub(super) fn render(
    schema: &Schema,
    root: Option<&str>,
    dynamic: bool,
    colors: Colors,
) -> Result<String, CliError> {
    let root = resolve_root(schema, root)?;
    let mut compiler = Compiler::new(schema);
    let code = compile(&mut compiler, root, dynamic)?;

    let mut out = String::new();
    section(&mut out, "code", root, colors);
    out.push_str(&code.dump(colors));
    out.push('\n');

    for sub in compiler.subroutines().snapshot() {
        let Some(body) = sub.code() else {
            continue;
        };
        out.push('\n');
        section(&mut out, "subroutine", sub.name(), colors);
        out.push_str(&body.dump(colors));
        out.push('\n');
    }

    Ok(out)
}

fn section(out: &mut String, label: &str, name: &str, c: Colors) {
    let _ = writeln!(out, "[{}] {}", c.paint(c.label, label), c.paint(c.key, name));
}
