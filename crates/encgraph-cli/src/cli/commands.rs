//! Command builders for the CLI.
//!
//! `dump` and `size` accept the same flags; the ones a command ignores are
//! hidden from its `--help`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("encgraph")
        .about("Inspect instruction graphs compiled from value schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(size_command())
}

/// Print the disassembly of a compiled definition and its subroutines.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the compiled instruction graph")
        .override_usage(
            "\
  encgraph dump <SCHEMA>
  encgraph dump <SCHEMA> --root <NAME> [--dynamic]",
        )
        .after_help(
            r#"EXAMPLES:
  encgraph dump schema.json                  # first definition
  encgraph dump schema.json -r Tree          # named definition
  encgraph dump schema.json -r Tree --dynamic
  cat schema.json | encgraph dump -"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(dynamic_arg())
        .arg(color_arg())
}

/// Print register file sizes.
pub fn size_command() -> Command {
    Command::new("size")
        .about("Show register file sizes")
        .after_help(
            r#"EXAMPLES:
  encgraph size schema.json
  encgraph size schema.json -r Tree"#,
        )
        .arg(schema_path_arg())
        .arg(root_arg())
        .arg(dynamic_arg())
        .arg(color_arg().hide(true))
}
