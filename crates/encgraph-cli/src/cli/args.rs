//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands can compose the same
//! definitions, hiding the ones they ignore.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file (positional, `-` for stdin).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("JSON schema file (use \"-\" for stdin)")
}

/// Definition to compile (--root).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("NAME")
        .help("Definition to compile (defaults to the first one)")
}

/// Compile as a polymorphic dispatch target (--dynamic).
pub fn dynamic_arg() -> Arg {
    Arg::new("dynamic")
        .long("dynamic")
        .action(ArgAction::SetTrue)
        .help("Compile as the target of a polymorphic value")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
