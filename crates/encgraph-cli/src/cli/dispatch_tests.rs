//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{dump_command, size_command};

#[test]
fn dump_extracts_params() {
    let m = dump_command()
        .try_get_matches_from(["dump", "schema.json", "--root", "Tree", "--dynamic"])
        .unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.schema_path, PathBuf::from("schema.json"));
    assert_eq!(params.root.as_deref(), Some("Tree"));
    assert!(params.dynamic);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_defaults() {
    let m = dump_command().try_get_matches_from(["dump", "-"]).unwrap();
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.schema_path, PathBuf::from("-"));
    assert_eq!(params.root, None);
    assert!(!params.dynamic);
}

#[test]
fn dump_color_choices() {
    for (flag, expected) in [
        ("always", ColorChoice::Always),
        ("never", ColorChoice::Never),
        ("auto", ColorChoice::Auto),
    ] {
        let m = dump_command()
            .try_get_matches_from(["dump", "s.json", "--color", flag])
            .unwrap();
        assert_eq!(DumpParams::from_matches(&m).color, expected);
    }
}

#[test]
fn dump_rejects_unknown_color() {
    let result = dump_command().try_get_matches_from(["dump", "s.json", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn schema_is_required() {
    assert!(dump_command().try_get_matches_from(["dump"]).is_err());
    assert!(size_command().try_get_matches_from(["size"]).is_err());
}

#[test]
fn size_accepts_dump_flags() {
    let result =
        size_command().try_get_matches_from(["size", "s.json", "-r", "A", "--color", "never"]);
    assert!(result.is_ok(), "size should accept dump flags: {:?}", result.err());

    let params = SizeParams::from_matches(&result.unwrap());
    assert_eq!(params.root.as_deref(), Some("A"));
}

#[test]
fn size_help_hides_color() {
    let help = size_command().render_help().to_string();
    assert!(!help.contains("--color"), "size help should not show --color");
}

#[test]
fn cli_requires_subcommand() {
    assert!(build_cli().try_get_matches_from(["encgraph"]).is_err());
    assert!(build_cli().try_get_matches_from(["encgraph", "dump", "s.json"]).is_ok());
}
