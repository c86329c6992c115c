//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::size::SizeArgs;

pub struct DumpParams {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub dynamic: bool,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            root: m.get_one::<String>("root").cloned(),
            dynamic: m.get_flag("dynamic"),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            schema_path: p.schema_path,
            root: p.root,
            dynamic: p.dynamic,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SizeParams {
    pub schema_path: PathBuf,
    pub root: Option<String>,
    pub dynamic: bool,
}

impl SizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            root: m.get_one::<String>("root").cloned(),
            dynamic: m.get_flag("dynamic"),
        }
    }
}

impl From<SizeParams> for SizeArgs {
    fn from(p: SizeParams) -> Self {
        Self {
            schema_path: p.schema_path,
            root: p.root,
            dynamic: p.dynamic,
        }
    }
}

// Required by the command definition; clap rejects the input before dispatch otherwise.
fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
