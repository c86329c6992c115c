use std::fs;
use std::io::{self, Read};
use std::path::Path;

use encgraph_compiler::Schema;

use super::CliError;

/// Load a schema from a JSON file, or from stdin when the path is `-`.
pub fn load_schema(path: &Path) -> Result<Schema, CliError> {
    let (label, text) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        let label = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: label.clone(),
            source,
        })?;
        (label, text)
    };

    parse_schema(&label, &text)
}

fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).map_err(CliError::Stdin)?;
    Ok(buf)
}

pub(super) fn parse_schema(label: &str, text: &str) -> Result<Schema, CliError> {
    let schema = Schema::from_json(text).map_err(|source| CliError::Parse {
        path: label.to_string(),
        source,
    })?;
    log::debug!("loaded {} definitions from {label}", schema.definitions.len());
    Ok(schema)
}
