use std::io::Write;

use super::CliError;
use super::schema_loader::load_schema;

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let text = r#"{ "definitions": { "A": { "kind": "int" }, "B": { "kind": "bytes" } } }"#;
    file.write_all(text.as_bytes()).unwrap();

    let schema = load_schema(file.path()).unwrap();
    let names: Vec<_> = schema.definitions.keys().map(String::as_str).collect();
    assert_eq!(names, ["A", "B"]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load_schema(&path).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}

#[test]
fn malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "definitions": {{ "A": {{ "kind": "pointer" }} }} }}"#).unwrap();

    let err = load_schema(file.path()).unwrap_err();
    assert!(matches!(err, CliError::Parse { .. }));
    assert!(err.to_string().contains("unknown variant"), "{err}");
}
