//! Pre-encoded record keys.

use encgraph_ir::FieldKey;

/// Key bytes for a record field: the quoted name followed by `:`, plus an
/// HTML-safe variant.
pub fn field_key(name: &str, tagged: bool) -> FieldKey {
    let mut key = serde_json::Value::String(name.to_owned()).to_string();
    key.push(':');
    let escaped = escape_html(&key);

    FieldKey::new(name, key.into_bytes(), escaped.into_bytes()).tagged(tagged)
}

fn escape_html(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}
