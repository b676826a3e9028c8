//! YAML support backed by `serde-saphyr`.

use serde_json::Value;
use serde_saphyr::Options;

/// Parse YAML into a document value using strict boolean semantics, so
/// `yes`/`no`/`on`/`off` stay text.
pub(super) fn from_str(contents: &str) -> Result<Value, serde_saphyr::Error> {
    if is_blank(contents) {
        return Ok(Value::Null);
    }
    serde_saphyr::from_str_with_options(
        contents,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
}

/// A stream holding only whitespace and comments carries no document.
fn is_blank(contents: &str) -> bool {
    contents
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#'))
}
