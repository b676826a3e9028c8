//! Comparison table coverage: row ordering, missing cells and rendering.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::{Cell, ComparisonTable, MISSING_MARKER};
use crate::codec::DocumentFormat;
use crate::session::DocumentSession;

#[fixture]
fn session() -> DocumentSession {
    let mut session = DocumentSession::default();
    session.insert("override.dev.yaml", json!({"debug": false, "replicas": 0}));
    session.insert(
        "values.yaml",
        json!({"replicas": 1, "image": "app:1", "note": null}),
    );
    session.insert("override.prod.yaml", json!({"image": "", "region": "eu"}));
    session
}

#[rstest]
fn columns_put_the_base_first(session: DocumentSession) {
    let table = ComparisonTable::build(&session);
    assert_eq!(
        table.columns(),
        ["values.yaml", "override.dev.yaml", "override.prod.yaml"]
    );
}

#[rstest]
fn rows_follow_first_seen_key_order(session: DocumentSession) {
    let table = ComparisonTable::build(&session);
    let keys: Vec<&str> = table.rows().iter().map(|row| row.key()).collect();
    assert_eq!(keys, ["replicas", "image", "note", "debug", "region"]);
}

#[rstest]
fn falsy_values_are_not_missing(session: DocumentSession) -> Result<()> {
    let table = ComparisonTable::build(&session);
    let cells_for = |key: &str| {
        table
            .rows()
            .iter()
            .find(|row| row.key() == key)
            .map(|row| row.cells().to_vec())
            .ok_or_else(|| anyhow!("row {key} missing"))
    };

    let null = Value::Null;
    let zero = json!(0);
    let one = json!(1);
    let empty = json!("");
    let image = json!("app:1");

    ensure!(
        cells_for("note")? == [Cell::Value(&null), Cell::Missing, Cell::Missing],
        "explicit null should be a value"
    );
    ensure!(
        cells_for("replicas")? == [Cell::Value(&one), Cell::Value(&zero), Cell::Missing],
        "zero should be a value"
    );
    ensure!(
        cells_for("image")? == [Cell::Value(&image), Cell::Missing, Cell::Value(&empty)],
        "empty string should be a value"
    );
    Ok(())
}

#[rstest]
fn non_mapping_documents_contribute_no_rows() {
    let mut session = DocumentSession::default();
    session.insert("values.yaml", json!({"a": 1}));
    session.insert("override.list.yaml", json!([{"id": 1}]));
    let table = ComparisonTable::build(&session);
    assert_eq!(table.rows().len(), 1);
    let row = table.rows().first().expect("row a");
    assert_eq!(row.cells(), [Cell::Value(&json!(1)), Cell::Missing]);
}

#[rstest]
fn empty_session_builds_an_empty_table() {
    let session = DocumentSession::default();
    let table = ComparisonTable::build(&session);
    assert!(table.columns().is_empty());
    assert!(table.rows().is_empty());
}

#[rstest]
fn render_marks_missing_cells(session: DocumentSession) -> Result<()> {
    let table = ComparisonTable::build(&session);
    let text = table
        .render_text(DocumentFormat::Json)
        .map_err(|err| anyhow!(err.to_string()))?;
    let region = text
        .split("== ")
        .find(|block| block.starts_with("region"))
        .ok_or_else(|| anyhow!("region block missing in {text}"))?;
    ensure!(
        region
            == format!(
                "region\n-- values.yaml\n{MISSING_MARKER}\n-- override.dev.yaml\n{MISSING_MARKER}\n-- override.prod.yaml\n\"eu\"\n"
            ),
        "unexpected block: {region:?}"
    );
    ensure!(text.starts_with("== replicas\n"), "rows out of order: {text}");
    Ok(())
}
