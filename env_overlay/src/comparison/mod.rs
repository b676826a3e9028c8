//! Side-by-side view of top-level entries across loaded documents.
//!
//! Rows are the union of top-level mapping keys, in the order they are first
//! seen while scanning documents base-first. A document lacking a key yields
//! [`Cell::Missing`], which is distinct from an explicit null, empty string,
//! zero or `false`.

use std::collections::HashSet;
use std::fmt::{self, Write as _};

use serde_json::Value;

use crate::{OverlayError, OverlayResult};
use crate::codec::{self, DocumentFormat};
use crate::session::DocumentSession;

/// Marker rendered for entries a document does not define.
pub const MISSING_MARKER: &str = "N/A";

/// One document's value for a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    /// The document has no entry with this key.
    Missing,
    /// The document defines the entry, possibly as null.
    Value(&'a Value),
}

/// Values of one top-level key across every column.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow<'a> {
    key: &'a str,
    cells: Vec<Cell<'a>>,
}

impl<'a> ComparisonRow<'a> {
    /// Top-level key this row describes.
    #[must_use]
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// Cells in column order.
    #[must_use]
    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }
}

/// Comparison of the top-level entries of every document in a session.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonTable<'a> {
    columns: Vec<&'a str>,
    rows: Vec<ComparisonRow<'a>>,
}

impl<'a> ComparisonTable<'a> {
    /// Build the table for all documents in `session`.
    ///
    /// Documents that are not mappings contribute no rows and show
    /// [`Cell::Missing`] everywhere.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use env_overlay::comparison::{Cell, ComparisonTable};
    /// use env_overlay::session::DocumentSession;
    /// use serde_json::json;
    ///
    /// let mut session = DocumentSession::default();
    /// session.insert("values.yaml", json!({"replicas": 1}));
    /// session.insert("override.prod.yaml", json!({"debug": false}));
    ///
    /// let table = ComparisonTable::build(&session);
    /// assert_eq!(table.columns(), ["values.yaml", "override.prod.yaml"]);
    /// let debug = &table.rows()[1];
    /// assert_eq!(debug.key(), "debug");
    /// assert_eq!(debug.cells(), [Cell::Missing, Cell::Value(&json!(false))]);
    /// ```
    #[must_use]
    pub fn build(session: &'a DocumentSession) -> Self {
        let documents: Vec<_> = session.documents().collect();
        let columns = documents.iter().map(|document| document.name()).collect();

        let mut seen = HashSet::new();
        let keys: Vec<&'a str> = documents
            .iter()
            .filter_map(|document| document.value().as_object())
            .flat_map(|map| map.keys().map(String::as_str))
            .filter(|key| seen.insert(*key))
            .collect();

        let rows = keys
            .into_iter()
            .map(|key| ComparisonRow {
                key,
                cells: documents
                    .iter()
                    .map(|document| {
                        document
                            .value()
                            .as_object()
                            .and_then(|map| map.get(key))
                            .map_or(Cell::Missing, Cell::Value)
                    })
                    .collect(),
            })
            .collect();

        Self { columns, rows }
    }

    /// Document names in column order, base first.
    #[must_use]
    pub fn columns(&self) -> &[&'a str] {
        &self.columns
    }

    /// Rows in first-seen key order.
    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow<'a>] {
        &self.rows
    }

    /// Render the table as a plain-text report.
    ///
    /// Each row becomes a `== key` heading followed by one `-- document`
    /// block per column holding the encoded value, or [`MISSING_MARKER`].
    ///
    /// # Errors
    ///
    /// Returns an [`crate::OverlayError`] when a cell cannot be encoded.
    pub fn render_text(&self, format: DocumentFormat) -> OverlayResult<String> {
        let failed = |err: fmt::Error| OverlayError::render(format, err);
        let mut out = String::new();
        for row in &self.rows {
            writeln!(out, "== {}", row.key).map_err(failed)?;
            for (column, cell) in self.columns.iter().zip(&row.cells) {
                writeln!(out, "-- {column}").map_err(failed)?;
                match cell {
                    Cell::Missing => writeln!(out, "{MISSING_MARKER}").map_err(failed)?,
                    Cell::Value(value) => out.push_str(&codec::encode(format, value)?),
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests;
