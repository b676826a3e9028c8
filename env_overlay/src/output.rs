//! Writing merged documents to disk.
//!
//! Every write is a single attempt: failures are reported to the caller and
//! nothing is retried or rolled back.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tracing::info;

use crate::codec::{self, DocumentFormat};
use crate::session::DocumentSession;
use crate::{OverlayError, OverlayResult, fs};

/// Render `value` in `format` and write it to `path`.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`OverlayError::Render`] when the value cannot be encoded and
/// [`OverlayError::File`] when the file cannot be written.
pub fn write_document(path: &Utf8Path, format: DocumentFormat, value: &Value) -> OverlayResult<()> {
    let text = codec::encode(format, value)?;
    fs::write_text(path, &text).map_err(|err| OverlayError::file(path, err))
}

/// Merge the documents for `environment` and write the result into `out_dir`.
///
/// The output file is named by the session's naming convention and encoded
/// according to its extension. Returns the path written.
///
/// # Errors
///
/// Propagates lookup failures from [`DocumentSession::merge_for`] as well as
/// format, render and write failures.
///
/// # Examples
///
/// ```rust,no_run
/// use camino::Utf8PathBuf;
/// use env_overlay::output::generate;
/// use env_overlay::session::DocumentSession;
/// use serde_json::json;
///
/// # fn run() -> env_overlay::OverlayResult<()> {
/// let mut session = DocumentSession::default();
/// session.insert("values.yaml", json!({"replicas": 1}));
/// session.insert("override.prod.yaml", json!({"replicas": 3}));
///
/// let written = generate(&session, "prod", &Utf8PathBuf::from("out"))?;
/// assert_eq!(written, Utf8PathBuf::from("out/final.prod.yaml"));
/// # Ok(())
/// # }
/// ```
pub fn generate(
    session: &DocumentSession,
    environment: &str,
    out_dir: &Utf8Path,
) -> OverlayResult<Utf8PathBuf> {
    let merged = session.merge_for(environment)?;
    let path = out_dir.join(session.naming().output_name(environment));
    let format = DocumentFormat::from_path(&path)?;
    write_document(&path, format, &merged)?;
    info!(environment, %path, "generated document");
    Ok(path)
}
