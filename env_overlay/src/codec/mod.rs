//! Conversion between document text and in-memory values.
//!
//! YAML is read with `serde-saphyr` and written with `serde_yaml`, whose
//! emitter quotes strings that would otherwise read back as numbers, booleans,
//! nulls or mappings. JSON is handled by `serde_json`. Both decode into
//! [`serde_json::Value`], whose map type keeps keys in document order.

mod yaml;

use std::fmt;

use camino::Utf8Path;
use serde_json::Value;

use crate::{OverlayError, OverlayResult};

/// Textual formats the codec understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DocumentFormat {
    /// YAML 1.2 documents (`.yaml`, `.yml`).
    Yaml,
    /// JSON documents (`.json`).
    Json,
}

impl DocumentFormat {
    /// Select a format from the extension of `path`, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::UnsupportedFormat`] when the extension is
    /// missing or unrecognised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use camino::Utf8Path;
    /// use env_overlay::codec::DocumentFormat;
    ///
    /// let format = DocumentFormat::from_path(Utf8Path::new("override.prod.YML"))?;
    /// assert_eq!(format, DocumentFormat::Yaml);
    /// assert!(DocumentFormat::from_path(Utf8Path::new("notes.txt")).is_err());
    /// # Ok::<_, std::sync::Arc<env_overlay::OverlayError>>(())
    /// ```
    pub fn from_path(path: &Utf8Path) -> OverlayResult<Self> {
        let ext = path.extension().map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(OverlayError::unsupported_format(path)),
        }
    }

    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        })
    }
}

/// Decode `text` into a document value.
///
/// `origin` names where the text came from and is only used for error
/// reporting. Empty YAML documents decode to `Null`.
///
/// # Errors
///
/// Returns [`OverlayError::Parse`] when the text is malformed, including YAML
/// mappings with duplicate keys.
///
/// # Examples
///
/// ```rust
/// use camino::Utf8Path;
/// use env_overlay::codec::{DocumentFormat, decode};
/// use serde_json::json;
///
/// let value = decode(DocumentFormat::Yaml, "enabled: yes\nport: 80\n", Utf8Path::new("values.yaml"))?;
/// assert_eq!(value, json!({"enabled": "yes", "port": 80}));
/// # Ok::<_, std::sync::Arc<env_overlay::OverlayError>>(())
/// ```
pub fn decode(format: DocumentFormat, text: &str, origin: &Utf8Path) -> OverlayResult<Value> {
    match format {
        DocumentFormat::Yaml => {
            yaml::from_str(text).map_err(|err| OverlayError::parse(origin, err.to_string()))
        }
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|err| OverlayError::parse(origin, err))
        }
    }
}

/// Render `value` as text in `format`, always ending with a newline.
///
/// Decoding the result yields `value` again; strings such as `"123"` or
/// `"x: y"` are quoted in YAML output.
///
/// # Errors
///
/// Returns [`OverlayError::Render`] when the emitter rejects the value.
pub fn encode(format: DocumentFormat, value: &Value) -> OverlayResult<String> {
    let mut text = match format {
        DocumentFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|err| OverlayError::render(format, err))?
        }
        DocumentFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|err| OverlayError::render(format, err))?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}
