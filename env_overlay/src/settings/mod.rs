//! Tool settings gathered from defaults, a TOML file, the environment and
//! command-line overrides.
//!
//! Layers are merged with Figment in increasing precedence:
//!
//! 1. built-in defaults;
//! 2. the TOML settings file, when it exists;
//! 3. environment variables prefixed with `ENV_OVERLAY_`;
//! 4. explicit overrides, typically from command-line flags.

use camino::{Utf8Path, Utf8PathBuf};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::session::NamingConvention;
use crate::{OverlayResult, OverlayResultExt};

/// Prefix of environment variables read as settings.
pub const ENV_PREFIX: &str = "ENV_OVERLAY_";

/// Settings file consulted when no explicit path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "env-overlay.toml";

/// Resolved settings for a run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// File name of the base document.
    pub base_name: String,
    /// Leading segment of override document names.
    pub override_prefix: String,
    /// Leading segment of generated output names.
    pub output_prefix: String,
    /// Extension shared by override and output documents.
    pub extension: String,
    /// Directory generated documents are written to.
    pub output_dir: Utf8PathBuf,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        let NamingConvention {
            base_name,
            override_prefix,
            output_prefix,
            extension,
        } = NamingConvention::default();
        Self {
            base_name,
            override_prefix,
            output_prefix,
            extension,
            output_dir: default_output_dir(),
        }
    }
}

/// The user's download directory, or `.` when it cannot be determined.
fn default_output_dir() -> Utf8PathBuf {
    dirs::download_dir()
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from("."))
}

/// Optional overrides applied on top of every other layer.
///
/// Fields left as `None` do not touch lower layers.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct SettingsOverrides {
    /// Replacement base document name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_name: Option<String>,
    /// Replacement override prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_prefix: Option<String>,
    /// Replacement output prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_prefix: Option<String>,
    /// Replacement extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Replacement output directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<Utf8PathBuf>,
}

impl OverlaySettings {
    /// Load settings, layering `overrides` over the environment, the settings
    /// file and the defaults.
    ///
    /// `settings_file` defaults to [`DEFAULT_SETTINGS_FILE`] in the working
    /// directory. A missing file is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`crate::OverlayError::Settings`] when a layer is malformed or
    /// a value has the wrong type.
    pub fn load(
        settings_file: Option<&Utf8Path>,
        overrides: &SettingsOverrides,
    ) -> OverlayResult<Self> {
        let file = settings_file.unwrap_or_else(|| Utf8Path::new(DEFAULT_SETTINGS_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .into_overlay()
    }

    /// Naming convention described by these settings.
    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        NamingConvention {
            base_name: self.base_name.clone(),
            override_prefix: self.override_prefix.clone(),
            output_prefix: self.output_prefix.clone(),
            extension: self.extension.clone(),
        }
    }
}
