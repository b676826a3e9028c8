//! File-name policy linking environments to override and output documents.

use serde::{Deserialize, Serialize};

/// Naming convention for the documents a session works with.
///
/// With the defaults, the base document is `values.yaml`, the override for
/// environment `prod` is `override.prod.yaml` and the generated output is
/// `final.prod.yaml`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NamingConvention {
    /// File name of the base document.
    pub base_name: String,
    /// Leading segment of override document names.
    pub override_prefix: String,
    /// Leading segment of generated output names.
    pub output_prefix: String,
    /// Extension (without the dot) shared by override and output documents.
    pub extension: String,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self {
            base_name: "values.yaml".to_owned(),
            override_prefix: "override".to_owned(),
            output_prefix: "final".to_owned(),
            extension: "yaml".to_owned(),
        }
    }
}

impl NamingConvention {
    /// File name of the override document for `environment`.
    ///
    /// ```rust
    /// use env_overlay::session::NamingConvention;
    ///
    /// let naming = NamingConvention::default();
    /// assert_eq!(naming.override_name("prod"), "override.prod.yaml");
    /// ```
    #[must_use]
    pub fn override_name(&self, environment: &str) -> String {
        format!("{}.{environment}.{}", self.override_prefix, self.extension)
    }

    /// File name of the generated output for `environment`.
    #[must_use]
    pub fn output_name(&self, environment: &str) -> String {
        format!("{}.{environment}.{}", self.output_prefix, self.extension)
    }

    /// Extract the environment from an override document name.
    ///
    /// Returns `None` unless `file_name` is `<prefix>.<env>.<extension>` with
    /// a non-empty `<env>`.
    ///
    /// ```rust
    /// use env_overlay::session::NamingConvention;
    ///
    /// let naming = NamingConvention::default();
    /// assert_eq!(naming.environment_of("override.staging.yaml"), Some("staging"));
    /// assert_eq!(naming.environment_of("values.yaml"), None);
    /// ```
    #[must_use]
    pub fn environment_of<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let environment = file_name
            .strip_prefix(self.override_prefix.as_str())?
            .strip_prefix('.')?
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')?;
        (!environment.is_empty()).then_some(environment)
    }

    /// Whether `file_name` is the base document.
    #[must_use]
    pub fn is_base(&self, file_name: &str) -> bool {
        file_name == self.base_name
    }
}
