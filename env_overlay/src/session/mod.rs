//! Loaded-document state for a run of the tool.
//!
//! A [`DocumentSession`] is populated as files are loaded, read when merging
//! and comparing, and never cleared within a run. It is an ordinary value
//! owned by whoever orchestrates the merges.

mod naming;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tracing::{debug, warn};

use crate::codec::{self, DocumentFormat};
use crate::{OverlayError, OverlayResult, fs, merge};

pub use naming::NamingConvention;

/// A parsed document together with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedDocument {
    name: String,
    path: Option<Utf8PathBuf>,
    value: Value,
}

impl LoadedDocument {
    /// File name the document is registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Original path, when the document was loaded from disk.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    /// Parsed document contents.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Documents loaded for one run, keyed by file name.
#[derive(Clone, Debug, Default)]
pub struct DocumentSession {
    naming: NamingConvention,
    documents: BTreeMap<String, LoadedDocument>,
}

impl DocumentSession {
    /// Create an empty session using `naming` to locate documents.
    #[must_use]
    pub const fn new(naming: NamingConvention) -> Self {
        Self {
            naming,
            documents: BTreeMap::new(),
        }
    }

    /// Naming convention in use.
    #[must_use]
    pub const fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Read and decode the file at `path`, registering it under its file name.
    ///
    /// A document already registered under the same name is replaced.
    ///
    /// # Errors
    ///
    /// Returns an [`OverlayError`] when the path has no file name, uses an
    /// unsupported extension, cannot be read, or fails to parse.
    pub fn load_file(&mut self, path: &Utf8Path) -> OverlayResult<&LoadedDocument> {
        let name = path.file_name().ok_or_else(|| {
            OverlayError::file(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "document path has no file name",
                ),
            )
        })?;
        let format = DocumentFormat::from_path(path)?;
        let text = fs::read_text(path).map_err(|err| OverlayError::file(path, err))?;
        let value = codec::decode(format, &text, path)?;
        debug!(%path, %format, "loaded document");
        Ok(self.register(LoadedDocument {
            name: name.to_owned(),
            path: Some(path.to_path_buf()),
            value,
        }))
    }

    /// Load every path in `paths`, returning how many succeeded.
    ///
    /// Each file is loaded independently: successes stay in the session even
    /// when other files fail.
    ///
    /// # Errors
    ///
    /// Returns the failure itself when one file fails, or
    /// [`OverlayError::Aggregate`] listing every failure when several do.
    pub fn load_files<I, P>(&mut self, paths: I) -> OverlayResult<usize>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Utf8Path>,
    {
        let mut loaded = 0;
        let mut failures = Vec::new();
        for candidate in paths {
            let path = candidate.as_ref();
            let Err(err) = self.load_file(path) else {
                loaded += 1;
                continue;
            };
            warn!(%path, error = %err, "failed to load document");
            failures.push(err);
        }
        OverlayError::try_aggregate(failures).map_or(Ok(loaded), |err| Err(Arc::new(err)))
    }

    /// Register an already-parsed document under `name`.
    ///
    /// Returns the document previously registered under that name, if any.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<LoadedDocument> {
        let document = LoadedDocument {
            name: name.into(),
            path: None,
            value,
        };
        self.documents.insert(document.name.clone(), document)
    }

    fn register(&mut self, document: LoadedDocument) -> &LoadedDocument {
        match self.documents.entry(document.name.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(document);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(document),
        }
    }

    /// Look up a document by file name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LoadedDocument> {
        self.documents.get(name)
    }

    /// Loaded documents with the base first, then the rest by name.
    pub fn documents(&self) -> impl Iterator<Item = &LoadedDocument> {
        let base = self.documents.get(&self.naming.base_name);
        let rest = self
            .documents
            .values()
            .filter(|document| !self.naming.is_base(&document.name));
        base.into_iter().chain(rest)
    }

    /// Names of loaded documents in [`Self::documents`] order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.documents().map(LoadedDocument::name).collect()
    }

    /// Number of loaded documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no document has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Environments that have an override document loaded, sorted.
    #[must_use]
    pub fn environments(&self) -> Vec<String> {
        let mut environments: Vec<String> = self
            .documents
            .keys()
            .filter_map(|name| self.naming.environment_of(name))
            .map(str::to_owned)
            .collect();
        environments.sort();
        environments
    }

    /// Merge the override for `environment` onto the base document.
    ///
    /// Session documents are cloned into the merge and stay untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OverlayError::UnknownEnvironment`] when no override for
    /// `environment` is loaded and [`OverlayError::MissingDocument`] when the
    /// base document is absent.
    pub fn merge_for(&self, environment: &str) -> OverlayResult<Value> {
        let override_name = self.naming.override_name(environment);
        let overlay = self.documents.get(&override_name).ok_or_else(|| {
            let available = self.environments();
            Arc::new(OverlayError::UnknownEnvironment {
                environment: environment.to_owned(),
                available: if available.is_empty() {
                    "none".to_owned()
                } else {
                    available.join(", ")
                },
            })
        })?;
        let base = self.documents.get(&self.naming.base_name).ok_or_else(|| {
            Arc::new(OverlayError::MissingDocument {
                name: self.naming.base_name.clone(),
            })
        })?;
        debug!(
            environment,
            base = %base.name,
            overlay = %overlay.name,
            "merging documents"
        );
        Ok(merge::merge(base.value.clone(), overlay.value.clone()))
    }
}
