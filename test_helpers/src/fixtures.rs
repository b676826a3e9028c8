//! Temporary directories populated with named documents.
//!
//! # Examples
//!
//! ```
//! use env_overlay_test_helpers::fixtures::DocumentDir;
//!
//! let docs = DocumentDir::new().expect("create temp dir");
//! let base = docs.write("values.yaml", "replicas: 1\n").expect("write base");
//! assert!(base.ends_with("values.yaml"));
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use tempfile::TempDir;

/// Temporary directory removed on drop, addressed with UTF-8 paths.
pub struct DocumentDir {
    root: Utf8PathBuf,
    dir: Dir,
    _temp: TempDir,
}

impl DocumentDir {
    /// Creates an empty temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, is not valid
    /// UTF-8, or cannot be opened.
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp dir")?;
        let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
            .map_err(|path| anyhow!("temp dir is not valid UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&root, ambient_authority())
            .with_context(|| format!("open {root}"))?;
        Ok(Self {
            root,
            dir,
            _temp: temp,
        })
    }

    /// Root of the directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Absolute path of `name` inside the directory, whether or not it exists.
    #[must_use]
    pub fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Writes `contents` to `name` and returns its absolute path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&self, name: &str, contents: &str) -> Result<Utf8PathBuf> {
        self.dir
            .write(name, contents)
            .with_context(|| format!("write {name}"))?;
        Ok(self.path(name))
    }

    /// Reads `name` back as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn read(&self, name: &str) -> Result<String> {
        self.dir
            .read_to_string(name)
            .with_context(|| format!("read {name}"))
    }

    /// Whether `name` exists inside the directory.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.dir.exists(name)
    }
}
