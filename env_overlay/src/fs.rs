//! Filesystem helpers for reading and writing document files via `cap-std`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Open the parent directory of `path` and extract the file name.
///
/// # Errors
///
/// Returns an [`std::io::Error`] if the file name cannot be determined or the
/// parent directory cannot be opened.
fn open_parent_dir_and_name(path: &Utf8Path) -> std::io::Result<(Dir, String)> {
    let parent = parent_or_dot(path);
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("cannot determine file name for document path"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name.to_owned()))
}

/// Read the whole file at `path` as UTF-8 text.
pub(crate) fn read_text(path: &Utf8Path) -> std::io::Result<String> {
    let (dir, name) = open_parent_dir_and_name(path)?;
    dir.read_to_string(name)
}

/// Write `contents` to `path`, creating missing parent directories first.
pub(crate) fn write_text(path: &Utf8Path, contents: &str) -> std::io::Result<()> {
    Dir::create_ambient_dir_all(parent_or_dot(path), ambient_authority())?;
    let (dir, name) = open_parent_dir_and_name(path)?;
    dir.write(name, contents)
}
