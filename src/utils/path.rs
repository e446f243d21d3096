//! Path helpers for optional and relative directory values.
//!
//! Build descriptors frequently carry directory values that are present but
//! empty. These helpers give every caller the same notion of "not configured"
//! and the same rule for anchoring relative paths.

use std::path::{Path, PathBuf};

/// Whether a path is empty or consists only of whitespace.
///
/// A blank directory value is treated as "not configured" everywhere in the
/// crate and is never surfaced as an empty entry.
///
/// # Examples
///
/// ```
/// # use std::path::Path;
/// # use doc_scope::utils::is_blank;
/// assert!(is_blank(Path::new("")));
/// assert!(is_blank(Path::new("   ")));
/// assert!(!is_blank(Path::new("target/classes")));
/// ```
#[must_use]
pub fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Filter an optional path down to a configured (non-blank) value.
#[must_use]
pub fn non_blank(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !is_blank(p))
}

/// Resolve `path` against `base` when it is relative.
///
/// Absolute paths are returned unchanged.
#[must_use]
pub fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
