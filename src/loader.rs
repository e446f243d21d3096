//! Module descriptor loading and discovery.
//!
//! A module descriptor is a JSON file holding an already-parsed project and
//! its resolution result:
//!
//! ```json
//! {
//!   "project": {
//!     "name": "core",
//!     "version": "1.0.0",
//!     "packaging": "jar",
//!     "basedir": ".",
//!     "test_source_roots": ["src/test/java"],
//!     "main_output_directory": "target/classes",
//!     "test_output_directory": "target/test-classes"
//!   },
//!   "resolution": {
//!     "artifacts": [
//!       { "group_id": "org.slf4j", "artifact_id": "slf4j-api", "version": "2.0.9", "scope": "compile" }
//!     ]
//!   }
//! }
//! ```
//!
//! Descriptors are produced by the build orchestrator; this module never
//! reads build files itself.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryOptions;
use crate::project::Project;
use crate::reactor::{ModuleDescriptor, Reactor};
use crate::utils::{anchor, is_blank};

/// File name looked up when walking directories.
pub const DESCRIPTOR_FILE_NAME: &str = "docscope.json";

/// Directories never descended into during discovery.
const EXCLUDED_DIRS: &[&str] = &["target", "node_modules"];

/// Load one module descriptor.
///
/// A relative `basedir` (in the project or its execution project) is
/// anchored to the directory containing the descriptor. A blank `basedir` is
/// kept blank so the resolver reports it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid descriptor.
pub fn load_descriptor(path: &Path) -> Result<ModuleDescriptor> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read descriptor {}", path.display()))?;

    let mut descriptor: ModuleDescriptor = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse descriptor {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    anchor_basedir(&mut descriptor.project, base);
    if let Some(execution) = descriptor.project.execution_project.as_deref_mut() {
        anchor_basedir(execution, base);
    }

    debug!(descriptor = %path.display(), project = %descriptor.project, "loaded descriptor");
    Ok(descriptor)
}

fn anchor_basedir(project: &mut Project, base: &Path) {
    if !is_blank(&project.basedir) {
        project.basedir = anchor(base, &project.basedir);
    }
}

/// Find every descriptor file below `root`, sorted by path.
///
/// Hidden directories, `target` and `node_modules` are not descended into,
/// except when they are `root` itself.
#[must_use]
pub fn discover_descriptors(root: &Path, options: &DiscoveryOptions) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root);
    if let Some(max_depth) = options.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let mut found: Vec<PathBuf> = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || should_descend(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("{err}");
                None
            }
        })
        .filter(|entry| {
            entry.file_type().is_file() && entry.file_name() == DESCRIPTOR_FILE_NAME
        })
        .map(DirEntry::into_path)
        .collect();

    found.sort();
    found
}

/// Whether a walked entry may be visited (files) or descended into (directories).
fn should_descend(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return true;
    }

    entry
        .file_name()
        .to_str()
        .is_some_and(|name| !name.starts_with('.') && !EXCLUDED_DIRS.contains(&name))
}

/// Build a reactor from descriptor files and directories.
///
/// Files are loaded directly; directories are searched with
/// [`discover_descriptors`]. Modules keep the order of `paths`, then path
/// order within each directory.
///
/// # Errors
///
/// Returns an error if a path does not exist or a descriptor fails to load.
pub fn load_reactor(paths: &[PathBuf], options: &DiscoveryOptions) -> Result<Reactor> {
    let mut modules = Vec::new();

    for path in paths {
        if path.is_dir() {
            for descriptor in discover_descriptors(path, options) {
                modules.push(load_descriptor(&descriptor)?);
            }
        } else if path.is_file() {
            modules.push(load_descriptor(path)?);
        } else {
            bail!("No such descriptor file or directory: {}", path.display());
        }
    }

    Ok(modules.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    const MINIMAL: &str = r#"{ "project": { "name": "m", "basedir": "." } }"#;

    #[test]
    fn test_load_descriptor_anchors_relative_basedir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("core").join(DESCRIPTOR_FILE_NAME);
        write(&path, MINIMAL);

        let descriptor = load_descriptor(&path).unwrap();

        assert_eq!(descriptor.project.basedir, dir.path().join("core").join("."));
    }

    #[test]
    fn test_load_descriptor_keeps_absolute_and_blank_basedir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DESCRIPTOR_FILE_NAME);

        write(&path, r#"{ "project": { "basedir": "/abs/core" } }"#);
        assert_eq!(
            load_descriptor(&path).unwrap().project.basedir,
            PathBuf::from("/abs/core")
        );

        write(&path, r#"{ "project": { "packaging": "jar" } }"#);
        assert!(load_descriptor(&path).unwrap().project.has_blank_basedir());
    }

    #[test]
    fn test_load_descriptor_anchors_execution_project() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DESCRIPTOR_FILE_NAME);
        write(
            &path,
            r#"{ "project": { "packaging": "pom", "basedir": ".",
                 "execution_project": { "basedir": "core" } } }"#,
        );

        let descriptor = load_descriptor(&path).unwrap();
        let execution = descriptor.project.execution_project.unwrap();

        assert_eq!(execution.basedir, dir.path().join("core"));
    }

    #[test]
    fn test_load_descriptor_reports_path_on_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DESCRIPTOR_FILE_NAME);
        write(&path, "{ not json");

        let err = load_descriptor(&path).unwrap_err();
        assert!(format!("{err:#}").contains(DESCRIPTOR_FILE_NAME));
    }

    #[test]
    fn test_load_descriptor_rejects_unknown_scope() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DESCRIPTOR_FILE_NAME);
        write(
            &path,
            r#"{ "project": { "basedir": "." },
                 "resolution": { "artifacts": [
                   { "group_id": "g", "artifact_id": "a", "version": "1", "scope": "everywhere" }
                 ] } }"#,
        );

        assert!(load_descriptor(&path).is_err());
    }

    #[test]
    fn test_discover_descriptors_sorted_and_pruned() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("b").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("a").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("a").join("target").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join(".hidden").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("c").join("other.json"), MINIMAL);

        let found = discover_descriptors(root, &DiscoveryOptions::default());

        assert_eq!(
            found,
            vec![
                root.join("a").join(DESCRIPTOR_FILE_NAME),
                root.join("b").join(DESCRIPTOR_FILE_NAME),
                root.join(DESCRIPTOR_FILE_NAME),
            ]
        );
    }

    #[test]
    fn test_discover_descriptors_keeps_modules_named_build_or_out() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join("core").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("build").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("out").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join(".git").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("node_modules").join(DESCRIPTOR_FILE_NAME), MINIMAL);

        let found = discover_descriptors(root, &DiscoveryOptions::default());

        assert_eq!(
            found,
            vec![
                root.join("build").join(DESCRIPTOR_FILE_NAME),
                root.join("core").join(DESCRIPTOR_FILE_NAME),
                root.join("out").join(DESCRIPTOR_FILE_NAME),
            ]
        );
    }

    #[test]
    fn test_discover_descriptors_respects_max_depth() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(&root.join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("deep").join("er").join(DESCRIPTOR_FILE_NAME), MINIMAL);

        let found = discover_descriptors(root, &DiscoveryOptions { max_depth: Some(1) });

        assert_eq!(found, vec![root.join(DESCRIPTOR_FILE_NAME)]);
    }

    #[test]
    fn test_load_reactor_mixes_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let single = root.join("single.json");
        write(&single, MINIMAL);
        write(&root.join("tree").join("x").join(DESCRIPTOR_FILE_NAME), MINIMAL);
        write(&root.join("tree").join("y").join(DESCRIPTOR_FILE_NAME), MINIMAL);

        let reactor = load_reactor(
            &[single, root.join("tree")],
            &DiscoveryOptions::default(),
        )
        .unwrap();

        assert_eq!(reactor.len(), 3);
    }

    #[test]
    fn test_load_reactor_missing_path_errors() {
        let dir = TempDir::new().unwrap();
        let result = load_reactor(&[dir.path().join("absent")], &DiscoveryOptions::default());

        assert!(result.is_err());
    }
}
