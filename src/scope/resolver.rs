//! Per-project scope resolution.
//!
//! Source roots and packaging are answered by the *effective* project (the
//! execution project during reactor builds); build output directories always
//! come from the nominal project, since they describe the module actually
//! being built.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::project::Project;
use crate::scope::Variant;

/// Packaging of the project that answers source-root queries.
///
/// This is the execution project's packaging when one is attached.
#[must_use]
pub fn effective_packaging(project: &Project) -> &str {
    &project.effective().packaging
}

/// Compilable source roots of `project` for `variant`.
///
/// Returns an empty list when the effective project is an aggregator,
/// whatever it declares. Otherwise the declared roots are returned verbatim,
/// in declaration order and without deduplication.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use doc_scope::project::Project;
/// # use doc_scope::scope::{Variant, resolve_source_roots};
/// let parent = Project::new("/work/parent")
///     .with_packaging("pom")
///     .with_main_source_roots(vec![PathBuf::from("src/main/java")]);
/// assert!(resolve_source_roots(&parent, Variant::Main).is_empty());
/// ```
#[must_use]
pub fn resolve_source_roots(project: &Project, variant: Variant) -> Vec<PathBuf> {
    let authoritative = project.effective();

    if authoritative.is_aggregator() {
        debug!(
            project = %project.display_name(),
            packaging = %authoritative.packaging,
            "aggregator module has no source roots"
        );
        return Vec::new();
    }

    if project.execution_project.is_some() {
        debug!(
            project = %project.display_name(),
            execution_project = %authoritative.display_name(),
            "answering source roots from the execution project"
        );
    }

    variant
        .policy()
        .declared_source_roots(authoritative)
        .to_vec()
}

/// Compiled class directories of the nominal `project` for `variant`.
///
/// Main output comes first; the test variant appends the test output. Blank
/// or unset directories are skipped.
#[must_use]
pub fn resolve_build_output_dirs(project: &Project, variant: Variant) -> Vec<PathBuf> {
    variant
        .policy()
        .build_output_dirs(project)
        .map(Path::to_path_buf)
        .collect()
}

/// Default documentation output directory: a per-variant subdirectory of the
/// project's build output root.
#[must_use]
pub fn resolve_output_directory(project: &Project, variant: Variant) -> PathBuf {
    project
        .build_root()
        .join(variant.policy().output_directory_name())
}

/// Default resource directory under the project base directory.
#[must_use]
pub fn resolve_resource_directory(project: &Project, variant: Variant) -> PathBuf {
    project
        .basedir
        .join(variant.policy().resource_directory())
}

/// Conventional overview file location.
///
/// The file is not checked for existence. `None` when the project has no
/// base directory to anchor the convention to.
#[must_use]
pub fn resolve_overview(project: &Project, variant: Variant) -> Option<PathBuf> {
    if project.has_blank_basedir() {
        return None;
    }

    let policy = variant.policy();
    Some(resolve_resource_directory(project, variant).join(policy.overview_file_name()))
}
