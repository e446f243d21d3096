//! The resolved documentation scope handed to the generator.

use std::path::PathBuf;

use serde::Serialize;

use crate::project::Artifact;
use crate::scope::Variant;

/// Title strings of a documentation run.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct Titles {
    /// Title placed near the top of the overview page
    pub doctitle: String,

    /// Title placed in the HTML title tag
    pub windowtitle: String,
}

/// Everything a documentation generator needs for one module and variant.
///
/// Built fresh on every call to
/// [`VariantPolicy::resolve`](crate::scope::VariantPolicy::resolve); it is
/// never partially populated.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct DocumentationScope {
    /// Variant this scope was resolved for
    pub variant: Variant,

    /// Compilable source roots, in declaration order
    pub source_roots: Vec<PathBuf>,

    /// Compiled class directories added to the classpath, main before test
    pub build_output_dirs: Vec<PathBuf>,

    /// Classpath artifacts, deduplicated and sorted by identity
    pub classpath_artifacts: Vec<Artifact>,

    /// Destination directory of the generated documentation
    pub output_directory: PathBuf,

    /// Directory of extra documentation resources
    pub resource_directory: PathBuf,

    /// Overview source file; existence is checked by the generator
    pub overview_file: Option<PathBuf>,

    /// Title strings
    pub titles: Titles,

    /// Classifier of the documentation bundle built from this scope
    pub classifier: String,
}

impl DocumentationScope {
    /// Whether there is at least one source root to document.
    #[must_use]
    pub const fn has_sources(&self) -> bool {
        !self.source_roots.is_empty()
    }

    /// Full classpath: build output directories first, then artifact files.
    ///
    /// Artifacts without a resolved file are skipped.
    #[must_use]
    pub fn classpath(&self) -> Vec<PathBuf> {
        self.build_output_dirs
            .iter()
            .cloned()
            .chain(
                self.classpath_artifacts
                    .iter()
                    .filter_map(|artifact| artifact.file.clone()),
            )
            .collect()
    }
}
