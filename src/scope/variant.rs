//! Variant selection and the per-variant policy table.
//!
//! A [`Variant`] picks which half of a project's dual main/test configuration
//! is authoritative. Its [`VariantPolicy`] is a static table of field
//! selectors and defaults; there is one policy per variant and no other
//! source of variant-specific behavior.

use std::{
    fmt::{self, Display, Formatter},
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScopeOverrides;
use crate::error::{Result, ScopeError};
use crate::project::{DependencyScope, Project, ResolutionResult};
use crate::scope::{
    DocumentationScope, Titles, filter_classpath_artifacts, resolve_build_output_dirs,
    resolve_output_directory, resolve_overview, resolve_resource_directory, resolve_source_roots,
};
use crate::utils::anchor;

/// Which part of a project is being documented.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Production sources (`API` documentation)
    #[default]
    Main,

    /// Test sources (`Test API` documentation)
    Test,
}

impl Variant {
    /// Both variants, main first.
    pub const ALL: [Self; 2] = [Self::Main, Self::Test];

    /// The policy bound to this variant.
    #[must_use]
    pub fn policy(self) -> &'static VariantPolicy {
        match self {
            Self::Main => &MAIN_POLICY,
            Self::Test => &TEST_POLICY,
        }
    }

    /// Lower-case name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type SourceRootSelector = fn(&Project) -> &[PathBuf];
type OutputDirSelector = fn(&Project) -> Option<&Path>;

fn main_source_roots(project: &Project) -> &[PathBuf] {
    &project.main_source_roots
}

fn test_source_roots(project: &Project) -> &[PathBuf] {
    &project.test_source_roots
}

/// Artifact scopes visible to main sources.
const MAIN_SCOPES: &[DependencyScope] = &[
    DependencyScope::Compile,
    DependencyScope::Provided,
    DependencyScope::System,
];

/// Artifact scopes visible to test sources. Must start with [`MAIN_SCOPES`].
const TEST_SCOPES: &[DependencyScope] = &[
    DependencyScope::Compile,
    DependencyScope::Provided,
    DependencyScope::System,
    DependencyScope::Test,
];

/// File name of the overview page inside the resource directory.
const OVERVIEW_FILE_NAME: &str = "overview.html";

static MAIN_POLICY: VariantPolicy = VariantPolicy {
    variant: Variant::Main,
    source_roots: main_source_roots,
    build_outputs: &[Project::main_output],
    artifact_scopes: MAIN_SCOPES,
    output_directory_name: "apidocs",
    resource_directory: "src/main/javadoc",
    title_suffix: "API",
    classifier: "javadoc",
};

static TEST_POLICY: VariantPolicy = VariantPolicy {
    variant: Variant::Test,
    source_roots: test_source_roots,
    build_outputs: &[Project::main_output, Project::test_output],
    artifact_scopes: TEST_SCOPES,
    output_directory_name: "testapidocs",
    resource_directory: "src/test/javadoc",
    title_suffix: "Test API",
    classifier: "test-javadoc",
};

/// Variant-specific field selectors and defaults.
///
/// Obtain one through [`Variant::policy`] or [`VariantPolicy::for_variant`].
/// [`resolve`](Self::resolve) is the single entry point an orchestrator needs.
#[derive(Debug)]
pub struct VariantPolicy {
    variant: Variant,
    source_roots: SourceRootSelector,
    build_outputs: &'static [OutputDirSelector],
    artifact_scopes: &'static [DependencyScope],
    output_directory_name: &'static str,
    resource_directory: &'static str,
    title_suffix: &'static str,
    classifier: &'static str,
}

impl VariantPolicy {
    /// The policy bound to `variant`.
    #[must_use]
    pub fn for_variant(variant: Variant) -> &'static Self {
        variant.policy()
    }

    /// The variant this policy belongs to.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Declared source roots of `project` for this variant, without any
    /// packaging or substitution rule applied.
    #[must_use]
    pub fn declared_source_roots<'a>(&self, project: &'a Project) -> &'a [PathBuf] {
        (self.source_roots)(project)
    }

    /// Configured build output directories of `project`, in policy order.
    pub fn build_output_dirs<'a>(&self, project: &'a Project) -> impl Iterator<Item = &'a Path> {
        self.build_outputs
            .iter()
            .filter_map(move |select| select(project))
    }

    /// Dependency scopes whose artifacts belong on the classpath.
    ///
    /// The test list extends the main list, so a shared prefix is guaranteed.
    #[must_use]
    pub const fn artifact_scopes(&self) -> &'static [DependencyScope] {
        self.artifact_scopes
    }

    /// Name of the documentation directory under the build output root.
    #[must_use]
    pub const fn output_directory_name(&self) -> &'static str {
        self.output_directory_name
    }

    /// Resource directory, relative to the project base directory.
    #[must_use]
    pub const fn resource_directory(&self) -> &'static str {
        self.resource_directory
    }

    /// File name of the overview page inside the resource directory.
    #[must_use]
    pub const fn overview_file_name(&self) -> &'static str {
        OVERVIEW_FILE_NAME
    }

    /// Suffix appended to default titles (`API` or `Test API`).
    #[must_use]
    pub const fn title_suffix(&self) -> &'static str {
        self.title_suffix
    }

    /// Classifier of the documentation bundle.
    #[must_use]
    pub const fn classifier(&self) -> &'static str {
        self.classifier
    }

    /// Default title: `{name} {version} {suffix}`, skipping missing parts.
    #[must_use]
    pub fn default_title(&self, project: &Project) -> String {
        let name = project.display_name();
        let version = project.version.as_deref().map(str::trim).unwrap_or_default();

        [name.as_str(), version, self.title_suffix]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve the documentation scope of `project` with variant defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidInput`] if the project has no base
    /// directory or `resolution` is marked as failed.
    pub fn resolve(
        &self,
        project: &Project,
        resolution: &ResolutionResult,
    ) -> Result<DocumentationScope> {
        self.resolve_with(project, resolution, &ScopeOverrides::default())
    }

    /// Resolve the documentation scope of `project`, letting `overrides`
    /// replace individual defaults.
    ///
    /// Relative override paths are anchored to the project base directory.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::InvalidInput`] if the project has no base
    /// directory or `resolution` is marked as failed. No partial scope is
    /// ever returned.
    pub fn resolve_with(
        &self,
        project: &Project,
        resolution: &ResolutionResult,
        overrides: &ScopeOverrides,
    ) -> Result<DocumentationScope> {
        if project.has_blank_basedir() {
            let name = project.name.as_deref().unwrap_or("<unnamed>");
            return Err(ScopeError::InvalidInput(format!(
                "project `{name}` has no base directory"
            )));
        }

        let variant = self.variant;
        let classpath_artifacts = filter_classpath_artifacts(resolution, variant)?;
        let source_roots = resolve_source_roots(project, variant);
        let build_output_dirs = resolve_build_output_dirs(project, variant);

        let output_directory = overrides.output_directory().map_or_else(
            || resolve_output_directory(project, variant),
            |dir| anchor(&project.basedir, dir),
        );
        let resource_directory = overrides.resource_directory().map_or_else(
            || resolve_resource_directory(project, variant),
            |dir| anchor(&project.basedir, dir),
        );
        let overview_file = overrides
            .overview()
            .map(|file| anchor(&project.basedir, file))
            .or_else(|| resolve_overview(project, variant));

        let default_title = self.default_title(project);
        let titles = Titles {
            doctitle: overrides
                .doctitle()
                .map_or_else(|| default_title.clone(), str::to_string),
            windowtitle: overrides
                .windowtitle()
                .map_or(default_title, str::to_string),
        };

        debug!(
            project = %project.display_name(),
            %variant,
            source_roots = source_roots.len(),
            build_output_dirs = build_output_dirs.len(),
            classpath_artifacts = classpath_artifacts.len(),
            "resolved documentation scope"
        );

        Ok(DocumentationScope {
            variant,
            source_roots,
            build_output_dirs,
            classpath_artifacts,
            output_directory,
            resource_directory,
            overview_file,
            titles,
            classifier: self.classifier.to_string(),
        })
    }
}
