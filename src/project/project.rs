//! Core build module descriptor.
//!
//! This module defines [`Project`], the parsed description of a single build
//! module: its packaging, declared source roots, build output directories and
//! the optional execution project substituted during reactor builds.

use std::{
    fmt::{Display, Formatter, Result},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::utils::{anchor, is_blank, non_blank};

/// Packaging value of an aggregator module, which owns no compiled sources.
pub const AGGREGATOR_PACKAGING: &str = "pom";

/// Packaging assumed when a descriptor does not declare one.
pub const DEFAULT_PACKAGING: &str = "jar";

/// Build output root used when a project does not configure one.
const DEFAULT_BUILD_DIRECTORY: &str = "target";

fn default_packaging() -> String {
    DEFAULT_PACKAGING.to_string()
}

/// A build module descriptor.
///
/// All fields are plain data supplied by the orchestrator that parsed the
/// build files. Source roots and output directories are kept exactly as
/// declared; only the documentation-specific defaults (output directory,
/// overview, resources) are anchored to [`basedir`](Self::basedir).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Human-readable module name, used in default titles.
    #[serde(default)]
    pub name: Option<String>,

    /// Module version, used in default titles.
    #[serde(default)]
    pub version: Option<String>,

    /// Packaging type (`jar`, `pom`, `war`, ...). Compared case-insensitively.
    #[serde(default = "default_packaging")]
    pub packaging: String,

    /// Module root directory. Required; a blank value is rejected by the resolver.
    #[serde(default)]
    pub basedir: PathBuf,

    /// Build output root (`target/` by default).
    #[serde(default)]
    pub build_directory: Option<PathBuf>,

    /// Compile source roots of the main code, in declaration order.
    #[serde(default)]
    pub main_source_roots: Vec<PathBuf>,

    /// Compile source roots of the test code, in declaration order.
    #[serde(default)]
    pub test_source_roots: Vec<PathBuf>,

    /// Directory receiving compiled main classes.
    #[serde(default)]
    pub main_output_directory: Option<PathBuf>,

    /// Directory receiving compiled test classes.
    #[serde(default)]
    pub test_output_directory: Option<PathBuf>,

    /// Project substituted for this one when running inside a reactor or
    /// forked execution. Only one level of substitution is honored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_project: Option<Box<Self>>,
}

impl Project {
    /// Create a project rooted at `basedir` with default packaging and no
    /// declared directories.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use doc_scope::project::Project;
    /// let project = Project::new("/work/core")
    ///     .with_name("core")
    ///     .with_main_source_roots(vec!["src/main/java".into()]);
    /// assert_eq!(project.packaging, "jar");
    /// ```
    #[must_use]
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            name: None,
            version: None,
            packaging: default_packaging(),
            basedir: basedir.into(),
            build_directory: None,
            main_source_roots: Vec::new(),
            test_source_roots: Vec::new(),
            main_output_directory: None,
            test_output_directory: None,
            execution_project: None,
        }
    }

    /// Set the module name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the module version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the packaging type.
    #[must_use]
    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    /// Set the build output root.
    #[must_use]
    pub fn with_build_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.build_directory = Some(dir.into());
        self
    }

    /// Set the main compile source roots.
    #[must_use]
    pub fn with_main_source_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.main_source_roots = roots;
        self
    }

    /// Set the test compile source roots.
    #[must_use]
    pub fn with_test_source_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.test_source_roots = roots;
        self
    }

    /// Set the main classes output directory.
    #[must_use]
    pub fn with_main_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.main_output_directory = Some(dir.into());
        self
    }

    /// Set the test classes output directory.
    #[must_use]
    pub fn with_test_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_output_directory = Some(dir.into());
        self
    }

    /// Attach the execution project used during reactor builds.
    #[must_use]
    pub fn with_execution_project(mut self, execution: Self) -> Self {
        self.execution_project = Some(Box::new(execution));
        self
    }

    /// The project that answers source-root and packaging queries.
    ///
    /// This is the execution project when one is attached, otherwise `self`.
    #[must_use]
    pub fn effective(&self) -> &Self {
        self.execution_project.as_deref().unwrap_or(self)
    }

    /// Whether this project's own packaging marks it as an aggregator.
    ///
    /// The comparison is an ASCII case fold so the result never depends on
    /// the process locale.
    #[must_use]
    pub fn is_aggregator(&self) -> bool {
        self.packaging.eq_ignore_ascii_case(AGGREGATOR_PACKAGING)
    }

    /// Whether the module root is missing.
    #[must_use]
    pub fn has_blank_basedir(&self) -> bool {
        is_blank(&self.basedir)
    }

    /// Configured main output directory, if not blank.
    #[must_use]
    pub fn main_output(&self) -> Option<&Path> {
        non_blank(self.main_output_directory.as_deref())
    }

    /// Configured test output directory, if not blank.
    #[must_use]
    pub fn test_output(&self) -> Option<&Path> {
        non_blank(self.test_output_directory.as_deref())
    }

    /// Build output root, anchored to the base directory.
    ///
    /// Falls back to `{basedir}/target` when nothing is configured.
    #[must_use]
    pub fn build_root(&self) -> PathBuf {
        non_blank(self.build_directory.as_deref()).map_or_else(
            || self.basedir.join(DEFAULT_BUILD_DIRECTORY),
            |dir| anchor(&self.basedir, dir),
        )
    }

    /// Name used in titles and reports.
    ///
    /// Falls back to the last component of the base directory.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim)
            && !name.is_empty()
        {
            return name.to_string();
        }

        self.basedir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl Display for Project {
    /// Format the project with a packaging icon, its name and its root.
    ///
    /// - `📚 parent (/work/parent)` for aggregators
    /// - `☕ core (/work/core)` for every other packaging
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let icon = if self.is_aggregator() { "📚" } else { "☕" };

        match self.name.as_deref() {
            Some(name) => write!(f, "{icon} {name} ({})", self.basedir.display()),
            None => write!(f, "{icon} {}", self.basedir.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_defaults() {
        let project = Project::new("/work/core");

        assert_eq!(project.packaging, DEFAULT_PACKAGING);
        assert!(project.main_source_roots.is_empty());
        assert!(project.test_source_roots.is_empty());
        assert!(project.execution_project.is_none());
        assert!(!project.is_aggregator());
    }

    #[test]
    fn test_is_aggregator_case_insensitive() {
        for packaging in ["pom", "POM", "Pom", "pOm"] {
            let project = Project::new("/work/parent").with_packaging(packaging);
            assert!(project.is_aggregator(), "{packaging} should be an aggregator");
        }

        for packaging in ["jar", "war", "pom2", " pom", "maven-plugin"] {
            let project = Project::new("/work/module").with_packaging(packaging);
            assert!(!project.is_aggregator(), "{packaging} is not an aggregator");
        }
    }

    #[test]
    fn test_effective_without_execution_project() {
        let project = Project::new("/work/core").with_name("core");
        assert_eq!(project.effective(), &project);
    }

    #[test]
    fn test_effective_uses_execution_project() {
        let execution = Project::new("/work/core").with_name("core");
        let project = Project::new("/work/parent")
            .with_packaging("pom")
            .with_execution_project(execution.clone());

        assert_eq!(project.effective(), &execution);
    }

    #[test]
    fn test_effective_is_single_level() {
        let innermost = Project::new("/work/innermost");
        let middle = Project::new("/work/middle").with_execution_project(innermost);
        let project = Project::new("/work/outer").with_execution_project(middle.clone());

        assert_eq!(project.effective().basedir, middle.basedir);
    }

    #[test]
    fn test_blank_output_directories_are_unset() {
        let project = Project::new("/work/core")
            .with_main_output_directory("")
            .with_test_output_directory("  ");

        assert_eq!(project.main_output(), None);
        assert_eq!(project.test_output(), None);
    }

    #[test]
    fn test_build_root_default_and_relative() {
        let project = Project::new("/work/core");
        assert_eq!(project.build_root(), PathBuf::from("/work/core/target"));

        let project = Project::new("/work/core").with_build_directory("out");
        assert_eq!(project.build_root(), PathBuf::from("/work/core/out"));

        let project = Project::new("/work/core").with_build_directory("/tmp/build");
        assert_eq!(project.build_root(), PathBuf::from("/tmp/build"));

        let project = Project::new("/work/core").with_build_directory("");
        assert_eq!(project.build_root(), PathBuf::from("/work/core/target"));
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Project::new("/work/core").with_name("api").display_name(), "api");
        assert_eq!(Project::new("/work/core").display_name(), "core");
        assert_eq!(Project::new("/work/core").with_name("  ").display_name(), "core");
    }

    #[test]
    fn test_project_display() {
        let project = Project::new("/work/core").with_name("core");
        assert_eq!(format!("{project}"), "☕ core (/work/core)");

        let parent = Project::new("/work/parent").with_packaging("pom");
        assert_eq!(format!("{parent}"), "📚 /work/parent");
    }

    #[test]
    fn test_deserialize_minimal_descriptor() {
        let project: Project = serde_json::from_str(r#"{ "basedir": "/work/core" }"#).unwrap();

        assert_eq!(project.packaging, "jar");
        assert_eq!(project.basedir, PathBuf::from("/work/core"));
        assert!(project.main_output_directory.is_none());
    }

    #[test]
    fn test_deserialize_missing_basedir_is_blank() {
        let project: Project = serde_json::from_str(r#"{ "packaging": "jar" }"#).unwrap();
        assert!(project.has_blank_basedir());
    }

    #[test]
    fn test_deserialize_nested_execution_project() {
        let json = r#"{
            "packaging": "pom",
            "basedir": "/work/parent",
            "execution_project": {
                "basedir": "/work/core",
                "test_source_roots": ["src/test/java"]
            }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        let execution = project.execution_project.as_deref().unwrap();
        assert_eq!(execution.packaging, "jar");
        assert_eq!(execution.test_source_roots, vec![PathBuf::from("src/test/java")]);
    }
}
