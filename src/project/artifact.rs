//! Resolved dependency artifacts.
//!
//! These types describe the output of an upstream dependency resolution. The
//! crate never resolves anything itself; it only reads these values.

use std::{
    fmt::{self, Display, Formatter},
    path::PathBuf,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Artifact types that are never placed on a compile classpath.
const NON_CLASSPATH_TYPES: &[&str] = &["pom", "war", "ear", "rar", "java-source", "javadoc"];

fn default_kind() -> String {
    "jar".to_string()
}

/// Visibility tag of a resolved dependency.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DependencyScope {
    /// Needed to compile and run the main code.
    Compile,

    /// Supplied by the runtime container; needed to compile.
    Provided,

    /// Needed only at run time.
    Runtime,

    /// Needed only to compile and run tests.
    Test,

    /// Like `provided`, but pointing at an explicit file on disk.
    System,

    /// Dependency-management import; never on a classpath.
    Import,
}

impl DependencyScope {
    /// Lower-case name as written in build descriptors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
            Self::Import => "import",
        }
    }
}

impl Display for DependencyScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyScope {
    type Err = String;

    /// Parse a scope name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let scope = s.trim();
        [
            Self::Compile,
            Self::Provided,
            Self::Runtime,
            Self::Test,
            Self::System,
            Self::Import,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str().eq_ignore_ascii_case(scope))
        .ok_or_else(|| format!("unknown dependency scope `{s}`"))
    }
}

impl TryFrom<String> for DependencyScope {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Identity of an artifact: its coordinates without the scope.
///
/// Ordering follows the field order, which gives the stable classpath order.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct ArtifactId {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Artifact type (`jar`, `test-jar`, `pom`, ...).
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
}

impl Display for ArtifactId {
    /// Format as `group:artifact:type[:classifier]:version`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.kind)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        write!(f, ":{}", self.version)
    }
}

/// A resolved dependency artifact.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(flatten)]
    pub id: ArtifactId,

    pub scope: DependencyScope,

    /// Location of the resolved file, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Artifact {
    /// Create a `jar` artifact without classifier or file.
    #[must_use]
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: DependencyScope,
    ) -> Self {
        Self {
            id: ArtifactId {
                group_id: group_id.into(),
                artifact_id: artifact_id.into(),
                version: version.into(),
                classifier: None,
                kind: default_kind(),
            },
            scope,
            file: None,
        }
    }

    /// Set the classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.id.classifier = Some(classifier.into());
        self
    }

    /// Set the artifact type.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.id.kind = kind.into();
        self
    }

    /// Set the resolved file location.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Whether artifacts of this type contribute classes to a classpath.
    #[must_use]
    pub fn is_added_to_classpath(&self) -> bool {
        !NON_CLASSPATH_TYPES
            .iter()
            .any(|kind| kind.eq_ignore_ascii_case(&self.id.kind))
    }
}

impl Display for Artifact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.scope)
    }
}

/// Result of an upstream dependency resolution.
///
/// A result with missing artifacts or resolution errors is considered failed
/// and is never filtered partially.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Every resolved artifact, transitive ones included.
    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    /// Coordinates that could not be resolved.
    #[serde(default)]
    pub missing: Vec<String>,

    /// Resolution error messages reported upstream.
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ResolutionResult {
    /// A successful result holding `artifacts`.
    #[must_use]
    pub const fn new(artifacts: Vec<Artifact>) -> Self {
        Self {
            artifacts,
            missing: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Whether upstream resolution was incomplete or failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.missing.is_empty() || !self.errors.is_empty()
    }

    /// One-line description of why the result is failed, if it is.
    #[must_use]
    pub fn failure_summary(&self) -> Option<String> {
        if let Some(missing) = self.missing.first() {
            return Some(format!(
                "dependency resolution is incomplete: {} missing artifact(s), first `{missing}`",
                self.missing.len()
            ));
        }

        self.errors.first().map(|error| {
            format!(
                "dependency resolution failed with {} error(s): {error}",
                self.errors.len()
            )
        })
    }
}
