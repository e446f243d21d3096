//! Classpath filtering of an already-resolved artifact set.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, ScopeError};
use crate::project::{Artifact, ArtifactId, ResolutionResult};
use crate::scope::Variant;

/// Select the artifacts that belong on the documentation classpath.
///
/// Keeps artifacts whose type is added to a classpath and whose scope is in
/// the variant's scope list. The result is deduplicated by [`ArtifactId`] and
/// sorted by it. When one identity shows up under several eligible scopes,
/// the occurrence with the earliest scope in the policy list wins, so the
/// test result is always a superset of the main result, entry for entry.
///
/// # Errors
///
/// Returns [`ScopeError::InvalidInput`] when `resolution` is marked as failed;
/// failed results are never filtered partially.
pub fn filter_classpath_artifacts(
    resolution: &ResolutionResult,
    variant: Variant,
) -> Result<Vec<Artifact>> {
    if let Some(reason) = resolution.failure_summary() {
        return Err(ScopeError::InvalidInput(reason));
    }

    let scopes = variant.policy().artifact_scopes();
    let mut selected: BTreeMap<&ArtifactId, (usize, &Artifact)> = BTreeMap::new();

    for artifact in &resolution.artifacts {
        if !artifact.is_added_to_classpath() {
            debug!(artifact = %artifact, "type is not added to the classpath");
            continue;
        }

        let Some(rank) = scopes.iter().position(|scope| *scope == artifact.scope) else {
            continue;
        };

        selected
            .entry(&artifact.id)
            .and_modify(|current| {
                if rank < current.0 {
                    *current = (rank, artifact);
                }
            })
            .or_insert((rank, artifact));
    }

    debug!(
        %variant,
        resolved = resolution.artifacts.len(),
        kept = selected.len(),
        "filtered classpath artifacts"
    );

    Ok(selected
        .into_values()
        .map(|(_, artifact)| artifact.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::DependencyScope;

    fn artifact(name: &str, scope: DependencyScope) -> Artifact {
        Artifact::new("org.example", name, "1.0", scope)
    }

    fn names(artifacts: &[Artifact]) -> Vec<&str> {
        artifacts.iter().map(|a| a.id.artifact_id.as_str()).collect()
    }

    fn mixed_resolution() -> ResolutionResult {
        ResolutionResult::new(vec![
            artifact("runtime-only", DependencyScope::Runtime),
            artifact("junit", DependencyScope::Test),
            artifact("core", DependencyScope::Compile),
            artifact("servlet-api", DependencyScope::Provided),
            artifact("tools", DependencyScope::System),
            artifact("bom", DependencyScope::Import),
        ])
    }

    #[test]
    fn test_main_keeps_compile_provided_system() {
        let kept = filter_classpath_artifacts(&mixed_resolution(), Variant::Main).unwrap();
        assert_eq!(names(&kept), vec!["core", "servlet-api", "tools"]);
    }

    #[test]
    fn test_test_adds_test_scope() {
        let kept = filter_classpath_artifacts(&mixed_resolution(), Variant::Test).unwrap();
        assert_eq!(names(&kept), vec!["core", "junit", "servlet-api", "tools"]);
    }

    #[test]
    fn test_test_is_superset_of_main() {
        let resolution = ResolutionResult::new(vec![
            artifact("shared", DependencyScope::Test),
            artifact("shared", DependencyScope::Compile),
            artifact("other", DependencyScope::Provided),
            artifact("mock", DependencyScope::Test),
        ]);

        let main = filter_classpath_artifacts(&resolution, Variant::Main).unwrap();
        let test = filter_classpath_artifacts(&resolution, Variant::Test).unwrap();

        for kept in &main {
            assert!(test.contains(kept), "{kept} missing from test classpath");
        }
        assert!(test.len() > main.len());
    }

    #[test]
    fn test_deduplicates_by_identity() {
        let resolution = ResolutionResult::new(vec![
            artifact("core", DependencyScope::Compile).with_file("/first.jar"),
            artifact("core", DependencyScope::Compile).with_file("/second.jar"),
            artifact("core", DependencyScope::Compile).with_classifier("tests"),
        ]);

        let kept = filter_classpath_artifacts(&resolution, Variant::Main).unwrap();

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].file.as_deref(), Some(std::path::Path::new("/first.jar")));
        assert_eq!(kept[1].id.classifier.as_deref(), Some("tests"));
    }

    #[test]
    fn test_order_is_stable_regardless_of_input_order() {
        let forward = ResolutionResult::new(vec![
            artifact("a", DependencyScope::Compile),
            artifact("b", DependencyScope::Compile),
            artifact("c", DependencyScope::Compile),
        ]);
        let mut reversed = forward.clone();
        reversed.artifacts.reverse();

        assert_eq!(
            filter_classpath_artifacts(&forward, Variant::Main).unwrap(),
            filter_classpath_artifacts(&reversed, Variant::Main).unwrap()
        );
    }

    #[test]
    fn test_non_classpath_types_are_dropped() {
        let resolution = ResolutionResult::new(vec![
            artifact("parent", DependencyScope::Compile).with_kind("pom"),
            artifact("webapp", DependencyScope::Compile).with_kind("war"),
            artifact("fixtures", DependencyScope::Test).with_kind("test-jar"),
        ]);

        let kept = filter_classpath_artifacts(&resolution, Variant::Test).unwrap();
        assert_eq!(names(&kept), vec!["fixtures"]);
    }

    #[test]
    fn test_failed_resolution_is_rejected() {
        let mut resolution = mixed_resolution();
        resolution.errors.push("checksum mismatch".to_string());

        for variant in Variant::ALL {
            let err = filter_classpath_artifacts(&resolution, variant).unwrap_err();
            assert!(matches!(err, ScopeError::InvalidInput(ref msg) if msg.contains("checksum")));
        }
    }

    #[test]
    fn test_empty_resolution() {
        let kept = filter_classpath_artifacts(&ResolutionResult::default(), Variant::Test).unwrap();
        assert!(kept.is_empty());
    }
}
