//! Structured and human-readable reports of resolved scopes.
//!
//! When the `--json` flag is passed, [`JsonOutput`] is serialized to stdout
//! as a single JSON object, replacing all human-readable output. Otherwise
//! [`print_report`] renders a colored summary per module.

use colored::Colorize;
use serde::Serialize;

use crate::reactor::ResolvedModule;
use crate::scope::{DocumentationScope, Variant};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// Variant every module was resolved for.
    pub variant: Variant,

    /// One entry per module, in reactor order.
    pub modules: Vec<JsonModuleEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single module entry in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonModuleEntry {
    /// Module name (declared, or derived from the base directory).
    pub name: String,

    /// Module base directory.
    pub basedir: String,

    /// Resolved scope. Absent when resolution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<DocumentationScope>,

    /// Error message. Present only when resolution failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated summary across all modules.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonSummary {
    /// Total number of modules.
    pub total_modules: usize,

    /// Modules whose scope was resolved.
    pub resolved: usize,

    /// Modules whose scope could not be resolved.
    pub failed: usize,

    /// Resolved modules without any source root (aggregators included).
    pub without_sources: usize,
}

impl JsonOutput {
    /// Build a `JsonOutput` from resolved modules.
    #[must_use]
    pub fn from_resolved(variant: Variant, resolved: &[ResolvedModule<'_>]) -> Self {
        Self {
            variant,
            modules: resolved.iter().map(JsonModuleEntry::from_resolved).collect(),
            summary: JsonSummary::from_resolved(resolved),
        }
    }
}

impl JsonModuleEntry {
    /// Convert a `ResolvedModule` into a `JsonModuleEntry`.
    #[must_use]
    pub fn from_resolved(resolved: &ResolvedModule<'_>) -> Self {
        let project = &resolved.module.project;
        let (scope, error) = match &resolved.outcome {
            Ok(scope) => (Some(scope.clone()), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            name: project.display_name(),
            basedir: project.basedir.display().to_string(),
            scope,
            error,
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from resolved modules.
    #[must_use]
    pub fn from_resolved(resolved: &[ResolvedModule<'_>]) -> Self {
        let scopes: Vec<&DocumentationScope> = resolved
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .collect();

        Self {
            total_modules: resolved.len(),
            resolved: scopes.len(),
            failed: resolved.len() - scopes.len(),
            without_sources: scopes.iter().filter(|s| !s.has_sources()).count(),
        }
    }
}

/// Print a human-readable report of resolved modules to stdout.
pub fn print_report(variant: Variant, resolved: &[ResolvedModule<'_>]) {
    for module in resolved {
        println!("\n{}", module.module.project.to_string().bold());

        match &module.outcome {
            Ok(scope) => print_scope(scope),
            Err(err) => println!("  {} {err}", "✗".red()),
        }
    }

    let summary = JsonSummary::from_resolved(resolved);
    println!(
        "\n{} {} resolved, {} failed ({} variant)",
        "📚 Summary:".bold(),
        summary.resolved.to_string().green(),
        if summary.failed > 0 {
            summary.failed.to_string().red()
        } else {
            summary.failed.to_string().normal()
        },
        variant
    );
}

fn print_scope(scope: &DocumentationScope) {
    if scope.has_sources() {
        println!("  {}", "source roots:".cyan());
        for root in &scope.source_roots {
            println!("    {}", root.display());
        }
    } else {
        println!("  {}", "no source roots (nothing to document)".yellow());
    }

    if !scope.build_output_dirs.is_empty() {
        println!("  {}", "build output dirs:".cyan());
        for dir in &scope.build_output_dirs {
            println!("    {}", dir.display());
        }
    }

    println!(
        "  {} {}",
        "classpath artifacts:".cyan(),
        scope.classpath_artifacts.len()
    );
    for artifact in &scope.classpath_artifacts {
        println!("    {}", artifact.to_string().dimmed());
    }

    println!("  {} {}", "output:".cyan(), scope.output_directory.display());
    println!("  {} {}", "title:".cyan(), scope.titles.doctitle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScopeOverrides;
    use crate::project::{Project, ResolutionResult};
    use crate::reactor::{ModuleDescriptor, Reactor};
    use std::path::PathBuf;

    fn reactor() -> Reactor {
        let core = Project::new("/work/core")
            .with_name("core")
            .with_main_source_roots(vec![PathBuf::from("src/main/java")]);
        let parent = Project::new("/work/parent").with_packaging("pom");
        let broken = ResolutionResult {
            errors: vec!["offline".to_string()],
            ..ResolutionResult::default()
        };

        vec![
            ModuleDescriptor::new(core, ResolutionResult::default()),
            ModuleDescriptor::new(parent.clone(), ResolutionResult::default()),
            ModuleDescriptor::new(parent.with_name("broken"), broken),
        ]
        .into()
    }

    #[test]
    fn test_summary_counts() {
        let reactor = reactor();
        let resolved = reactor.resolve_all(Variant::Main, &ScopeOverrides::default());

        assert_eq!(
            JsonSummary::from_resolved(&resolved),
            JsonSummary {
                total_modules: 3,
                resolved: 2,
                failed: 1,
                without_sources: 1,
            }
        );
    }

    #[test]
    fn test_json_output_shape() {
        let reactor = reactor();
        let resolved = reactor.resolve_all(Variant::Main, &ScopeOverrides::default());
        let output = JsonOutput::from_resolved(Variant::Main, &resolved);
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["variant"], "main");
        assert_eq!(json["modules"][0]["name"], "core");
        assert_eq!(json["modules"][0]["scope"]["source_roots"][0], "src/main/java");
        assert!(json["modules"][0].get("error").is_none());
        assert_eq!(json["modules"][1]["name"], "parent");
        assert!(json["modules"][2].get("scope").is_none());
        assert!(
            json["modules"][2]["error"]
                .as_str()
                .unwrap()
                .contains("offline")
        );
        assert_eq!(json["summary"]["failed"], 1);
    }
}
