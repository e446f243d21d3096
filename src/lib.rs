//! # doc-scope
//!
//! Computes the *effective documentation scope* of a build module: the exact
//! source roots, compiled class directories and classpath artifacts a
//! documentation generator has to consume, for either the main or the test
//! sources of the module.
//!
//! The library is a pure, in-process transformation. It receives
//! already-parsed project descriptors and already-resolved dependency sets
//! and never touches the network or the generator itself.
//!
//! ## Features
//!
//! - Main / test variants selected through a static [`VariantPolicy`](scope::VariantPolicy) table
//! - Aggregator (`pom`) modules resolve to an empty source set
//! - Reactor execution-project substitution for source roots and packaging
//! - Scope-based classpath filtering with stable, deduplicated output
//! - Parallel resolution of every module of a reactor
//! - Configuration-file and CLI overrides for titles and locations
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::PathBuf;
//! use doc_scope::project::{Artifact, DependencyScope, Project, ResolutionResult};
//! use doc_scope::scope::Variant;
//!
//! let project = Project::new("/work/core")
//!     .with_test_source_roots(vec![PathBuf::from("src/test/java")])
//!     .with_main_output_directory("target/classes")
//!     .with_test_output_directory("target/test-classes");
//! let resolution = ResolutionResult::new(vec![
//!     Artifact::new("org.junit", "junit", "4.13.2", DependencyScope::Test),
//! ]);
//!
//! let scope = Variant::Test.policy().resolve(&project, &resolution)?;
//! assert_eq!(scope.source_roots, vec![PathBuf::from("src/test/java")]);
//! # Ok::<(), doc_scope::ScopeError>(())
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod project;
pub mod reactor;
pub mod scope;
pub mod utils;

pub use config::{DiscoveryOptions, FileConfig, ScopeOverrides};
pub use error::ScopeError;
pub use project::{Artifact, DependencyScope, Project, ResolutionResult};
pub use reactor::{ModuleDescriptor, Reactor, ResolvedModule};
pub use scope::{DocumentationScope, Variant, VariantPolicy};
