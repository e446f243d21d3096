//! Build module descriptors and their resolved dependencies.
//!
//! This module contains the read-only input model handed to the scope
//! resolver by an external build orchestrator. Nothing in here performs I/O;
//! descriptors are produced by the [`loader`](crate::loader) or built in code.
//!
//! ## Main Parts
//!
//! - [`Project`] - A build module with its packaging, source roots and output directories
//! - [`Artifact`] - A resolved dependency artifact tagged with a [`DependencyScope`]
//! - [`ResolutionResult`] - The already-resolved artifact set of a project

pub mod artifact;
#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for project descriptors
pub mod project;

pub use artifact::{Artifact, ArtifactId, DependencyScope, ResolutionResult};
pub use project::{AGGREGATOR_PACKAGING, DEFAULT_PACKAGING, Project};
