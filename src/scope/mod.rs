//! Documentation scope resolution.
//!
//! Maps a project's raw build metadata onto the reduced set of inputs a
//! documentation generator consumes. The pieces are layered:
//!
//! - [`resolver`] - source roots, build output directories and per-variant
//!   default locations of a single project
//! - [`filter`] - the documentation classpath out of a resolved artifact set
//! - [`VariantPolicy`] - binds a [`Variant`] to its field selectors and
//!   defaults and composes the two leaves into a [`DocumentationScope`]
//!
//! Every function here is pure: no I/O, no shared state, and identical inputs
//! always produce an identical result.

pub mod documentation;
pub mod filter;
pub mod resolver;
pub mod variant;

pub use documentation::{DocumentationScope, Titles};
pub use filter::filter_classpath_artifacts;
pub use resolver::{
    effective_packaging, resolve_build_output_dirs, resolve_output_directory, resolve_overview,
    resolve_resource_directory, resolve_source_roots,
};
pub use variant::{Variant, VariantPolicy};
