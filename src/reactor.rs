//! Multi-module resolution.
//!
//! A [`Reactor`] holds the modules of one build and resolves their
//! documentation scopes in parallel. Each module is resolved independently:
//! the calls share no mutable state, so one module's failure never affects
//! another.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::ScopeOverrides;
use crate::error::ScopeError;
use crate::project::{Project, ResolutionResult};
use crate::scope::{DocumentationScope, Variant};

/// A project together with its resolved dependencies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    /// The build module
    pub project: Project,

    /// Upstream resolution result; absent means "resolved, no dependencies"
    #[serde(default)]
    pub resolution: ResolutionResult,
}

impl ModuleDescriptor {
    /// Pair a project with its resolution result.
    #[must_use]
    pub const fn new(project: Project, resolution: ResolutionResult) -> Self {
        Self {
            project,
            resolution,
        }
    }

    /// Resolve this module's scope for `variant`.
    ///
    /// # Errors
    ///
    /// Propagates [`ScopeError::InvalidInput`] from the variant policy.
    pub fn resolve(
        &self,
        variant: Variant,
        overrides: &ScopeOverrides,
    ) -> Result<DocumentationScope, ScopeError> {
        variant
            .policy()
            .resolve_with(&self.project, &self.resolution, overrides)
    }
}

/// Outcome of resolving one module of a reactor.
#[derive(Debug)]
pub struct ResolvedModule<'a> {
    /// The module that was resolved
    pub module: &'a ModuleDescriptor,

    /// Its documentation scope, or why none could be produced
    pub outcome: Result<DocumentationScope, ScopeError>,
}

/// The modules of one build.
#[derive(Debug, Default)]
pub struct Reactor(Vec<ModuleDescriptor>);

impl From<Vec<ModuleDescriptor>> for Reactor {
    fn from(modules: Vec<ModuleDescriptor>) -> Self {
        Self(modules)
    }
}

impl<'a> IntoParallelIterator for &'a Reactor {
    type Iter = rayon::slice::Iter<'a, ModuleDescriptor>;
    type Item = &'a ModuleDescriptor;

    fn into_par_iter(self) -> Self::Iter {
        self.0.par_iter()
    }
}

impl Reactor {
    /// Resolve every module for `variant` in parallel.
    ///
    /// Results come back in module order, one per module, whether it
    /// succeeded or not.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use doc_scope::{config::ScopeOverrides, reactor::Reactor, scope::Variant};
    /// # fn example(reactor: &Reactor) {
    /// for resolved in reactor.resolve_all(Variant::Test, &ScopeOverrides::default()) {
    ///     match resolved.outcome {
    ///         Ok(scope) => println!("{} roots", scope.source_roots.len()),
    ///         Err(err) => eprintln!("{err}"),
    ///     }
    /// }
    /// # }
    /// ```
    #[must_use]
    pub fn resolve_all(
        &self,
        variant: Variant,
        overrides: &ScopeOverrides,
    ) -> Vec<ResolvedModule<'_>> {
        self.into_par_iter()
            .map(|module| ResolvedModule {
                module,
                outcome: module.resolve(variant, overrides),
            })
            .collect()
    }

    /// Get the number of modules in the reactor.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the reactor holds no modules.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a slice of all modules.
    #[must_use]
    pub fn as_slice(&self) -> &[ModuleDescriptor] {
        &self.0
    }
}
