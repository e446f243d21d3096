//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use doc_scope::config::file::{FileConfig, expand_tilde};
use doc_scope::config::{DiscoveryOptions, ScopeOverrides};
use doc_scope::scope::Variant;

/// Command-line arguments overriding the documentation defaults.
///
/// Each value, when given, replaces the corresponding default of the
/// selected variant. Relative paths are resolved against each module's base
/// directory.
#[derive(Parser)]
struct DocumentationArgs {
    /// Destination directory of the generated documentation
    ///
    /// Defaults to `<build>/apidocs` for the main variant and
    /// `<build>/testapidocs` for the test variant.
    #[arg(short = 'o', long)]
    output_directory: Option<PathBuf>,

    /// Title placed near the top of the overview page
    ///
    /// Defaults to `<name> <version> API` or `<name> <version> Test API`.
    #[arg(long)]
    doctitle: Option<String>,

    /// Title placed in the HTML title tag
    #[arg(long)]
    windowtitle: Option<String>,

    /// Overview source file
    ///
    /// Defaults to `src/main/javadoc/overview.html` or
    /// `src/test/javadoc/overview.html`.
    #[arg(long)]
    overview: Option<PathBuf>,

    /// Directory of extra documentation resources (package.html, images, ...)
    #[arg(long)]
    resource_directory: Option<PathBuf>,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand)]
pub(crate) enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "doc-scope")]
#[command(
    about = "Resolve the documentation scope (source roots, class directories, classpath) of build modules"
)]
#[command(version)]
#[command(author)]
pub(crate) struct Cli {
    /// Subcommand (e.g. `config`)
    #[command(subcommand)]
    pub(crate) subcommand: Option<Commands>,

    /// Module descriptor files, or directories to search for `docscope.json`
    ///
    /// Defaults to the current directory if not specified.
    #[arg(num_args = 0..)]
    paths: Vec<PathBuf>,

    /// Which sources to document (main, test)
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Output results as a single JSON object for scripting/piping
    #[arg(long)]
    json: bool,

    /// Log resolution decisions to stderr
    ///
    /// Equivalent to `RUST_LOG=debug`; an explicit `RUST_LOG` still wins.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Maximum directory depth when searching directories for descriptors
    #[arg(long)]
    max_depth: Option<usize>,

    /// Documentation overrides
    #[command(flatten)]
    documentation: DocumentationArgs,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub(crate) const fn json(&self) -> bool {
        self.json
    }

    /// Whether `--verbose` was given.
    #[must_use]
    pub(crate) const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Resolve the descriptor paths from CLI args, config file, or default.
    ///
    /// Priority: CLI arguments > config file `paths` > current directory (`.`).
    /// Tilde expansion is applied to paths originating from the config file.
    #[must_use]
    pub(crate) fn paths(&self, config: &FileConfig) -> Vec<PathBuf> {
        if !self.paths.is_empty() {
            return self.paths.clone();
        }

        if let Some(ref paths) = config.paths
            && !paths.is_empty()
        {
            return paths.iter().map(|p| expand_tilde(p)).collect();
        }

        vec![PathBuf::from(".")]
    }

    /// Extract the variant from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (`Main`).
    #[must_use]
    pub(crate) fn variant(&self, config: &FileConfig) -> Variant {
        self.variant
            .or_else(|| {
                config
                    .variant
                    .as_ref()
                    .and_then(|s| Variant::from_str(s, true).ok())
            })
            .unwrap_or_default()
    }

    /// Extract discovery options from CLI args and config file.
    #[must_use]
    pub(crate) fn discovery_options(&self, config: &FileConfig) -> DiscoveryOptions {
        DiscoveryOptions {
            max_depth: self.max_depth.or(config.discovery.max_depth),
        }
    }

    /// Extract documentation overrides from CLI args and config file.
    ///
    /// Each field independently follows CLI > config file > unset.
    #[must_use]
    pub(crate) fn overrides(&self, config: &FileConfig) -> ScopeOverrides {
        let file = config.documentation.to_overrides();
        let args = &self.documentation;

        ScopeOverrides {
            output_directory: args.output_directory.clone().or(file.output_directory),
            doctitle: args.doctitle.clone().or(file.doctitle),
            windowtitle: args.windowtitle.clone().or(file.windowtitle),
            overview: args.overview.clone().or(file.overview),
            resource_directory: args
                .resource_directory
                .clone()
                .or(file.resource_directory),
        }
    }
}
