//! Configuration file support for persistent settings.
//!
//! This module provides support for loading configuration from a TOML file
//! located at `~/.config/doc-scope/config.toml` (or the platform-specific
//! equivalent). Configuration file values serve as defaults that can be
//! overridden by CLI arguments.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > variant default**.
//!
//! # Example config
//!
//! ```toml
//! variant = "test"
//! paths = ["~/work/platform"]
//!
//! [documentation]
//! output_directory = "target/site/testapidocs"
//! doctitle = "Platform Test API"
//! windowtitle = "Platform Test API"
//! overview = "src/test/javadoc/overview.html"
//! resource_directory = "src/test/javadoc"
//!
//! [discovery]
//! max_depth = 4
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::ScopeOverrides;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default variant (`"main"` or `"test"`)
    pub variant: Option<String>,

    /// Default descriptor files or directories to resolve
    pub paths: Option<Vec<PathBuf>>,

    /// Documentation default overrides
    #[serde(default)]
    pub documentation: FileDocumentationConfig,

    /// Descriptor discovery options
    #[serde(default)]
    pub discovery: FileDiscoveryConfig,
}

/// Documentation overrides from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDocumentationConfig {
    /// Destination directory of the generated documentation
    pub output_directory: Option<PathBuf>,

    /// Overview page title
    pub doctitle: Option<String>,

    /// HTML window title
    pub windowtitle: Option<String>,

    /// Overview source file
    pub overview: Option<PathBuf>,

    /// Extra documentation resources directory
    pub resource_directory: Option<PathBuf>,
}

/// Discovery options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileDiscoveryConfig {
    /// Maximum directory depth to walk
    pub max_depth: Option<usize>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use doc_scope::config::file::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileDocumentationConfig {
    /// Convert the file section into resolver overrides.
    ///
    /// Path values get tilde expansion; relative paths are left relative so
    /// the resolver anchors them to each project's base directory.
    #[must_use]
    pub fn to_overrides(&self) -> ScopeOverrides {
        ScopeOverrides {
            output_directory: self.output_directory.as_deref().map(expand_tilde),
            doctitle: self.doctitle.clone(),
            windowtitle: self.windowtitle.clone(),
            overview: self.overview.as_deref().map(expand_tilde),
            resource_directory: self.resource_directory.as_deref().map(expand_tilde),
        }
    }
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// The configuration file is located at `<config_dir>/doc-scope/config.toml`,
    /// where `<config_dir>` is the platform-specific configuration directory
    /// (e.g., `~/.config` on Linux, `%APPDATA%` on Windows).
    ///
    /// # Returns
    ///
    /// `Some(PathBuf)` with the config file path, or `None` if the config
    /// directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("doc-scope").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// If the config file doesn't exist, returns a default (empty) configuration.
    /// If the file exists but is malformed, returns an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }
}
