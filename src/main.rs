//! # doc-scope
//!
//! Command-line front end: loads module descriptors, resolves the
//! documentation scope of every module for one variant, and prints the
//! result as a colored report or a single JSON document.
//!
//! ## Usage
//!
//! ```bash
//! # Resolve every docscope.json below the current directory
//! doc-scope
//!
//! # Test-API scope of one module, as JSON
//! doc-scope --variant test --json core/docscope.json
//!
//! # Custom titles
//! doc-scope --doctitle "Platform API" ~/work/platform
//! ```

mod cli;

use std::process::exit;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand};
use colored::Colorize;
use doc_scope::{config::FileConfig, loader::load_reactor, output};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Entry point for the doc-scope application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, loads descriptors, resolves every module and prints the
/// outcome. Exits non-zero when at least one module failed to resolve.
///
/// # Errors
///
/// Returns errors from descriptor loading, configuration file handling, or
/// JSON serialization.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Some(Commands::Config { command }) = &args.subcommand {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    init_logging(args.verbose(), json_mode);

    let file_config = load_config();

    let paths = args.paths(&file_config);
    let variant = args.variant(&file_config);
    let overrides = args.overrides(&file_config);
    let discovery = args.discovery_options(&file_config);

    let reactor = load_reactor(&paths, &discovery)?;

    if reactor.is_empty() {
        if json_mode {
            let output = output::JsonOutput::from_resolved(variant, &[]);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", "✨ No module descriptors found!".green());
        }
        return Ok(());
    }

    let resolved = reactor.resolve_all(variant, &overrides);

    if json_mode {
        let output = output::JsonOutput::from_resolved(variant, &resolved);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output::print_report(variant, &resolved);
    }

    let failed = resolved.iter().filter(|r| r.outcome.is_err()).count();
    if failed > 0 {
        bail!("{failed} of {} module(s) could not be resolved", resolved.len());
    }

    Ok(())
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
fn init_logging(verbose: bool, json_mode: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!json_mode)
        .with_target(false)
        .init();
}

// ── Config subcommand ────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# doc-scope configuration
# All values shown are their defaults. Uncomment and change as needed.

# Variant to resolve: main or test
# variant = "main"

# Descriptor files or directories to resolve (defaults to the current directory)
# paths = ["."]

[documentation]
# Destination directory of the generated documentation
# (default: <build>/apidocs or <build>/testapidocs)
# output_directory = "target/apidocs"

# Overview page title (default: "<name> <version> API" or "... Test API")
# doctitle = ""

# HTML window title (default: "<name> <version> API" or "... Test API",
# not carried over from a custom doctitle)
# windowtitle = ""

# Overview source file (default: src/main/javadoc/overview.html or src/test/javadoc/overview.html)
# overview = "src/main/javadoc/overview.html"

# Extra documentation resources (default: src/main/javadoc or src/test/javadoc)
# resource_directory = "src/main/javadoc"

[discovery]
# Maximum directory depth when searching for docscope.json (default: unlimited)
# max_depth = 5
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_str(val: Option<&str>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| format!("\"{v}\""))
    }
    fn show_path(val: Option<&std::path::Path>, default: &str) -> String {
        val.map_or_else(
            || format!("{default}  (default)"),
            |p| format!("\"{}\"", p.display()),
        )
    }
    fn show_paths(val: Option<&[std::path::PathBuf]>) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => "[\".\"]  (default)".to_string(),
        }
    }

    let doc = &config.documentation;

    format!(
        "\
variant = {variant}
paths   = {paths}

[documentation]
output_directory   = {output_directory}
doctitle           = {doctitle}
windowtitle        = {windowtitle}
overview           = {overview}
resource_directory = {resource_directory}

[discovery]
max_depth = {max_depth}",
        variant = show_str(config.variant.as_deref(), "\"main\""),
        paths = show_paths(config.paths.as_deref()),
        output_directory = show_path(doc.output_directory.as_deref(), "<build>/<variant>apidocs"),
        doctitle = show_str(doc.doctitle.as_deref(), "<name> <version> API"),
        windowtitle = show_str(doc.windowtitle.as_deref(), "<name> <version> API"),
        overview = show_path(doc.overview.as_deref(), "src/<variant>/javadoc/overview.html"),
        resource_directory = show_path(doc.resource_directory.as_deref(), "src/<variant>/javadoc"),
        max_depth = config
            .discovery
            .max_depth
            .map_or_else(|| "unlimited  (default)".to_string(), |d| d.to_string()),
    )
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config file: {e}");
            FileConfig::default()
        }
    }
}
