//! Command-line interface definitions for buildkey.
//!
//! This module defines the CLI structure using clap, including both
//! subcommands and their shared global options. The main entry point is the
//! [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use buildkey::cli::{Cli, Commands};
//!
//! // Parse command-line arguments
//! let cli = Cli::parse_args();
//!
//! // Access the parsed command
//! match &cli.command() {
//!     Commands::Hash => println!("Printing the combined fingerprint"),
//!     Commands::Keys => println!("Printing file_hash/restore_hash"),
//! }
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::{KeyError, Result};
use crate::manifest::ROOT_MANIFEST;

/// Main command-line interface for buildkey.
///
/// This struct represents the top-level CLI configuration, containing both
/// global options that apply to all commands and the specific subcommand
/// to execute.
#[derive(Parser)]
#[command(
    name = "buildkey",
    bin_name = "buildkey",
    author,
    version,
    about = "A CI tool that derives a deterministic cache key for a CMake build tree",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all buildkey commands.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Path to the build tree root (defaults to the current directory)
    #[arg(long, global = true, default_value = ".", env = "BUILDKEY_ROOT")]
    root: PathBuf,

    /// Name of the root manifest file
    #[arg(
        long,
        global = true,
        default_value = ROOT_MANIFEST,
        env = "BUILDKEY_MANIFEST_NAME"
    )]
    manifest_name: String,

    /// Enable debug output on stderr (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "BUILDKEY_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors and the key itself
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "BUILDKEY_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Get the absolute build tree root path
    pub fn get_root(&self) -> PathBuf {
        normalize_path(self.root())
    }

    /// Get the build tree root as given
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the root manifest file name
    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for constructing `GlobalOpts` programmatically.
///
/// Useful for testing and library usage without going through
/// command-line parsing.
#[derive(Default)]
pub struct GlobalOptsBuilder {
    root: Option<PathBuf>,
    manifest_name: Option<String>,
    verbose: u8,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Set the build tree root path.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the root manifest file name.
    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = Some(name.into());
        self
    }

    /// Set the verbosity level (0 = normal, 1+ = debug output).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            manifest_name: self
                .manifest_name
                .unwrap_or_else(|| ROOT_MANIFEST.to_string()),
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    root: Option<PathBuf>,
    manifest_name: Option<String>,
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the build tree root
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the root manifest file name
    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = Some(name.into());
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self.command.ok_or(KeyError::ConfigError {
            message: "Command is required".to_string(),
        })?;

        let mut global_opts = GlobalOpts::builder()
            .verbose(self.verbose)
            .quiet(self.quiet);
        if let Some(root) = self.root {
            global_opts = global_opts.root(root);
        }
        if let Some(name) = self.manifest_name {
            global_opts = global_opts.manifest_name(name);
        }

        Ok(Cli {
            global_opts: global_opts.build(),
            command,
        })
    }
}

/// Normalize a path to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Converts relative paths to absolute using the current directory
/// - Removes `.` and `..` components where possible
/// - Does NOT resolve symlinks (preserves user intent)
/// - Does NOT require the path to exist
fn normalize_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    let absolute = if path.is_relative() {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    } else {
        path.to_path_buf()
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        use std::path::Component;
        match component {
            Component::ParentDir => {
                if let Some(last) = components.last()
                    && !matches!(last, Component::ParentDir)
                {
                    components.pop();
                    continue;
                }
                components.push(component);
            }
            Component::CurDir => {
                continue;
            }
            _ => components.push(component),
        }
    }

    let mut result = PathBuf::new();
    for component in components {
        result.push(component);
    }

    result
}

/// Available buildkey subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the combined cache fingerprint
    ///
    /// Hashes the root manifest and everything it transitively includes,
    /// records each submodule's checked-out revision, and prints the SHA-1
    /// fingerprint of the assembled status block to stdout.
    Hash,

    /// Print file_hash and restore_hash key-value pairs
    ///
    /// Computes the same fingerprint as `hash`, then inspects the latest
    /// commit subject for a restore tag (reuse_cache, reuse_hash,
    /// restore_hash, or cache_hash followed by `=<hex>`). When present, the
    /// tagged value overrides restore_hash, letting a commit force reuse of
    /// a previously cached build. Prints `file_hash=<hex>` and
    /// `restore_hash=<hex>` to stdout.
    Keys,
}
