//! Error types for buildkey.
//!
//! This module defines all error types used throughout buildkey, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`KeyError`]
//! - Each variant includes helpful error messages and diagnostic codes
//! - Fatal conditions (unreadable manifests, missing HEAD) abort the run;
//!   ignorable conditions (a directory that is not a submodule) never reach
//!   this type and are skipped at the call site

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in buildkey operations
#[derive(Error, Debug, Diagnostic)]
pub enum KeyError {
    /// The root manifest file does not exist.
    ///
    /// Raised before traversal starts. A missing root manifest means the
    /// tool is pointed at the wrong directory; a partial fingerprint would
    /// be worse than none.
    #[error("Manifest file not found at '{path}'")]
    #[diagnostic(
        code(buildkey::manifest::not_found),
        help("Ensure --root points at the build tree root, or set --manifest-name.")
    )]
    ManifestNotFound {
        /// The manifest path that was checked
        path: PathBuf,
    },

    /// File system I/O error while reading a manifest or listing the root.
    ///
    /// Any manifest or include that exists but cannot be read is fatal:
    /// the fingerprint must cover every reachable file or be abandoned.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(buildkey::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Include traversal exceeded the nesting limit.
    ///
    /// Raised when `include()` chains nest deeper than the guard allows,
    /// which in practice means a circular include chain.
    #[error("Include chain exceeded {depth} levels at '{path}'")]
    #[diagnostic(
        code(buildkey::manifest::include_depth_exceeded),
        help("Check the manifests for a circular include() chain.")
    )]
    IncludeDepthExceeded {
        /// The include file at which the limit was hit
        path: PathBuf,
        /// The nesting limit that was exceeded
        depth: usize,
    },

    /// Git repository not found at the build tree root.
    ///
    /// Raised by the `keys` subcommand, which must read the latest commit
    /// subject. Submodule enumeration never raises this; a rootless tree
    /// simply contributes no submodule lines.
    #[error("Git repository not found at '{path}'")]
    #[diagnostic(
        code(buildkey::git::repo_not_found),
        help("The 'keys' subcommand requires the build tree root to be a Git repository.")
    )]
    RepoNotFound {
        /// The path where the Git repository was searched for
        path: PathBuf,
    },

    /// Failed to resolve HEAD to a commit for the restore-tag lookup.
    #[error("Failed to read the latest commit from HEAD")]
    #[diagnostic(
        code(buildkey::git::head_error),
        help("Ensure the repository has at least one commit.")
    )]
    HeadError {
        /// The underlying libgit2 error
        #[source]
        source: git2::Error,
    },

    /// Required configuration is missing or inconsistent.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(buildkey::config::error))]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, KeyError>;
