//! # buildkey
//!
//! A CI tool that derives a deterministic cache key for a CMake build tree
//! by hashing the manifest files and submodule revisions that determine
//! what a build would produce.
//!
//! ## Overview
//!
//! buildkey answers one question for a CI pipeline: can the cached build
//! artifacts from a previous run be reused, or did the inputs change? It
//! hashes the root `CMakeLists.txt` and every file it transitively
//! `include()`s, records the checked-out revision of each embedded git
//! submodule, and condenses all of it into a single SHA-1 fingerprint.
//! The same tree always produces the same key; any changed byte in any
//! reachable manifest, or any moved submodule revision, produces a new one.
//!
//! ## Commands
//!
//! - **hash**: Print the combined fingerprint
//! - **keys**: Print `file_hash`/`restore_hash` pairs, honoring a restore
//!   tag in the latest commit subject
//!
//! ## Quick Start
//!
//! In your CI pipeline:
//!
//! ```bash
//! # Derive the cache key for the current tree
//! KEY=$(buildkey hash --root .)
//!
//! # Or the key-value form with commit-message override support
//! buildkey keys --root .
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Implementation of the buildkey subcommands
//! - [`error`]: Error types and handling with thiserror + miette
//!
//! Internal modules (not part of the public API):
//! - `manifest`: Include-directive parsing and depth-first traversal
//! - `discovery`: Git integration for submodule revisions and HEAD subject
//! - `status`: Status block assembly and fingerprinting
//! - `hashing`: SHA-1 hashing utilities
//!
//! ## Library Usage
//!
//! While buildkey is primarily a CLI tool, it exposes its core
//! functionality as a library:
//!
//! ```no_run
//! use buildkey::cli::{Cli, Commands};
//! use buildkey::commands;
//!
//! // Create CLI instance programmatically using the builder
//! let cli = Cli::builder()
//!     .root("path/to/build/tree")
//!     .command(Commands::Hash)
//!     .build()?;
//!
//! // Execute the command
//! commands::execute(&cli)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! The crate uses a combination of:
//! - `thiserror` for strongly-typed errors
//! - `miette` for rich diagnostic output in CLI
//!
//! Unreadable manifests abort the run; a subdirectory that turns out not to
//! be a submodule is expected and silently skipped.

// Re-export public modules for library usage
pub mod cli;
pub mod commands;
pub mod error;

// Internal modules
mod discovery;
mod hashing;
mod logging;
mod manifest;
mod status;
