//! # buildkey CLI
//!
//! The command-line interface for buildkey, a CI tool that derives a
//! deterministic cache key for a CMake build tree from manifest content
//! and submodule revisions.
//!
//! ## Commands
//!
//! - **hash**: Print the combined cache fingerprint
//! - **keys**: Print `file_hash`/`restore_hash` key-value pairs, honoring a
//!   restore tag in the latest commit subject
//!
//! ## Quick Start
//!
//! In your CI pipeline:
//!
//! ```bash
//! # Derive the cache key for the current tree
//! buildkey hash
//!
//! # Key-value form with commit-message override support
//! buildkey keys
//! ```
//!
//! ## Environment Variables
//!
//! - `BUILDKEY_ROOT`: Override the build tree root (default: .)
//! - `BUILDKEY_MANIFEST_NAME`: Override the root manifest name
//! - `BUILDKEY_VERBOSE`: Enable debug output on stderr
//! - `BUILDKEY_QUIET`: Silence all output except errors and the key

use std::io::IsTerminal;

use buildkey::cli::Cli;

fn main() -> miette::Result<()> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    // Configure miette handler based on terminal capabilities
    // This provides better error formatting for both TTY and non-TTY environments
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (CI, logs, etc.)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Execute the appropriate command
    let result = buildkey::commands::execute(&cli);

    // Convert our error type to miette's Result
    result.map_err(Into::into)
}
