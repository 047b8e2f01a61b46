//! Implementation of buildkey subcommands.
//!
//! `mod.rs` serves as a thin dispatcher and re-export hub; command logic
//! lives in dedicated modules (`hash`, `keys`).

use std::path::{Path, PathBuf};

use crate::cli::{Cli, Commands};
use crate::error::{KeyError, Result};

pub(crate) mod hash;
pub(crate) mod keys;

pub use hash::hash;
pub use keys::keys;

#[cfg(test)]
mod tests;

/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    execute_with_dir(cli, None)
}

/// Execute commands with an explicit working directory.
///
/// A relative `--root` resolves against `working_dir` when one is given,
/// which is useful for testing and when the tool is invoked from
/// different locations.
pub fn execute_with_dir(cli: &Cli, working_dir: Option<&Path>) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    let root = match working_dir {
        Some(dir) => resolve_root(dir, cli.global_opts().root())?,
        None => cli.global_opts().get_root(),
    };

    let manifest_name = cli.global_opts().manifest_name();

    match cli.command() {
        Commands::Hash => hash(&root, manifest_name, verbose, quiet),
        Commands::Keys => keys(&root, manifest_name, verbose, quiet),
    }
}

fn resolve_root(working_dir: &Path, root: &Path) -> Result<PathBuf> {
    let joined = if root.is_absolute() {
        root.to_path_buf()
    } else {
        working_dir.join(root)
    };

    joined
        .canonicalize()
        .map_err(|source| KeyError::IoError {
            path: joined,
            source,
        })
}
