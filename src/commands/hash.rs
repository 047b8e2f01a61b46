//! Hash command implementation.

use std::path::Path;

use crate::error::Result;
use crate::logging::Logger;
use crate::status::StatusBlock;

/// Executes the hash command.
///
/// Assembles the status block for the build tree at `root` and prints its
/// fingerprint to stdout. With `--verbose`, the full status block and the
/// fingerprint are additionally written to stderr, leaving stdout
/// unchanged.
pub fn hash(root: &Path, manifest_name: &str, verbose: u8, quiet: bool) -> Result<()> {
    let log = Logger::new(verbose, quiet);

    let block = StatusBlock::collect(root, manifest_name)?;
    let fingerprint = block.fingerprint();

    println!("{fingerprint}");

    log.verbose(1, block.render());
    log.verbose(1, &fingerprint);

    Ok(())
}
