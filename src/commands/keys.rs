//! Keys command implementation.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::discovery::head_subject;
use crate::error::Result;
use crate::logging::Logger;
use crate::status::StatusBlock;

/// Executes the keys command.
///
/// Computes `file_hash` from the status block, then derives `restore_hash`:
/// normally equal to `file_hash`, but overridden when the latest commit
/// subject carries a restore tag. Tagging a commit lets a developer force
/// reuse of a previously cached build without touching any manifest.
pub fn keys(root: &Path, manifest_name: &str, verbose: u8, quiet: bool) -> Result<()> {
    let log = Logger::new(verbose, quiet);

    let block = StatusBlock::collect(root, manifest_name)?;
    let file_hash = block.fingerprint();

    let subject = head_subject(root)?;
    let restore_hash = restore_override(&subject).unwrap_or_else(|| file_hash.clone());

    println!("file_hash={file_hash}");
    println!("restore_hash={restore_hash}");

    log.verbose(1, block.render());
    log.verbose(1, format!("file_hash={file_hash}"));
    log.verbose(1, format!("restore_hash={restore_hash}"));

    Ok(())
}

/// Extracts a restore-hash override from a commit subject.
///
/// Recognizes any of the tag keys `reuse_cache`, `reuse_hash`,
/// `restore_hash`, `cache_hash` followed by `=` and a run of hexadecimal
/// characters; the hex run is the override value.
pub(crate) fn restore_override(subject: &str) -> Option<String> {
    static RESTORE_TAG_RE: OnceLock<Regex> = OnceLock::new();

    let re = RESTORE_TAG_RE.get_or_init(|| {
        Regex::new(r"(?:reuse_cache|reuse_hash|restore_hash|cache_hash)=([0-9a-fA-F]+)")
            .expect("restore tag regex should compile")
    });

    re.captures(subject)
        .map(|captures| captures[1].to_string())
}
