//! Manifest traversal and include-directive parsing.
//!
//! Walks a CMake manifest and everything it transitively `include()`s,
//! emitting one status line per visited file in depth-first pre-order:
//! the root manifest first, then each include in line order, each expanded
//! fully before the next line of its parent is considered.

use std::path::Path;

use crate::error::{KeyError, Result};
use crate::hashing::hash_file;
use crate::status::StatusLine;

/// Conventional name of the root manifest file.
pub const ROOT_MANIFEST: &str = "CMakeLists.txt";

/// Nesting limit for include traversal. Manifest trees are shallow in
/// practice; hitting this means a circular include chain.
const MAX_INCLUDE_DEPTH: usize = 64;

/// Extracts the referenced file name from an `include()` directive.
///
/// The line is matched after trimming surrounding whitespace: it must start
/// with `include(` and end with `)`. The name between the parentheses is
/// taken verbatim, with no quote or escape processing. Malformed directives
/// (no closing parenthesis, empty name) are treated as non-matching.
pub(crate) fn parse_include(line: &str) -> Option<&str> {
    let name = line.trim().strip_prefix("include(")?.strip_suffix(')')?;
    if name.is_empty() { None } else { Some(name) }
}

/// Collects status lines for the manifest at `manifest_path` and all of its
/// transitively included files.
///
/// Include targets resolve relative to `root`, mirroring CMake's module
/// search for project-local includes. A target that does not exist is
/// skipped; a target that exists but cannot be read is a fatal error.
pub fn collect_manifest_status(root: &Path, manifest_path: &Path) -> Result<Vec<StatusLine>> {
    let mut lines = Vec::new();
    visit(root, manifest_path, 0, &mut lines)?;
    Ok(lines)
}

fn visit(root: &Path, path: &Path, depth: usize, out: &mut Vec<StatusLine>) -> Result<()> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(KeyError::IncludeDepthExceeded {
            path: path.to_path_buf(),
            depth: MAX_INCLUDE_DEPTH,
        });
    }

    let hash = hash_file(path)?;
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    out.push(StatusLine::new(hash, label));

    let text = std::fs::read_to_string(path).map_err(|source| KeyError::IoError {
        path: path.to_path_buf(),
        source,
    })?;

    for line in text.lines() {
        if let Some(name) = parse_include(line) {
            let include_path = root.join(name);
            if include_path.exists() {
                visit(root, &include_path, depth + 1, out)?;
            }
        }
    }

    Ok(())
}
