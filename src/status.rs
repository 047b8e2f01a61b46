//! Status line and status block assembly.
//!
//! The status block is the canonical text the fingerprint is computed over.
//! Its layout is part of the key format: manifest lines joined with `\n`,
//! one `\n` separator, then submodule lines joined with `\n`. Identical
//! filesystem and submodule state always renders byte-identical text.

use std::fmt;
use std::path::Path;

use crate::discovery::collect_submodule_status;
use crate::error::{KeyError, Result};
use crate::hashing::hash_text;
use crate::manifest::collect_manifest_status;

/// One record in the status block: a content hash or revision id paired
/// with the base name it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub(crate) id: String,
    pub(crate) label: String,
}

impl StatusLine {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.id, self.label)
    }
}

/// The ordered set of status lines for one build tree.
#[derive(Debug)]
pub struct StatusBlock {
    manifest: Vec<StatusLine>,
    submodules: Vec<StatusLine>,
}

impl StatusBlock {
    /// Assembles the status block for the build tree at `root`.
    ///
    /// Visits `<root>/<manifest_name>` and its transitive includes, then
    /// enumerates immediate subdirectories that are registered submodules.
    ///
    /// # Errors
    ///
    /// Returns an error if the root manifest is missing, any reachable
    /// manifest cannot be read, or the include chain is circular.
    pub fn collect(root: &Path, manifest_name: &str) -> Result<Self> {
        let manifest_path = root.join(manifest_name);
        if !manifest_path.exists() {
            return Err(KeyError::ManifestNotFound {
                path: manifest_path,
            });
        }

        let manifest = collect_manifest_status(root, &manifest_path)?;
        let submodules = collect_submodule_status(root)?;

        Ok(Self {
            manifest,
            submodules,
        })
    }

    /// Renders the canonical status block text.
    pub fn render(&self) -> String {
        let manifest = self
            .manifest
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        let submodules = self
            .submodules
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        format!("{manifest}\n{submodules}")
    }

    /// Computes the fingerprint: the SHA-1 digest of the rendered block.
    pub fn fingerprint(&self) -> String {
        hash_text(&self.render())
    }
}
