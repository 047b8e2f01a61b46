//! Git integration for submodule revision discovery.
//!
//! Enumerates the immediate subdirectories of the build tree root and
//! resolves each registered submodule to its checked-out revision via
//! libgit2. Also retrieves the latest commit subject for the restore-tag
//! lookup in the `keys` subcommand.

use std::path::Path;

use git2::Repository;

use crate::error::{KeyError, Result};
use crate::status::StatusLine;

/// Outcome of querying one directory as a candidate submodule.
///
/// Only `Pinned` contributes a status line. The other outcomes are
/// expected for ordinary directories and are skipped without a message.
#[derive(Debug)]
pub(crate) enum SubmoduleQuery {
    /// A registered submodule with a resolvable revision
    Pinned(String),
    /// The directory is not a registered submodule, or it has no
    /// checked-out or staged revision yet
    NotASubmodule,
    /// There is no repository to query against
    RepoUnavailable,
}

/// Queries the repository for a submodule registered at `name`.
///
/// The revision is the object id checked out in the submodule's working
/// tree, falling back to the id recorded in the parent index when the
/// working tree has none. This is the same id `git submodule status`
/// prints as its first token.
pub(crate) fn query_submodule(repo: Option<&Repository>, name: &str) -> SubmoduleQuery {
    let Some(repo) = repo else {
        return SubmoduleQuery::RepoUnavailable;
    };

    match repo.find_submodule(name) {
        Ok(submodule) => submodule
            .workdir_id()
            .or_else(|| submodule.index_id())
            .map(|oid| SubmoduleQuery::Pinned(oid.to_string()))
            .unwrap_or(SubmoduleQuery::NotASubmodule),
        Err(_) => SubmoduleQuery::NotASubmodule,
    }
}

/// Collects `(revision, name)` status lines for every immediate
/// subdirectory of `root` that is a registered submodule.
///
/// Directories are visited in lexicographic order of their names, so the
/// result is deterministic for a fixed tree. A root that is not a Git
/// repository yields an empty list.
///
/// # Errors
///
/// Returns an error only if the root directory itself cannot be listed.
/// Submodule query failures are expected and never propagate.
pub fn collect_submodule_status(root: &Path) -> Result<Vec<StatusLine>> {
    let repo = Repository::open(root).ok();

    let entries = std::fs::read_dir(root).map_err(|source| KeyError::IoError {
        path: root.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| KeyError::IoError {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let mut lines = Vec::new();
    for name in names {
        if let SubmoduleQuery::Pinned(revision) = query_submodule(repo.as_ref(), &name) {
            lines.push(StatusLine::new(revision, name));
        }
    }

    Ok(lines)
}

/// Retrieves the subject line of the latest commit at `root`.
///
/// # Errors
///
/// Returns an error if `root` is not a Git repository or HEAD cannot be
/// resolved to a commit. Both are fatal for the `keys` subcommand.
pub fn head_subject(root: &Path) -> Result<String> {
    let repo = Repository::open(root).map_err(|_| KeyError::RepoNotFound {
        path: root.to_path_buf(),
    })?;

    let commit = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map_err(|source| KeyError::HeadError { source })?;

    Ok(commit.summary().unwrap_or_default().to_string())
}
