use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::keys::restore_override;
use super::*;

fn setup_build_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("CMakeLists.txt"), "project(demo)\n").unwrap();
    temp_dir
}

fn commit_all(repo: &git2::Repository, message: &str) {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = git2::Signature::now("test", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

#[test]
fn test_hash_command() {
    let temp_dir = setup_build_tree();
    hash(temp_dir.path(), "CMakeLists.txt", 0, false).unwrap();
}

#[test]
fn test_hash_command_missing_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let result = hash(temp_dir.path(), "CMakeLists.txt", 0, false);
    assert!(matches!(result, Err(KeyError::ManifestNotFound { .. })));
}

#[test]
fn test_keys_command() {
    let temp_dir = setup_build_tree();
    let repo = git2::Repository::init(temp_dir.path()).unwrap();
    commit_all(&repo, "initial");

    keys(temp_dir.path(), "CMakeLists.txt", 0, false).unwrap();
}

#[test]
fn test_keys_command_without_repo() {
    let temp_dir = setup_build_tree();
    let result = keys(temp_dir.path(), "CMakeLists.txt", 0, false);
    assert!(matches!(result, Err(KeyError::RepoNotFound { .. })));
}

#[test]
fn test_execute_with_dir_resolves_relative_root() {
    let temp_dir = setup_build_tree();

    let cli = Cli::builder().command(Commands::Hash).build().unwrap();
    execute_with_dir(&cli, Some(temp_dir.path())).unwrap();
}

#[test]
fn test_execute_with_dir_missing_root() {
    let temp_dir = TempDir::new().unwrap();

    let cli = Cli::builder()
        .root("no-such-subdir")
        .command(Commands::Hash)
        .build()
        .unwrap();
    let result = execute_with_dir(&cli, Some(temp_dir.path()));
    assert!(matches!(result, Err(KeyError::IoError { .. })));
}

#[test]
fn test_restore_override_tags() {
    assert_eq!(
        restore_override("fix build (restore_hash=deadbeef)"),
        Some("deadbeef".to_string())
    );
    assert_eq!(
        restore_override("reuse_cache=0123abcD please"),
        Some("0123abcD".to_string())
    );
    assert_eq!(
        restore_override("bump deps reuse_hash=ff00"),
        Some("ff00".to_string())
    );
    assert_eq!(
        restore_override("cache_hash=a1b2c3"),
        Some("a1b2c3".to_string())
    );
}

#[test]
fn test_restore_override_absent() {
    assert_eq!(restore_override("fix build"), None);
    assert_eq!(restore_override("restore_hash="), None);
    assert_eq!(restore_override("restore_hash=zzz"), None);
    assert_eq!(restore_override(""), None);
}

#[test]
fn test_resolve_root_absolute() {
    let temp_dir = setup_build_tree();
    let resolved = resolve_root(Path::new("/elsewhere"), temp_dir.path()).unwrap();
    assert_eq!(resolved, temp_dir.path().canonicalize().unwrap());
}
