//! Filesystem access used by the index builder

use crate::index::types::IndexConfig;
use ignore::WalkBuilder;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// One entry produced by a directory walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_file: bool,
}

/// Directory enumeration and file reads.
///
/// The builder only talks to the filesystem through this trait, which keeps
/// it testable with an in-memory tree. Implementations must be `Sync`
/// because files are read from the rayon pool.
pub trait FileSystem: Sync {
    /// `Ok(false)` when `root` exists but is not a directory
    fn root_is_dir(&self, root: &Path) -> io::Result<bool>;

    /// Every entry below `root`. Entries that cannot be listed are dropped.
    fn entries(&self, root: &Path, config: &IndexConfig) -> Vec<WalkEntry>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// The real filesystem, walked with `ignore`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn root_is_dir(&self, root: &Path) -> io::Result<bool> {
        fs::metadata(root).map(|m| m.is_dir())
    }

    fn entries(&self, root: &Path, config: &IndexConfig) -> Vec<WalkEntry> {
        let respect = config.respect_ignore_files;
        let walker = WalkBuilder::new(root)
            .hidden(!config.include_hidden)
            .ignore(respect)
            .git_ignore(respect)
            .git_global(respect)
            .git_exclude(respect)
            .parents(respect)
            .require_git(false)
            .follow_links(config.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable directory entry");
                    None
                }
            })
            .filter(|entry| entry.depth() > 0)
            .map(|entry| {
                let path = entry.into_path();
                // Follows symlinks, so a link to a regular file counts as a file
                let is_file = path.is_file();
                WalkEntry { path, is_file }
            })
            .collect()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_lists_nested_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("sub").join("c.md"), "c").unwrap();

        let entries = OsFileSystem.entries(dir.path(), &IndexConfig::default());
        let files: Vec<_> = entries
            .iter()
            .filter(|e| e.is_file)
            .map(|e| e.path.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            files,
            vec![
                PathBuf::from("a.txt"),
                PathBuf::from("b.txt"),
                PathBuf::from("sub").join("c.md"),
            ]
        );
        assert!(entries.iter().any(|e| !e.is_file && e.path.ends_with("sub")));
    }

    #[test]
    fn test_hidden_files_follow_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".hidden.txt"), "x").unwrap();

        let mut config = IndexConfig::default();
        assert_eq!(OsFileSystem.entries(dir.path(), &config).len(), 1);

        config.include_hidden = false;
        assert!(OsFileSystem.entries(dir.path(), &config).is_empty());
    }

    #[test]
    fn test_root_is_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        assert!(OsFileSystem.root_is_dir(dir.path()).unwrap());
        assert!(!OsFileSystem.root_is_dir(&file).unwrap());
        let err = OsFileSystem.root_is_dir(&dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
