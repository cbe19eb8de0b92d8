//! File system abstraction for testability.

use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;

/// Abstraction over the file system operations the run needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Creates all directories in the given path.
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

    /// Lists the file names (not paths) directly inside a directory.
    ///
    /// This is the one-shot snapshot used for skip-existing checks; it is
    /// never refreshed during a run.
    async fn list_file_names(&self, dir: &Path) -> std::io::Result<HashSet<String>>;
}

/// Default file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem` instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for TokioFileSystem {
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn list_file_names(&self, dir: &Path) -> std::io::Result<HashSet<String>> {
        let mut names = HashSet::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            names.insert(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn tokio_fs_create_dir_all() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");

        let fs = TokioFileSystem::new();
        fs.create_dir_all(&nested).await.unwrap();
        assert!(nested.exists());
    }

    #[tokio::test]
    async fn tokio_fs_lists_file_names() {
        let dir = TempDir::new().unwrap();
        std::fs::File::create(dir.path().join("a.mp3")).unwrap();
        std::fs::File::create(dir.path().join("b.mp3")).unwrap();

        let fs = TokioFileSystem::new();
        let names = fs.list_file_names(dir.path()).await.unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("a.mp3"));
        assert!(names.contains("b.mp3"));
    }

    #[tokio::test]
    async fn tokio_fs_empty_dir_lists_nothing() {
        let dir = TempDir::new().unwrap();
        let fs = TokioFileSystem::new();
        assert!(fs.list_file_names(dir.path()).await.unwrap().is_empty());
    }
}
