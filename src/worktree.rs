//! Local working tree access
//!
//! The publish flow only ever needs two things from the checkout: the raw
//! bytes of a changed file and its git file mode.

use crate::error::{Error, Result};
use crate::types::FileMode;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Read access to the files being committed
#[async_trait]
pub trait WorkingTree: Send + Sync {
    /// Raw bytes of a repository-relative path
    async fn read_file(&self, path: &str) -> Result<Vec<u8>>;

    /// Git file mode of a repository-relative path
    async fn file_mode(&self, path: &str) -> Result<FileMode>;
}

/// Working tree backed by a local git checkout
#[derive(Debug, Clone)]
pub struct GitWorkingTree {
    root: PathBuf,
}

impl GitWorkingTree {
    /// Open a checkout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Checkout root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Mode recorded in the git index, if the path is tracked
    async fn index_mode(&self, path: &str) -> Result<Option<FileMode>> {
        let output = Command::new("git")
            .args(["ls-files", "--stage", "--", path])
            .current_dir(&self.root)
            .output()
            .await
            .map_err(|e| Error::Git(format!("failed to run git ls-files: {e}")))?;

        if !output.status.success() {
            return Err(Error::Git(format!(
                "git ls-files failed for {path}: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        // <mode> <object> <stage>\t<path>
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().next())
            .and_then(FileMode::parse))
    }

    async fn filesystem_mode(&self, path: &str) -> Result<FileMode> {
        let metadata = tokio::fs::symlink_metadata(self.root.join(path)).await?;

        if metadata.file_type().is_symlink() {
            return Ok(FileMode::Symlink);
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 != 0 {
                return Ok(FileMode::Executable);
            }
        }

        Ok(FileMode::Regular)
    }
}

#[async_trait]
impl WorkingTree for GitWorkingTree {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(self.root.join(path)).await?)
    }

    async fn file_mode(&self, path: &str) -> Result<FileMode> {
        if let Some(mode) = self.index_mode(path).await? {
            return Ok(mode);
        }

        debug!(path, "not in git index, using filesystem mode");
        self.filesystem_mode(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_file_relative_to_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("gradle/wrapper")).unwrap();
        std::fs::write(
            dir.path().join("gradle/wrapper/gradle-wrapper.properties"),
            "distributionUrl=gradle-7.0-bin.zip\n",
        )
        .unwrap();

        let tree = GitWorkingTree::new(dir.path());
        let bytes = tree
            .read_file("gradle/wrapper/gradle-wrapper.properties")
            .await
            .unwrap();
        assert_eq!(bytes, b"distributionUrl=gradle-7.0-bin.zip\n");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let tree = GitWorkingTree::new(dir.path());
        let err = tree.read_file("gradlew").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_filesystem_mode_detects_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("gradlew");
        std::fs::write(&script, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("gradlew.bat"), "@echo off\r\n").unwrap();
        std::fs::set_permissions(
            dir.path().join("gradlew.bat"),
            std::fs::Permissions::from_mode(0o644),
        )
        .unwrap();

        let tree = GitWorkingTree::new(dir.path());
        assert_eq!(
            tree.filesystem_mode("gradlew").await.unwrap(),
            FileMode::Executable
        );
        assert_eq!(
            tree.filesystem_mode("gradlew.bat").await.unwrap(),
            FileMode::Regular
        );
    }
}
