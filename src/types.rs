//! Core types for gradle-update-pr

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A git reference (branch) on the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GitRef {
    /// Full ref name (e.g. `refs/heads/gradlew-update-7.0`)
    pub name: String,
    /// Commit SHA the ref points at
    pub sha: String,
}

/// A commit on the host together with its tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitInfo {
    /// Commit SHA
    pub sha: String,
    /// Root tree SHA of the commit
    pub tree_sha: String,
}

/// Git file mode of a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileMode {
    /// Regular file (`100644`)
    #[serde(rename = "100644")]
    Regular,
    /// Executable file (`100755`)
    #[serde(rename = "100755")]
    Executable,
    /// Symbolic link (`120000`)
    #[serde(rename = "120000")]
    Symlink,
}

impl FileMode {
    /// Octal mode string as used by git
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "100644",
            Self::Executable => "100755",
            Self::Symlink => "120000",
        }
    }

    /// Parse a git mode string (`100644`, `100755`, `120000`)
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "100644" => Some(Self::Regular),
            "100755" => Some(Self::Executable),
            "120000" => Some(Self::Symlink),
            _ => None,
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object type of a tree entry. Only blobs are ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeEntryKind {
    /// File content
    Blob,
}

/// One path in a tree to be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// Repository-relative path
    pub path: String,
    /// Git file mode
    pub mode: FileMode,
    /// Object type
    #[serde(rename = "type")]
    pub kind: TreeEntryKind,
    /// SHA of an already created blob
    pub sha: String,
}

/// Author identity attached to generated commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name
    pub name: String,
    /// Author email
    pub email: String,
    /// Authoring time
    pub date: DateTime<Utc>,
}

/// A commit to be created on the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommit {
    /// Full commit message
    pub message: String,
    /// Tree the commit points at
    pub tree_sha: String,
    /// Parent commit SHAs (always exactly one for update commits)
    pub parents: Vec<String>,
    /// Author identity
    pub author: CommitAuthor,
}

/// A pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// A repository label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Hex color without leading `#`
    pub color: String,
    /// Label description
    pub description: Option<String>,
}

/// Host response to a reviewer request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewRequest {
    /// Request accepted; holds the logins that ended up requested
    Accepted(Vec<String>),
    /// Request rejected as invalid input (HTTP 422); holds the host message
    Rejected(String),
}

/// Repository coordinates on GitHub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom host (None for github.com)
    pub host: Option<String>,
}

impl fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_mode_strings() {
        assert_eq!(FileMode::parse("100755"), Some(FileMode::Executable));
        assert_eq!(FileMode::parse("100644"), Some(FileMode::Regular));
        assert_eq!(FileMode::parse("040000"), None);
        assert_eq!(FileMode::Symlink.to_string(), "120000");
    }

    #[test]
    fn test_tree_entry_serializes_as_git_data_api_expects() {
        let entry = TreeEntry {
            path: "gradlew".to_string(),
            mode: FileMode::Executable,
            kind: TreeEntryKind::Blob,
            sha: "abc123".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": "gradlew",
                "mode": "100755",
                "type": "blob",
                "sha": "abc123"
            })
        );
    }
}
