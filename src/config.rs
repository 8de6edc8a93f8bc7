//! Update configuration
//!
//! Everything the publish flow needs that is not fetched from the host.

use crate::error::{Error, Result};

/// What to publish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Repository-relative paths of the changed wrapper files
    pub files: Vec<String>,
    /// Gradle version the wrapper is updated to
    pub target_version: String,
    /// Gradle version the wrapper is updated from, if known
    pub source_version: Option<String>,
    /// Tip commit the update is based on
    pub base_sha: String,
}

impl UpdateRequest {
    /// Build a request, rejecting blank versions and an empty file list
    pub fn new(
        files: Vec<String>,
        target_version: &str,
        source_version: Option<&str>,
        base_sha: &str,
    ) -> Result<Self> {
        let target_version = target_version.trim();
        if target_version.is_empty() {
            return Err(Error::Config("target version must not be empty".to_string()));
        }
        if files.is_empty() {
            return Err(Error::Config("no changed files to commit".to_string()));
        }
        let base_sha = base_sha.trim();
        if base_sha.is_empty() {
            return Err(Error::Config("base commit SHA must not be empty".to_string()));
        }

        Ok(Self {
            files,
            target_version: target_version.to_string(),
            source_version: source_version
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from),
            base_sha: base_sha.to_string(),
        })
    }
}

/// How to publish
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Base branch for the PR; the repository default branch when unset
    pub target_branch: Option<String>,
    /// Logins to request reviews from
    pub reviewers: Vec<String>,
}

impl UpdateOptions {
    /// Build options from raw action-style inputs
    pub fn from_inputs(target_branch: Option<&str>, reviewers: Option<&str>) -> Self {
        Self {
            target_branch: target_branch
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(String::from),
            reviewers: reviewers.map(parse_reviewers).unwrap_or_default(),
        }
    }
}

/// Split free-form reviewer text on newlines, whitespace and commas
pub fn parse_reviewers(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}
