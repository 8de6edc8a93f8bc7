//! Hosting service for GitHub
//!
//! Provides the git data, pull request, label and reviewer operations the
//! update flow is built from.

mod detection;
mod factory;
mod github;

pub use detection::{api_base_uri, enterprise_host, parse_repo_spec};
pub use factory::create_hosting_service;
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{
    CommitInfo, GitRef, Label, NewCommit, PullRequest, RepoConfig, ReviewRequest, TreeEntry,
};
use async_trait::async_trait;

/// Hosting service trait for the operations the update flow consumes
///
/// Expected conditions are part of the return type: a missing label is
/// `Ok(None)` and a rejected reviewer request is [`ReviewRequest::Rejected`].
/// Every other failure is an `Err`.
#[async_trait]
pub trait HostingService: Send + Sync {
    /// First ref whose name starts with `pattern` (e.g. `heads/foo`)
    async fn find_matching_ref(&self, pattern: &str) -> Result<Option<GitRef>>;

    /// Fetch a commit and its tree SHA
    async fn get_commit(&self, sha: &str) -> Result<CommitInfo>;

    /// Create a blob from base64 content, returning its SHA
    async fn create_blob(&self, content_base64: &str) -> Result<String>;

    /// Create a tree layered on `base_tree`, returning its SHA
    async fn create_tree(&self, base_tree: &str, entries: &[TreeEntry]) -> Result<String>;

    /// Create a commit
    async fn create_commit(&self, commit: &NewCommit) -> Result<CommitInfo>;

    /// Create a ref (`refs/heads/...`) at `sha`
    async fn create_ref(&self, name: &str, sha: &str) -> Result<GitRef>;

    /// Name of the repository's default branch
    async fn default_branch(&self) -> Result<String>;

    /// Open a pull request
    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest>;

    /// Look up a label by name
    async fn get_label(&self, name: &str) -> Result<Option<Label>>;

    /// Create a label
    async fn create_label(&self, label: &Label) -> Result<Label>;

    /// Add labels to an issue or pull request
    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()>;

    /// Request reviews from the given logins
    async fn request_reviewers(&self, pr_number: u64, reviewers: &[String])
    -> Result<ReviewRequest>;

    /// Repository coordinates
    fn config(&self) -> &RepoConfig;
}
