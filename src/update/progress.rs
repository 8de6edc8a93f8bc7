//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces (CLI, tests, embedding tools) to
//! receive progress updates while an update is published.

use crate::types::{CommitInfo, GitRef, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Publishing phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Looking for an existing update branch
    CheckingBranch,
    /// Creating blobs, tree and commit
    CreatingCommit,
    /// Creating the update branch ref
    CreatingBranch,
    /// Opening the pull request
    CreatingPullRequest,
    /// Ensuring and attaching the label
    Labeling,
    /// Requesting reviewers
    RequestingReviewers,
    /// Publishing complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CheckingBranch => "Checking for existing update branch",
            Self::CreatingCommit => "Creating commit",
            Self::CreatingBranch => "Creating branch",
            Self::CreatingPullRequest => "Opening pull request",
            Self::Labeling => "Labeling pull request",
            Self::RequestingReviewers => "Requesting reviewers",
            Self::Complete => "Done",
        };
        f.write_str(s)
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates while publishing.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called when the update commit exists on the host
    async fn on_commit_created(&self, commit: &CommitInfo);

    /// Called when the update branch exists on the host
    async fn on_branch_created(&self, branch: &GitRef);

    /// Called when the pull request is opened
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called for non-fatal problems (the run still succeeds)
    async fn on_warning(&self, message: &str);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_commit_created(&self, _commit: &CommitInfo) {}
    async fn on_branch_created(&self, _branch: &GitRef) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_warning(&self, _message: &str) {}
    async fn on_message(&self, _message: &str) {}
}
