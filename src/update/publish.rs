//! Update publishing
//!
//! Runs the steps in order, threading each step's output into the next.
//! Nothing is retried: the first unrecovered error aborts the run.

use crate::config::{UpdateOptions, UpdateRequest};
use crate::error::Result;
use crate::platform::HostingService;
use crate::types::{CommitInfo, GitRef, PullRequest};
use crate::update::commit::create_update_commit;
use crate::update::label::{attach_label, ensure_label, LabelResolution, LABEL_NAME};
use crate::update::naming::{branch_name, branch_ref, pr_title, ref_pattern};
use crate::update::pull_request::{open_pull_request, resolve_base_branch};
use crate::update::reviewers::{request_reviewers, ReviewerOutcome};
use crate::update::{Phase, ProgressCallback};
use crate::worktree::WorkingTree;
use tracing::{debug, info, warn};

/// What a dry run would have done
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishPlan {
    /// Branch that would be created
    pub branch: String,
    /// Base branch the PR would target
    pub base_branch: String,
    /// PR title
    pub title: String,
    /// Files that would be committed
    pub files: Vec<String>,
    /// Label that would be attached
    pub label: String,
    /// Reviewers that would be requested
    pub reviewers: Vec<String>,
}

/// Result of a completed publish
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// The update commit
    pub commit: CommitInfo,
    /// The update branch
    pub branch: GitRef,
    /// The opened pull request
    pub pull_request: PullRequest,
    /// How the label was resolved
    pub label: LabelResolution,
    /// Result of the reviewer step
    pub reviewers: ReviewerOutcome,
    /// Non-fatal problems
    pub warnings: Vec<String>,
}

/// Outcome of [`publish_update`]
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// An update branch for the version exists; nothing was written
    AlreadyExists(GitRef),
    /// Dry run; nothing was written
    DryRun(PublishPlan),
    /// The update was published
    Published(Box<PublishResult>),
}

/// Look for an existing update branch for `version`
///
/// Returns the first ref matching `heads/gradlew-update-<version>`.
pub async fn find_update_branch(
    hosting: &dyn HostingService,
    version: &str,
) -> Result<Option<GitRef>> {
    hosting.find_matching_ref(&ref_pattern(version)).await
}

/// Create `refs/heads/gradlew-update-<version>` at `commit_sha`
///
/// Fails if the ref already exists.
pub async fn create_update_branch(
    hosting: &dyn HostingService,
    version: &str,
    commit_sha: &str,
) -> Result<GitRef> {
    let branch = hosting.create_ref(&branch_ref(version), commit_sha).await?;
    debug!(branch = %branch.name, sha = %branch.sha, "update branch created");
    Ok(branch)
}

/// Publish a wrapper update as a pull request
///
/// This performs, in order:
/// 1. Existing-branch check (returns early without writing if found)
/// 2. Blobs, tree and commit on top of `request.base_sha`
/// 3. Update branch ref
/// 4. Pull request into the target or default branch
/// 5. Label lookup/creation and attachment
/// 6. Reviewer request, when reviewers are configured
pub async fn publish_update(
    request: &UpdateRequest,
    options: &UpdateOptions,
    hosting: &dyn HostingService,
    worktree: &dyn WorkingTree,
    progress: &dyn ProgressCallback,
    dry_run: bool,
) -> Result<PublishOutcome> {
    let version = &request.target_version;

    progress.on_phase(Phase::CheckingBranch).await;

    // Best effort: not atomic with the writes below.
    if let Some(existing) = find_update_branch(hosting, version).await? {
        info!(branch = %existing.name, "update branch already exists");
        progress
            .on_message(&format!(
                "Branch {} already exists, skipping",
                branch_name(version)
            ))
            .await;
        return Ok(PublishOutcome::AlreadyExists(existing));
    }

    if dry_run {
        progress.on_message("Dry run - no changes will be made").await;
        let plan = PublishPlan {
            branch: branch_name(version),
            base_branch: resolve_base_branch(hosting, options).await?,
            title: pr_title(version, request.source_version.as_deref()),
            files: request.files.clone(),
            label: LABEL_NAME.to_string(),
            reviewers: options.reviewers.clone(),
        };
        return Ok(PublishOutcome::DryRun(plan));
    }

    progress.on_phase(Phase::CreatingCommit).await;
    let tip = hosting.get_commit(&request.base_sha).await?;
    let commit = create_update_commit(hosting, worktree, &tip, request).await?;
    progress.on_commit_created(&commit).await;

    // TODO: reuse the branch via an update-ref when an earlier run created it
    // but failed before opening the PR; today create_ref fails on it.
    progress.on_phase(Phase::CreatingBranch).await;
    let branch = create_update_branch(hosting, version, &commit.sha).await?;
    progress.on_branch_created(&branch).await;

    progress.on_phase(Phase::CreatingPullRequest).await;
    let base = resolve_base_branch(hosting, options).await?;
    let pull_request = open_pull_request(hosting, request, &base).await?;
    progress.on_pr_created(&pull_request).await;

    progress.on_phase(Phase::Labeling).await;
    let label = ensure_label(hosting).await?;
    attach_label(hosting, pull_request.number, &label).await?;

    let mut warnings = Vec::new();

    if !options.reviewers.is_empty() {
        progress.on_phase(Phase::RequestingReviewers).await;
    }
    let reviewers = request_reviewers(hosting, pull_request.number, &options.reviewers).await?;
    if let Some(warning) = reviewers.warning() {
        warn!("{warning}");
        progress.on_warning(&warning).await;
        warnings.push(warning);
    }

    progress.on_phase(Phase::Complete).await;

    Ok(PublishOutcome::Published(Box::new(PublishResult {
        commit,
        branch,
        pull_request,
        label,
        reviewers,
        warnings,
    })))
}
