//! Update publishing engine
//!
//! Publishes a Gradle wrapper update as a pull request:
//! 1. Check - skip entirely when the update branch already exists
//! 2. Commit - blobs, tree and commit through the git data API
//! 3. Branch - point a new ref at the commit
//! 4. Pull request - open it, label it, request reviewers

mod commit;
mod label;
mod naming;
mod progress;
mod publish;
mod pull_request;
mod reviewers;

pub use commit::{bot_author, build_tree, create_update_commit, BOT_EMAIL, BOT_NAME};
pub use label::{attach_label, ensure_label, wrapper_label, LabelResolution, LABEL_NAME};
pub use naming::{
    branch_name, branch_ref, commit_message, pr_body, pr_title, ref_pattern, release_notes_url,
    ISSUES_URL, UPDATE_BRANCH_PREFIX,
};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use publish::{
    create_update_branch, find_update_branch, publish_update, PublishOutcome, PublishPlan,
    PublishResult,
};
pub use pull_request::{open_pull_request, resolve_base_branch};
pub use reviewers::{request_reviewers, ReviewerOutcome, PARTIAL_REVIEWERS_WARNING};
