//! Tree and commit construction through the git data API

use crate::config::UpdateRequest;
use crate::error::Result;
use crate::platform::HostingService;
use crate::types::{CommitAuthor, CommitInfo, NewCommit, TreeEntry, TreeEntryKind};
use crate::update::naming::commit_message;
use crate::worktree::WorkingTree;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::Utc;
use tracing::debug;

/// Author name of generated commits
pub const BOT_NAME: &str = "gradle-update-robot";

/// Author email of generated commits
pub const BOT_EMAIL: &str = "gradle-update-robot@regolo.cc";

/// Fixed bot identity, stamped with the current time
pub fn bot_author() -> CommitAuthor {
    CommitAuthor {
        name: BOT_NAME.to_string(),
        email: BOT_EMAIL.to_string(),
        date: Utc::now(),
    }
}

/// Upload every path as a blob and create one tree on top of `base_tree`
///
/// Blobs are created one at a time in path order; the tree is created only
/// after all of them exist.
pub async fn build_tree(
    hosting: &dyn HostingService,
    worktree: &dyn WorkingTree,
    base_tree: &str,
    paths: &[String],
) -> Result<String> {
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        let content = BASE64.encode(worktree.read_file(path).await?);
        let sha = hosting.create_blob(&content).await?;
        let mode = worktree.file_mode(path).await?;

        debug!(path = %path, %mode, blob = %sha, "blob created");

        entries.push(TreeEntry {
            path: path.clone(),
            mode,
            kind: TreeEntryKind::Blob,
            sha,
        });
    }

    let tree_sha = hosting.create_tree(base_tree, &entries).await?;
    debug!(tree = %tree_sha, entries = entries.len(), "tree created");

    Ok(tree_sha)
}

/// Create the update commit on top of `tip`
///
/// `tip` must be the commit observed at the start of the run; it becomes
/// the sole parent.
pub async fn create_update_commit(
    hosting: &dyn HostingService,
    worktree: &dyn WorkingTree,
    tip: &CommitInfo,
    request: &UpdateRequest,
) -> Result<CommitInfo> {
    let tree_sha = build_tree(hosting, worktree, &tip.tree_sha, &request.files).await?;

    let commit = NewCommit {
        message: commit_message(&request.target_version, request.source_version.as_deref()),
        tree_sha,
        parents: vec![tip.sha.clone()],
        author: bot_author(),
    };

    let created = hosting.create_commit(&commit).await?;
    debug!(commit = %created.sha, parent = %tip.sha, "commit created");

    Ok(created)
}
