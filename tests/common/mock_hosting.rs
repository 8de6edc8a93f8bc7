//! Mock hosting service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use gradle_update_pr::error::{Error, Result};
use gradle_update_pr::platform::HostingService;
use gradle_update_pr::types::{
    CommitInfo, GitRef, Label, NewCommit, PullRequest, RepoConfig, ReviewRequest, TreeEntry,
};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// SHA the mock reports for the tip commit
pub const TIP_SHA: &str = "tip0000000000000000000000000000000000000";
/// Tree SHA of the tip commit
pub const TIP_TREE_SHA: &str = "tiptree000000000000000000000000000000000";
/// SHA of every created tree
pub const NEW_TREE_SHA: &str = "newtree000000000000000000000000000000000";
/// SHA of every created commit
pub const NEW_COMMIT_SHA: &str = "newcommit0000000000000000000000000000000";

/// One recorded hosting call, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindMatchingRef(String),
    GetCommit(String),
    CreateBlob(String),
    CreateTree {
        base_tree: String,
        entries: Vec<TreeEntry>,
    },
    CreateCommit(NewCommit),
    CreateRef {
        name: String,
        sha: String,
    },
    DefaultBranch,
    CreatePullRequest {
        head: String,
        base: String,
        title: String,
        body: String,
    },
    GetLabel(String),
    CreateLabel(Label),
    AddLabels {
        number: u64,
        labels: Vec<String>,
    },
    RequestReviewers {
        number: u64,
        reviewers: Vec<String>,
    },
}

impl Call {
    /// Whether this call mutates state on the host
    pub const fn is_write(&self) -> bool {
        matches!(
            self,
            Self::CreateBlob(_)
                | Self::CreateTree { .. }
                | Self::CreateCommit(_)
                | Self::CreateRef { .. }
                | Self::CreatePullRequest { .. }
                | Self::CreateLabel(_)
                | Self::AddLabels { .. }
                | Self::RequestReviewers { .. }
        )
    }
}

/// Mock hosting service for testing
///
/// Features:
/// - Ordered call log for verification
/// - Labels persist across runs on the same mock
/// - Configurable existing ref, default branch and reviewer response
/// - Error injection per operation
pub struct MockHostingService {
    config: RepoConfig,
    calls: Mutex<Vec<Call>>,
    next_blob: AtomicU64,
    next_pr_number: AtomicU64,
    existing_ref: Mutex<Option<GitRef>>,
    default_branch: Mutex<String>,
    labels: Mutex<HashMap<String, Label>>,
    reviewer_response: Mutex<Option<ReviewRequest>>,
    failures: Mutex<HashMap<&'static str, Error>>,
}

impl MockHostingService {
    /// Create an empty mock for `test/repo`
    pub fn new() -> Self {
        Self {
            config: RepoConfig {
                owner: "test".to_string(),
                repo: "repo".to_string(),
                host: None,
            },
            calls: Mutex::new(Vec::new()),
            next_blob: AtomicU64::new(1),
            next_pr_number: AtomicU64::new(1),
            existing_ref: Mutex::new(None),
            default_branch: Mutex::new("main".to_string()),
            labels: Mutex::new(HashMap::new()),
            reviewer_response: Mutex::new(None),
            failures: Mutex::new(HashMap::new()),
        }
    }

    // === Configuration ===

    /// Make `find_matching_ref` return this ref
    pub fn set_existing_ref(&self, name: &str, sha: &str) {
        *self.existing_ref.lock().unwrap() = Some(GitRef {
            name: name.to_string(),
            sha: sha.to_string(),
        });
    }

    /// Set the repository default branch
    pub fn set_default_branch(&self, branch: &str) {
        *self.default_branch.lock().unwrap() = branch.to_string();
    }

    /// Seed a label as already existing
    pub fn add_existing_label(&self, label: Label) {
        self.labels.lock().unwrap().insert(label.name.clone(), label);
    }

    /// Override the reviewer response (default: accept everyone)
    pub fn set_reviewer_response(&self, response: ReviewRequest) {
        *self.reviewer_response.lock().unwrap() = Some(response);
    }

    /// Make `operation` (trait method name) fail with `error`
    pub fn fail(&self, operation: &'static str, error: Error) {
        self.failures.lock().unwrap().insert(operation, error);
    }

    // === Call verification ===

    /// All calls so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that mutate host state
    pub fn write_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_write).collect()
    }

    /// Number of calls matching a predicate
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    /// Clear the call log, keeping state such as labels
    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, operation: &'static str) -> Result<()> {
        match self.failures.lock().unwrap().remove(operation) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl HostingService for MockHostingService {
    async fn find_matching_ref(&self, pattern: &str) -> Result<Option<GitRef>> {
        self.record(Call::FindMatchingRef(pattern.to_string()));
        self.check_failure("find_matching_ref")?;
        Ok(self.existing_ref.lock().unwrap().clone())
    }

    async fn get_commit(&self, sha: &str) -> Result<CommitInfo> {
        self.record(Call::GetCommit(sha.to_string()));
        self.check_failure("get_commit")?;
        Ok(CommitInfo {
            sha: TIP_SHA.to_string(),
            tree_sha: TIP_TREE_SHA.to_string(),
        })
    }

    async fn create_blob(&self, content_base64: &str) -> Result<String> {
        self.record(Call::CreateBlob(content_base64.to_string()));
        self.check_failure("create_blob")?;
        let n = self.next_blob.fetch_add(1, Ordering::SeqCst);
        Ok(format!("blob-{n}"))
    }

    async fn create_tree(&self, base_tree: &str, entries: &[TreeEntry]) -> Result<String> {
        self.record(Call::CreateTree {
            base_tree: base_tree.to_string(),
            entries: entries.to_vec(),
        });
        self.check_failure("create_tree")?;
        Ok(NEW_TREE_SHA.to_string())
    }

    async fn create_commit(&self, commit: &NewCommit) -> Result<CommitInfo> {
        self.record(Call::CreateCommit(commit.clone()));
        self.check_failure("create_commit")?;
        Ok(CommitInfo {
            sha: NEW_COMMIT_SHA.to_string(),
            tree_sha: commit.tree_sha.clone(),
        })
    }

    async fn create_ref(&self, name: &str, sha: &str) -> Result<GitRef> {
        self.record(Call::CreateRef {
            name: name.to_string(),
            sha: sha.to_string(),
        });
        self.check_failure("create_ref")?;
        Ok(GitRef {
            name: name.to_string(),
            sha: sha.to_string(),
        })
    }

    async fn default_branch(&self) -> Result<String> {
        self.record(Call::DefaultBranch);
        self.check_failure("default_branch")?;
        Ok(self.default_branch.lock().unwrap().clone())
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        self.record(Call::CreatePullRequest {
            head: head.to_string(),
            base: base.to_string(),
            title: title.to_string(),
            body: body.to_string(),
        });
        self.check_failure("create_pull_request")?;

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/test/repo/pull/{number}"),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    async fn get_label(&self, name: &str) -> Result<Option<Label>> {
        self.record(Call::GetLabel(name.to_string()));
        self.check_failure("get_label")?;
        Ok(self.labels.lock().unwrap().get(name).cloned())
    }

    async fn create_label(&self, label: &Label) -> Result<Label> {
        self.record(Call::CreateLabel(label.clone()));
        self.check_failure("create_label")?;
        self.labels
            .lock()
            .unwrap()
            .insert(label.name.clone(), label.clone());
        Ok(label.clone())
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        self.record(Call::AddLabels {
            number,
            labels: labels.to_vec(),
        });
        self.check_failure("add_labels")
    }

    async fn request_reviewers(
        &self,
        pr_number: u64,
        reviewers: &[String],
    ) -> Result<ReviewRequest> {
        self.record(Call::RequestReviewers {
            number: pr_number,
            reviewers: reviewers.to_vec(),
        });
        self.check_failure("request_reviewers")?;
        Ok(self
            .reviewer_response
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| ReviewRequest::Accepted(reviewers.to_vec())))
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
