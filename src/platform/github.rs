//! GitHub hosting service implementation

use crate::error::{Error, Result};
use crate::platform::detection::{api_base_uri, enterprise_host};
use crate::platform::HostingService;
use crate::types::{
    CommitAuthor, CommitInfo, GitRef, Label, NewCommit, PullRequest, RepoConfig, ReviewRequest,
    TreeEntry,
};
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
}

#[derive(Deserialize)]
struct Sha {
    sha: String,
}

#[derive(Deserialize)]
struct RefResponse {
    #[serde(rename = "ref")]
    ref_field: String,
    object: Sha,
}

#[derive(Deserialize)]
struct CommitResponse {
    sha: String,
    tree: Sha,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
    color: String,
    description: Option<String>,
}

#[derive(Deserialize)]
struct Reviewer {
    login: String,
}

#[derive(Deserialize)]
struct RequestedReviewersResponse {
    #[serde(default)]
    requested_reviewers: Vec<Reviewer>,
}

#[derive(Serialize)]
struct CreateBlobPayload<'a> {
    content: &'a str,
    encoding: &'static str,
}

#[derive(Serialize)]
struct CreateTreePayload<'a> {
    base_tree: &'a str,
    tree: &'a [TreeEntry],
}

#[derive(Serialize)]
struct CreateCommitPayload<'a> {
    message: &'a str,
    tree: &'a str,
    parents: &'a [String],
    author: &'a CommitAuthor,
}

#[derive(Serialize)]
struct CreateRefPayload<'a> {
    #[serde(rename = "ref")]
    ref_field: &'a str,
    sha: &'a str,
}

#[derive(Serialize)]
struct RequestReviewersPayload<'a> {
    reviewers: &'a [String],
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `host` selects a GitHub Enterprise instance (`https://<host>/api/v3`).
    pub fn new(token: &str, owner: String, repo: String, host: Option<String>) -> Result<Self> {
        let host = host.as_deref().and_then(enterprise_host);
        let base_uri = api_base_uri(host.as_deref());
        Self::build(
            token,
            RepoConfig { owner, repo, host },
            base_uri.as_deref(),
        )
    }

    /// Create a service against an explicit API root (used for API mocks)
    pub fn with_base_uri(token: &str, config: RepoConfig, base_uri: &str) -> Result<Self> {
        Self::build(token, config, Some(base_uri))
    }

    fn build(token: &str, config: RepoConfig, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn route(&self, path: &str) -> String {
        format!("/repos/{}/{}{path}", self.config.owner, self.config.repo)
    }
}

/// Host-provided message of an API error
fn api_message(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => source.message.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl HostingService for GitHubService {
    async fn find_matching_ref(&self, pattern: &str) -> Result<Option<GitRef>> {
        let refs: Vec<RefResponse> = self
            .client
            .get(self.route(&format!("/git/matching-refs/{pattern}")), None::<&()>)
            .await?;

        debug!(pattern, matches = refs.len(), "matching refs");

        Ok(refs.into_iter().next().map(|r| GitRef {
            name: r.ref_field,
            sha: r.object.sha,
        }))
    }

    async fn get_commit(&self, sha: &str) -> Result<CommitInfo> {
        let commit: CommitResponse = self
            .client
            .get(self.route(&format!("/git/commits/{sha}")), None::<&()>)
            .await?;

        Ok(CommitInfo {
            sha: commit.sha,
            tree_sha: commit.tree.sha,
        })
    }

    async fn create_blob(&self, content_base64: &str) -> Result<String> {
        let blob: Sha = self
            .client
            .post(
                self.route("/git/blobs"),
                Some(&CreateBlobPayload {
                    content: content_base64,
                    encoding: "base64",
                }),
            )
            .await?;

        Ok(blob.sha)
    }

    async fn create_tree(&self, base_tree: &str, entries: &[TreeEntry]) -> Result<String> {
        let tree: Sha = self
            .client
            .post(
                self.route("/git/trees"),
                Some(&CreateTreePayload {
                    base_tree,
                    tree: entries,
                }),
            )
            .await?;

        Ok(tree.sha)
    }

    async fn create_commit(&self, commit: &NewCommit) -> Result<CommitInfo> {
        let created: CommitResponse = self
            .client
            .post(
                self.route("/git/commits"),
                Some(&CreateCommitPayload {
                    message: &commit.message,
                    tree: &commit.tree_sha,
                    parents: &commit.parents,
                    author: &commit.author,
                }),
            )
            .await?;

        Ok(CommitInfo {
            sha: created.sha,
            tree_sha: created.tree.sha,
        })
    }

    async fn create_ref(&self, name: &str, sha: &str) -> Result<GitRef> {
        let created: RefResponse = self
            .client
            .post(
                self.route("/git/refs"),
                Some(&CreateRefPayload {
                    ref_field: name,
                    sha,
                }),
            )
            .await?;

        Ok(GitRef {
            name: created.ref_field,
            sha: created.object.sha,
        })
    }

    async fn default_branch(&self) -> Result<String> {
        let repo = self
            .client
            .repos(&self.config.owner, &self.config.repo)
            .get()
            .await?;

        repo.default_branch.ok_or_else(|| {
            Error::GitHubApi(format!("repository {} has no default branch", self.config))
        })
    }

    async fn create_pull_request(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        debug!(
            changed_files = ?pr.changed_files,
            mergeable = ?pr.mergeable,
            "pull request created"
        );

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    async fn get_label(&self, name: &str) -> Result<Option<Label>> {
        let result: std::result::Result<LabelResponse, _> = self
            .client
            .get(self.route(&format!("/labels/{name}")), None::<&()>)
            .await;

        match result {
            Ok(label) => Ok(Some(Label {
                name: label.name,
                color: label.color,
                description: label.description,
            })),
            Err(e) => {
                let err = Error::from(e);
                if err.status() == Some(404) {
                    Ok(None)
                } else {
                    Err(err)
                }
            }
        }
    }

    async fn create_label(&self, label: &Label) -> Result<Label> {
        let created = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .create_label(
                &label.name,
                &label.color,
                label.description.as_deref().unwrap_or_default(),
            )
            .await?;

        debug!(id = ?created.id, "label created");

        Ok(Label {
            name: created.name,
            color: created.color,
            description: created.description,
        })
    }

    async fn add_labels(&self, number: u64, labels: &[String]) -> Result<()> {
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(number, labels)
            .await?;
        Ok(())
    }

    async fn request_reviewers(
        &self,
        pr_number: u64,
        reviewers: &[String],
    ) -> Result<ReviewRequest> {
        let result: std::result::Result<RequestedReviewersResponse, _> = self
            .client
            .post(
                self.route(&format!("/pulls/{pr_number}/requested_reviewers")),
                Some(&RequestReviewersPayload { reviewers }),
            )
            .await;

        match result {
            Ok(response) => Ok(ReviewRequest::Accepted(
                response
                    .requested_reviewers
                    .into_iter()
                    .map(|r| r.login)
                    .collect(),
            )),
            Err(e) => {
                let message = api_message(&e);
                let err = Error::from(e);
                if err.status() == Some(422) {
                    Ok(ReviewRequest::Rejected(message))
                } else {
                    Err(err)
                }
            }
        }
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
