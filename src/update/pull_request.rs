//! Pull request creation and base branch resolution

use crate::config::{UpdateOptions, UpdateRequest};
use crate::error::Result;
use crate::platform::HostingService;
use crate::types::PullRequest;
use crate::update::naming::{branch_name, pr_body, pr_title};
use tracing::debug;

/// Configured target branch, or the repository default branch
///
/// The default branch is only looked up when no target branch is configured.
pub async fn resolve_base_branch(
    hosting: &dyn HostingService,
    options: &UpdateOptions,
) -> Result<String> {
    let base = match &options.target_branch {
        Some(branch) => branch.clone(),
        None => hosting.default_branch().await?,
    };
    debug!(base = %base, "target branch");
    Ok(base)
}

/// Open the update pull request from the update branch into `base`
pub async fn open_pull_request(
    hosting: &dyn HostingService,
    request: &UpdateRequest,
    base: &str,
) -> Result<PullRequest> {
    let source = request.source_version.as_deref();
    let title = pr_title(&request.target_version, source);
    let body = pr_body(&request.target_version, source);

    hosting
        .create_pull_request(&branch_name(&request.target_version), base, &title, &body)
        .await
}
