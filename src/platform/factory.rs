//! Hosting service factory
//!
//! Creates the GitHub service from repository coordinates and a credential.

use crate::auth::get_github_auth;
use crate::error::Result;
use crate::platform::{GitHubService, HostingService};
use crate::types::RepoConfig;
use tracing::debug;

/// Create a hosting service from configuration
///
/// Resolves the credential (see [`get_github_auth`]) and builds the client.
pub async fn create_hosting_service(
    config: &RepoConfig,
    token: Option<&str>,
) -> Result<Box<dyn HostingService>> {
    let auth = get_github_auth(token).await?;
    debug!(source = ?auth.source, repo = %config, "resolved GitHub credential");

    Ok(Box::new(GitHubService::new(
        &auth.token,
        config.owner.clone(),
        config.repo.clone(),
        config.host.clone(),
    )?))
}
