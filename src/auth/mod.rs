//! Authentication for GitHub
//!
//! Supports an explicit token, environment variables and the gh CLI.

mod github;

pub use github::{get_github_auth, test_github_auth, GitHubAuthConfig};

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token passed on the command line or as an action input
    Explicit,
    /// Token from environment variable
    EnvVar,
    /// Token from the gh CLI
    Cli,
}
