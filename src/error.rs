//! Error types for gradle-update-pr

use thiserror::Error;

/// Errors raised while publishing a wrapper update
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub client construction or request failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// The host answered with a status the flow does not expect
    #[error("GitHub API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the host
        message: String,
    },

    /// Error surfaced by the octocrab client
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// No usable credential
    #[error("authentication error: {0}")]
    Auth(String),

    /// Invalid or missing configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Input could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Local git command failed
    #[error("git error: {0}")]
    Git(String),

    /// Local filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Invariant violation inside the crate
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status carried by this error, if it came from the host
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Octocrab(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            _ => None,
        }
    }
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;
