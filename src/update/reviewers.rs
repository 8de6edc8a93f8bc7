//! Reviewer requests with partial-failure tolerance

use crate::error::Result;
use crate::platform::HostingService;
use crate::types::ReviewRequest;
use tracing::{debug, info};

/// Warning emitted when the host accepted only some of the reviewers
pub const PARTIAL_REVIEWERS_WARNING: &str =
    "Unable to set all the PR reviewers, check usernames are correct.";

/// Result of the reviewer step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewerOutcome {
    /// No reviewers configured; nothing was requested
    Skipped,
    /// Every requested reviewer was added
    Added(Vec<String>),
    /// Only some reviewers were added
    Partial {
        /// Logins that were requested
        requested: Vec<String>,
        /// Logins the host actually added
        added: Vec<String>,
    },
    /// The host rejected the request as invalid input
    Rejected(String),
}

impl ReviewerOutcome {
    /// Warning to surface to the user, if any
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Skipped | Self::Added(_) => None,
            Self::Partial { added, .. } if added.is_empty() => {
                Some(format!("{PARTIAL_REVIEWERS_WARNING} Added: none"))
            }
            Self::Partial { added, .. } => Some(format!(
                "{PARTIAL_REVIEWERS_WARNING} Added: {}",
                added.join(", ")
            )),
            Self::Rejected(message) => Some(message.clone()),
        }
    }
}

/// Request reviews on a pull request
///
/// An empty list skips the call. Partial acceptance and validation
/// rejections are ordinary outcomes; every other failure is an error.
pub async fn request_reviewers(
    hosting: &dyn HostingService,
    pr_number: u64,
    reviewers: &[String],
) -> Result<ReviewerOutcome> {
    if reviewers.is_empty() {
        return Ok(ReviewerOutcome::Skipped);
    }

    info!("Adding PR reviewers: {}", reviewers.join(","));

    match hosting.request_reviewers(pr_number, reviewers).await? {
        ReviewRequest::Accepted(added) if added.len() == reviewers.len() => {
            Ok(ReviewerOutcome::Added(added))
        }
        ReviewRequest::Accepted(added) => {
            debug!("Added reviewers: {}", added.join(" "));
            Ok(ReviewerOutcome::Partial {
                requested: reviewers.to_vec(),
                added,
            })
        }
        ReviewRequest::Rejected(message) => Ok(ReviewerOutcome::Rejected(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_only_for_incomplete_outcomes() {
        assert_eq!(ReviewerOutcome::Skipped.warning(), None);
        assert_eq!(ReviewerOutcome::Added(vec!["alice".into()]).warning(), None);

        let partial = ReviewerOutcome::Partial {
            requested: vec!["alice".into(), "ghost".into()],
            added: vec!["alice".into()],
        };
        assert_eq!(
            partial.warning().as_deref(),
            Some("Unable to set all the PR reviewers, check usernames are correct. Added: alice")
        );

        let rejected =
            ReviewerOutcome::Rejected("Reviews may only be requested from collaborators.".into());
        assert_eq!(
            rejected.warning().as_deref(),
            Some("Reviews may only be requested from collaborators.")
        );
    }

    #[test]
    fn test_partial_warning_lists_added_reviewers() {
        let partial = ReviewerOutcome::Partial {
            requested: vec!["alice".into(), "bob".into(), "ghost".into()],
            added: vec!["alice".into(), "bob".into()],
        };
        let warning = partial.warning().unwrap();
        assert!(warning.starts_with(PARTIAL_REVIEWERS_WARNING));
        assert!(warning.ends_with("Added: alice, bob"));

        let none_added = ReviewerOutcome::Partial {
            requested: vec!["ghost".into()],
            added: vec![],
        };
        assert!(none_added.warning().unwrap().ends_with("Added: none"));
    }
}
