//! CLI progress callback with styled output and a spinner

use crate::cli::style::{check, hyperlink_url, short_sha, spinner_style, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use gradle_update_pr::types::{CommitInfo, GitRef, PullRequest};
use gradle_update_pr::update::{Phase, ProgressCallback};
use indicatif::ProgressBar;
use std::time::Duration;

/// CLI progress callback
///
/// Shows the current phase on a spinner and prints created objects above it.
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create progress output with a ticking spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner }
    }

    /// Stop the spinner, e.g. after a fatal error
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        if phase == Phase::Complete {
            self.spinner.finish_and_clear();
        } else {
            self.spinner.set_message(format!("{phase}..."));
        }
    }

    async fn on_commit_created(&self, commit: &CommitInfo) {
        self.spinner.suspend(|| {
            println!(
                "  {} Created commit {}",
                check(),
                short_sha(&commit.sha).muted()
            );
        });
    }

    async fn on_branch_created(&self, branch: &GitRef) {
        let name = branch.name.trim_start_matches("refs/heads/");
        self.spinner.suspend(|| {
            println!("  {} Created branch {}", check(), name.accent());
        });
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let pr_num = format!("#{}", pr.number);
        self.spinner.suspend(|| {
            println!(
                "  {} Opened PR {} into {}",
                check(),
                pr_num.accent(),
                pr.base_ref.emphasis()
            );
            println!("    {}", hyperlink_url(Stream::Stdout, &pr.html_url));
        });
    }

    async fn on_warning(&self, message: &str) {
        self.spinner.suspend(|| {
            eprintln!("{}: {}", "warning".warn(), message);
        });
    }

    async fn on_message(&self, message: &str) {
        self.spinner.suspend(|| {
            println!("{message}");
        });
    }
}
