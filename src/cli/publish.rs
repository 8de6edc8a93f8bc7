//! Publish command - commit wrapper files and open the update PR

use crate::cli::progress::CliProgress;
use crate::cli::style::{arrow, bullet, check, hyperlink_url, Stream, Stylize};
use anstream::println;
use gradle_update_pr::config::{UpdateOptions, UpdateRequest};
use gradle_update_pr::error::Result;
use gradle_update_pr::platform::{create_hosting_service, parse_repo_spec};
use gradle_update_pr::update::{publish_update, PublishOutcome, PublishPlan};
use gradle_update_pr::worktree::GitWorkingTree;
use std::path::PathBuf;

/// Inputs of the publish command
#[derive(Debug)]
pub struct PublishArgs {
    /// Repository spec (`owner/repo` or remote URL)
    pub repo: String,
    /// Explicit token, if any
    pub token: Option<String>,
    /// Checkout root the file paths are relative to
    pub path: PathBuf,
    /// Changed files
    pub files: Vec<String>,
    /// Version updated to
    pub target_version: String,
    /// Version updated from
    pub source_version: Option<String>,
    /// Commit the update is based on
    pub sha: String,
    /// PR base branch override
    pub target_branch: Option<String>,
    /// Free-form reviewer list
    pub reviewers: Option<String>,
    /// Only report what would happen
    pub dry_run: bool,
}

/// Run the publish command
pub async fn run_publish(args: PublishArgs) -> Result<()> {
    let request = UpdateRequest::new(
        args.files,
        &args.target_version,
        args.source_version.as_deref(),
        &args.sha,
    )?;
    let options =
        UpdateOptions::from_inputs(args.target_branch.as_deref(), args.reviewers.as_deref());

    let repo_config = parse_repo_spec(&args.repo)?;
    let hosting = create_hosting_service(&repo_config, args.token.as_deref()).await?;
    let worktree = GitWorkingTree::new(args.path);

    println!(
        "Publishing Gradle Wrapper {} to {}",
        request.target_version.accent(),
        repo_config.to_string().emphasis()
    );

    let progress = CliProgress::new();
    let outcome = publish_update(
        &request,
        &options,
        hosting.as_ref(),
        &worktree,
        &progress,
        args.dry_run,
    )
    .await;
    progress.finish();

    match outcome? {
        PublishOutcome::AlreadyExists(existing) => {
            println!(
                "{} Update branch {} already exists, nothing to do",
                bullet(),
                existing.name.accent()
            );
        }
        PublishOutcome::DryRun(plan) => report_plan(&plan),
        PublishOutcome::Published(result) => {
            println!();
            println!(
                "{} {}",
                check(),
                hyperlink_url(Stream::Stdout, &result.pull_request.html_url)
            );
            if !result.warnings.is_empty() {
                println!(
                    "{}",
                    format!("Completed with {} warning(s)", result.warnings.len()).warn()
                );
            }
        }
    }

    Ok(())
}

fn report_plan(plan: &PublishPlan) {
    println!("Would create branch {}", plan.branch.accent());
    println!("Would commit:");
    for file in &plan.files {
        println!("  {} {file}", bullet());
    }
    println!(
        "Would open PR {} {} {}",
        plan.branch.accent(),
        arrow(),
        plan.base_branch.accent()
    );
    println!("  {}", plan.title.muted());
    println!("Would label with {}", plan.label.accent());
    if !plan.reviewers.is_empty() {
        println!("Would request reviews from {}", plan.reviewers.join(", ").accent());
    }
}
