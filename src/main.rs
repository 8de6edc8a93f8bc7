//! gradle-update-pr - Gradle wrapper update pull requests
//!
//! CLI binary that publishes wrapper updates to GitHub.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "gradle-update-pr")]
#[command(about = "Open Gradle wrapper update pull requests on GitHub")]
#[command(version)]
struct Cli {
    /// Repository as owner/repo or remote URL
    #[arg(long, global = true, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN, GH_TOKEN, then gh CLI)
    #[arg(long, global = true, env = "INPUT_REPO-TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit changed wrapper files and open an update PR
    Publish {
        /// Changed files, relative to the checkout root
        #[arg(required = true)]
        files: Vec<String>,

        /// Gradle version the wrapper is updated to
        #[arg(long)]
        target_version: String,

        /// Gradle version the wrapper is updated from
        #[arg(long)]
        source_version: Option<String>,

        /// Commit to base the update on
        #[arg(long, env = "GITHUB_SHA")]
        sha: String,

        /// Base branch for the PR (defaults to the repository default branch)
        #[arg(long, env = "INPUT_TARGET-BRANCH")]
        target_branch: Option<String>,

        /// Reviewers, separated by commas, spaces or newlines
        #[arg(long, env = "INPUT_REVIEWERS")]
        reviewers: Option<String>,

        /// Path to the checkout (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Dry run - show what would be done without making changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Check whether an update branch exists for a version
    Check {
        /// Gradle version to check
        #[arg(long)]
        target_version: String,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "gradle_update_pr=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn require_repo(repo: Option<String>) -> Result<String> {
    repo.ok_or_else(|| anyhow::anyhow!("no repository given: pass --repo or set GITHUB_REPOSITORY"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Publish {
            files,
            target_version,
            source_version,
            sha,
            target_branch,
            reviewers,
            path,
            dry_run,
        } => {
            cli::run_publish(cli::PublishArgs {
                repo: require_repo(cli.repo)?,
                token: cli.token,
                path,
                files,
                target_version,
                source_version,
                sha,
                target_branch,
                reviewers,
                dry_run,
            })
            .await?;
        }
        Commands::Check { target_version } => {
            let repo = require_repo(cli.repo)?;
            cli::run_check(&repo, cli.token.as_deref(), &target_version).await?;
        }
        Commands::Auth { action } => {
            let action_str = match action {
                AuthAction::Test => "test",
                AuthAction::Setup => "setup",
            };
            let host = std::env::var("GH_HOST").ok();
            cli::run_auth(action_str, cli.token.as_deref(), host.as_deref()).await?;
        }
    }

    Ok(())
}
