//! Check command - report whether an update branch exists

use crate::cli::style::{bullet, check, short_sha, Stylize};
use anstream::println;
use gradle_update_pr::error::Result;
use gradle_update_pr::platform::{create_hosting_service, parse_repo_spec};
use gradle_update_pr::update::{branch_name, find_update_branch};

/// Run the check command
pub async fn run_check(repo: &str, token: Option<&str>, target_version: &str) -> Result<()> {
    let repo_config = parse_repo_spec(repo)?;
    let hosting = create_hosting_service(&repo_config, token).await?;

    let branch = branch_name(target_version);
    match find_update_branch(hosting.as_ref(), target_version).await? {
        Some(existing) => println!(
            "{} {} exists at {}",
            check(),
            branch.accent(),
            short_sha(&existing.sha).muted()
        ),
        None => println!("{} {} does not exist", bullet(), branch.accent()),
    }

    Ok(())
}
