//! Auth command - test and explain authentication

use anstream::println;
use gradle_update_pr::auth::{get_github_auth, test_github_auth};
use gradle_update_pr::error::Result;

/// Run the auth test command
pub async fn run_auth_test(token: Option<&str>, host: Option<&str>) -> Result<()> {
    println!("Testing GitHub authentication...");
    let config = get_github_auth(token).await?;
    let username = test_github_auth(&config, host).await?;
    println!("Authenticated as: {username}");
    println!("Token source: {:?}", config.source);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("GitHub Authentication Setup");
    println!("===========================");
    println!();
    println!("Option 1: Explicit token");
    println!("  Pass --token or set the action input repo-token");
    println!();
    println!("Option 2: Environment variable");
    println!("  Set GITHUB_TOKEN or GH_TOKEN");
    println!();
    println!("Option 3: GitHub CLI");
    println!("  Install: https://cli.github.com/");
    println!("  Run: gh auth login");
    println!();
    println!("The token needs contents, pull-requests and issues write access.");
    println!();
    println!("For GitHub Enterprise:");
    println!("  Set GH_HOST to your instance hostname");
}

/// Wrapper for auth commands
pub async fn run_auth(action: &str, token: Option<&str>, host: Option<&str>) -> Result<()> {
    match action {
        "test" => run_auth_test(token, host).await,
        "setup" => {
            run_auth_setup();
            Ok(())
        }
        _ => {
            println!("Unknown action: {action}. Use 'test' or 'setup'.");
            Ok(())
        }
    }
}
