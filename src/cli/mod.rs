//! CLI commands
//!
//! Command implementations for the `gradle-update-pr` binary.

mod auth;
mod check;
mod progress;
mod publish;
mod style;

pub use auth::run_auth;
pub use check::run_check;
pub use publish::{run_publish, PublishArgs};
