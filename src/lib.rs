//! gradle-update-pr - Gradle wrapper update pull requests
//!
//! This library publishes a Gradle wrapper update to a GitHub repository:
//! it commits the changed wrapper files to a fresh branch through the git
//! data API, opens a pull request describing the version change, labels it
//! and optionally requests reviewers.
//!
//! # Architecture
//!
//! The hosting API is reached through the [`platform::HostingService`] trait
//! and local files through [`worktree::WorkingTree`]. Both are passed
//! explicitly into [`update::publish_update`], so the flow can be driven by
//! the CLI, by tests with mock services, or embedded elsewhere.
//!
//! All I/O is async and state is passed explicitly (no globals).

pub mod auth;
pub mod config;
pub mod error;
pub mod platform;
pub mod types;
pub mod update;
pub mod worktree;

pub use error::{Error, Result};
pub use types::*;
