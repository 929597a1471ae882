//! # hookwarden - git hooks for branch naming, commit messages and staged content
//!
//! hookwarden installs three git hooks into a repository and implements them:
//!
//! - **pre-commit**: blocks staged files over the size limit (10 MiB) and
//!   files containing secrets, warns on leftover debug statements
//! - **commit-msg**: blocks messages shorter than 10 characters, warns on
//!   generic messages such as "wip" or "minor changes"
//! - **pre-push**: blocks pushes from branches not named
//!   `feature/`, `bugfix/`, `hotfix/`, `docs/`, `refactor/`, `test/`,
//!   `chore/` or `release/` (`main` and `master` are exempt)
//!
//! ## Quick Start
//!
//! ```bash
//! # Write the hook scripts into hooks/ and commit them
//! hookwarden init
//!
//! # Copy them into .git/hooks
//! hookwarden install
//!
//! # Remove them again
//! hookwarden uninstall
//! ```
//!
//! ## Configuration
//!
//! Every limit can be overridden from `hookwarden.toml` (or `.json`,
//! `.yaml`) at the repository root, or from `HOOKWARDEN_*` environment
//! variables:
//!
//! ```toml
//! [commit_msg]
//! min_length = 15
//!
//! [pre_commit]
//! exclude = ["fixtures/**"]
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use hookwarden::config::HookwardenConfig;
//! use hookwarden::git::branch::BranchRules;
//!
//! let config = HookwardenConfig::defaults()?;
//! let rules = BranchRules::from_config(&config.branch)?;
//! assert!(rules.is_valid("feature/add-login"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod hooks;
pub mod security;
pub mod shared;

pub use cli::{Cli, Output};
pub use config::HookwardenConfig;

/// Result type alias for hookwarden operations
pub type Result<T> = anyhow::Result<T>;
