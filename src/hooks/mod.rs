//! Git hook implementations
//!
//! hookwarden owns three hooks:
//!
//! - `pre-commit` - size, secret and debug-statement checks on staged files
//! - `commit-msg` - minimum length and generic message checks
//! - `pre-push` - branch naming convention
//!
//! Each hook builds a [`report::HookReport`] from pure checks, prints it and
//! fails when the report holds an error. [`installer`] copies the hook
//! scripts that invoke them into `.git/hooks`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::HookwardenConfig;

pub mod commit_msg;
pub mod installer;
pub mod pre_commit;
pub mod pre_push;
pub mod report;

/// The hooks hookwarden installs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    PreCommit,
    PrePush,
    CommitMsg,
}

impl HookName {
    pub const ALL: [HookName; 3] = [HookName::PreCommit, HookName::PrePush, HookName::CommitMsg];

    /// File name git looks for in the hooks directory
    pub fn as_str(self) -> &'static str {
        match self {
            HookName::PreCommit => "pre-commit",
            HookName::PrePush => "pre-push",
            HookName::CommitMsg => "commit-msg",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HookName::PreCommit => "blocks large files and secrets, warns on debug statements",
            HookName::PrePush => "enforces the branch naming convention",
            HookName::CommitMsg => "enforces a minimum message length, warns on generic messages",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("Unknown hook: {s}"))
    }
}

/// Everything a hook needs besides its own input
pub struct HookContext {
    pub config: HookwardenConfig,
    /// Working tree root
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_round_trip() {
        for hook in HookName::ALL {
            assert_eq!(hook.as_str().parse::<HookName>().unwrap(), hook);
        }
        assert!("post-checkout".parse::<HookName>().is_err());
    }
}
