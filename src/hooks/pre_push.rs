//! Pre-push hook implementation
//!
//! Rejects pushes from branches that do not follow the naming convention.

use super::HookContext;
use crate::cli::Output;
use crate::git::GitRepo;
use crate::git::branch::BranchRules;
use anyhow::Result;

/// Execute pre-push hook
pub async fn execute(context: &HookContext, repo: &GitRepo, output: &Output) -> Result<()> {
    let rules = BranchRules::from_config(&context.config.branch)?;
    let branch = repo.current_branch()?;
    tracing::debug!("pre-push on branch {branch:?}");

    let report = rules.check(branch.as_deref());
    output.report(&report);

    if report.is_blocked() {
        output.blank_line();
        for line in rules.guide() {
            output.indent(&line);
        }
        output.blank_line();
        output.info("Bypass in an emergency with: git push --no-verify");
        anyhow::bail!("Push blocked: branch name does not follow the naming convention");
    }

    if let Some(name) = branch {
        output.success(&format!("Branch name '{name}' is valid"));
    }
    Ok(())
}
