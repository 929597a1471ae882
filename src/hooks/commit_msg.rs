//! Commit message hook implementation
//!
//! git passes the path of the file holding the proposed message
//! (usually `.git/COMMIT_EDITMSG`).

use super::HookContext;
use crate::cli::Output;
use crate::git::commit::MessageRules;
use anyhow::{Context, Result};
use std::path::Path;

/// Execute commit-msg hook
pub async fn execute(context: &HookContext, message_file: &Path, output: &Output) -> Result<()> {
    let rules = MessageRules::from_config(&context.config.commit_msg)?;

    let raw = tokio::fs::read_to_string(message_file)
        .await
        .with_context(|| {
            format!("Failed to read commit message file: {}", message_file.display())
        })?;

    let report = rules.check(&raw);
    output.report(&report);

    if report.is_blocked() {
        output.info("Write a message that says what changed and why, e.g. 'Fix login timeout on slow networks'");
        anyhow::bail!("Commit blocked: commit message is too short");
    }

    output.success("Commit message accepted");
    Ok(())
}
