//! Show hook installation status
//!
//! Lists each hook as installed, modified or missing and checks the current
//! branch name against the naming rules.

use anyhow::Result;
use clap::Args;

use super::{Session, installer_for};
use crate::git::branch::BranchRules;
use crate::hooks::installer::HookState;

#[derive(Args, Default)]
pub struct StatusArgs {}

/// Execute the status command
pub async fn execute(_args: StatusArgs, session: &Session) -> Result<()> {
    let output = &session.output;

    let repo = session.repo()?;
    let root = repo.workdir()?;
    let config = session.load_config(root)?;
    let installer = installer_for(&repo, &config)?;

    output.header("hookwarden status");
    output.key_value("Repository:", &root.display().to_string(), false);
    output.key_value("Hooks dir:", &installer.hooks_dir().display().to_string(), false);
    let source_found = installer.source_dir().is_dir();
    output.key_value(
        "Hook source:",
        &format!(
            "{}{}",
            installer.source_dir().display(),
            if source_found { "" } else { " (missing)" }
        ),
        source_found,
    );
    output.blank_line();

    for (hook, state) in installer.status() {
        match state {
            HookState::Installed => output.status_indicator("INSTALLED", hook.as_str(), true),
            HookState::Modified => {
                output.status_indicator("MODIFIED", &format!("{hook} (differs from source)"), false)
            }
            HookState::Missing => output.status_indicator("MISSING", hook.as_str(), false),
        }
    }
    output.blank_line();

    let rules = BranchRules::from_config(&config.branch)?;
    match repo.current_branch()? {
        None => output.warning("HEAD is detached"),
        Some(branch) if rules.is_exempt(&branch) => {
            output.status_indicator("BRANCH", &format!("{branch} (exempt)"), true)
        }
        Some(branch) if rules.is_valid(&branch) => {
            output.status_indicator("BRANCH", &branch, true)
        }
        Some(branch) => output.status_indicator(
            "BRANCH",
            &format!("{branch} (does not follow the naming convention)"),
            false,
        ),
    }

    Ok(())
}
