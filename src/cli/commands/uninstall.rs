use anyhow::Result;
use clap::Args;

use super::{Session, installer_for};

#[derive(Args)]
pub struct UninstallArgs {}

pub async fn execute(_args: UninstallArgs, session: &Session) -> Result<()> {
    let output = &session.output;

    let repo = session.repo()?;
    let config = session.load_config(repo.workdir()?)?;
    let installer = installer_for(&repo, &config)?;

    let removed = installer.uninstall()?;
    if removed.is_empty() {
        output.info("No hooks installed, removed 0 hooks");
        return Ok(());
    }

    for hook in &removed {
        output.success(&format!("Removed '{hook}' hook"));
    }
    output.success(&format!("Removed {} hook(s)", removed.len()));
    Ok(())
}
