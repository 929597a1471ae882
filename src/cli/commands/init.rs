//! Write the default hook scripts into the hook source directory
//!
//! The scripts are meant to be committed so every clone can run
//! `hookwarden install`.

use anyhow::Result;
use clap::Args;

use super::Session;
use crate::hooks::installer::write_shims;

#[derive(Args)]
pub struct InitArgs {}

pub async fn execute(_args: InitArgs, session: &Session) -> Result<()> {
    let output = &session.output;

    let repo = session.repo()?;
    let root = repo.workdir()?;
    let config = session.load_config(root)?;
    let source_dir = root.join(&config.install.source_dir);

    let written = write_shims(&source_dir)?;
    if written.is_empty() {
        output.info(&format!(
            "All hook scripts already exist in {}",
            source_dir.display()
        ));
    }
    for hook in &written {
        output.success(&format!("Wrote {}", source_dir.join(hook.as_str()).display()));
    }

    output.info(&format!(
        "Commit {} and run 'hookwarden install'",
        config.install.source_dir.display()
    ));
    Ok(())
}
