use anyhow::Result;
use clap::Args;

use super::{Session, installer_for};
use crate::cli::Output;
use crate::hooks::HookName;
use crate::hooks::installer::InstallOutcome;

#[derive(Args)]
pub struct InstallArgs {
    /// Overwrite existing hooks without asking
    #[arg(short, long)]
    pub force: bool,
}

pub async fn execute(args: InstallArgs, session: &Session) -> Result<()> {
    let output = &session.output;

    let repo = session.repo()?;
    let config = session.load_config(repo.workdir()?)?;
    let installer = installer_for(&repo, &config)?;

    output.info("Installing git hooks...");

    match installer.install(args.force, output)? {
        InstallOutcome::Declined { existing } => {
            output.warning(&format!(
                "Installation cancelled, {} existing hook(s) left unchanged",
                existing.len()
            ));
        }
        InstallOutcome::Installed { installed, missing } => {
            for hook in &missing {
                output.warning(&format!(
                    "No '{hook}' script in {}, skipped",
                    installer.source_dir().display()
                ));
            }
            for hook in &installed {
                output.success(&format!("Installed '{hook}' hook"));
            }
            output.success(&format!(
                "Installed {} hook(s) into {}",
                installed.len(),
                installer.hooks_dir().display()
            ));
            print_usage(output);
        }
    }

    Ok(())
}

fn print_usage(output: &Output) {
    output.blank_line();
    output.info("Active hooks:");
    for hook in HookName::ALL {
        output.list_item(&format!("{hook}: {}", hook.description()));
    }
    output.blank_line();
    output.info("Skip the checks once with: git commit --no-verify / git push --no-verify");
    output.info("Remove the hooks with: hookwarden uninstall");
}
