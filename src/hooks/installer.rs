//! Hook installation and removal
//!
//! The project keeps its hook scripts in a source directory (`hooks/` by
//! default). Installing copies `pre-commit`, `pre-push` and `commit-msg` from
//! there into the git hooks directory and marks them executable. Existing
//! hooks are only overwritten after confirmation.

use super::HookName;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Yes/no question asked before overwriting hooks
pub trait Confirm {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// What an install run did
#[derive(Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Hooks were copied; `missing` had no script in the source directory
    Installed {
        installed: Vec<HookName>,
        missing: Vec<HookName>,
    },
    /// The operator declined to overwrite `existing`; nothing was touched
    Declined { existing: Vec<HookName> },
}

/// Installed state of one hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// Present and identical to the source script
    Installed,
    /// Present but different from the source script (or no source script)
    Modified,
    /// Not present in the hooks directory
    Missing,
}

pub struct HookInstaller {
    source_dir: PathBuf,
    hooks_dir: PathBuf,
}

impl HookInstaller {
    pub fn new(source_dir: impl Into<PathBuf>, hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            hooks_dir: hooks_dir.into(),
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    fn target(&self, hook: HookName) -> PathBuf {
        self.hooks_dir.join(hook.as_str())
    }

    fn source(&self, hook: HookName) -> PathBuf {
        self.source_dir.join(hook.as_str())
    }

    /// Hooks already present in the hooks directory
    pub fn existing_hooks(&self) -> Vec<HookName> {
        HookName::ALL
            .into_iter()
            .filter(|hook| self.target(*hook).exists())
            .collect()
    }

    /// Copy the hook scripts into the hooks directory.
    ///
    /// When any target exists and `force` is off, `confirm` is asked once;
    /// declining leaves every file untouched.
    pub fn install(&self, force: bool, confirm: &dyn Confirm) -> Result<InstallOutcome> {
        if !self.source_dir.is_dir() {
            anyhow::bail!(
                "Hook source directory not found: {}",
                self.source_dir.display()
            );
        }

        let existing = self.existing_hooks();
        if !existing.is_empty() && !force {
            let names = existing
                .iter()
                .map(|h| h.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let question = format!("Existing hooks found ({names}). Overwrite?");
            if !confirm.confirm(&question)? {
                tracing::debug!("Overwrite declined, leaving hooks untouched");
                return Ok(InstallOutcome::Declined { existing });
            }
        }

        fs::create_dir_all(&self.hooks_dir).with_context(|| {
            format!(
                "Failed to create hooks directory: {}",
                self.hooks_dir.display()
            )
        })?;

        let mut installed = Vec::new();
        let mut missing = Vec::new();
        for hook in HookName::ALL {
            let source = self.source(hook);
            if !source.is_file() {
                tracing::debug!("No script for {hook} at {}", source.display());
                missing.push(hook);
                continue;
            }

            let target = self.target(hook);
            fs::copy(&source, &target).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), target.display())
            })?;
            make_executable(&target)?;
            tracing::debug!("Installed {hook} -> {}", target.display());
            installed.push(hook);
        }

        Ok(InstallOutcome::Installed { installed, missing })
    }

    /// Remove the hooks; returns the ones that were present
    pub fn uninstall(&self) -> Result<Vec<HookName>> {
        let mut removed = Vec::new();

        for hook in HookName::ALL {
            let target = self.target(hook);
            if !target.exists() {
                continue;
            }
            fs::remove_file(&target)
                .with_context(|| format!("Failed to remove hook file: {}", target.display()))?;
            removed.push(hook);
        }

        Ok(removed)
    }

    /// Compare each installed hook with its source script
    pub fn status(&self) -> Vec<(HookName, HookState)> {
        HookName::ALL
            .into_iter()
            .map(|hook| {
                let target = self.target(hook);
                let state = match fs::read(&target) {
                    Err(_) => HookState::Missing,
                    Ok(installed) => match fs::read(self.source(hook)) {
                        Ok(source) if source == installed => HookState::Installed,
                        _ => HookState::Modified,
                    },
                };
                (hook, state)
            })
            .collect()
    }
}

/// Shell script that hands a hook over to the hookwarden binary
pub fn shim_script(hook: HookName) -> String {
    format!(
        "#!/bin/sh\n# {hook} hook installed by hookwarden: {}\nexec hookwarden {hook} \"$@\"\n",
        hook.description()
    )
}

/// Write the default shim scripts into `source_dir`, keeping existing files.
/// Returns the hooks that were written.
pub fn write_shims(source_dir: &Path) -> Result<Vec<HookName>> {
    fs::create_dir_all(source_dir)
        .with_context(|| format!("Failed to create {}", source_dir.display()))?;

    let mut written = Vec::new();
    for hook in HookName::ALL {
        let path = source_dir.join(hook.as_str());
        if path.exists() {
            tracing::debug!("Keeping existing {}", path.display());
            continue;
        }
        fs::write(&path, shim_script(hook))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        make_executable(&path)?;
        written.push(hook);
    }

    Ok(written)
}

fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)
            .context("Failed to get hook file metadata")?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms).context("Failed to set hook file permissions")?;
    }
    #[cfg(not(unix))]
    let _ = path;

    Ok(())
}
