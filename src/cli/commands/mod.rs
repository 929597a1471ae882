//! Command implementations for the hookwarden CLI
//!
//! Each command lives in its own module with an `Args` struct and an
//! `execute` function. The git hook entry points share [`hook`].

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::HookwardenConfig;
use crate::git::GitRepo;
use crate::hooks::HookContext;
use crate::hooks::installer::HookInstaller;

pub mod config;
pub mod hook;
pub mod init;
pub mod install;
pub mod status;
pub mod uninstall;

/// Global options every command runs with
pub struct Session {
    pub output: Output,
    /// Explicit `--config` file
    pub config_path: Option<PathBuf>,
}

impl Session {
    pub fn new(output: Output, config_path: Option<PathBuf>) -> Self {
        Self {
            output,
            config_path,
        }
    }

    /// The repository containing the current directory
    pub fn repo(&self) -> Result<GitRepo> {
        GitRepo::discover(".")
    }

    /// Load configuration for the working tree at `root`
    pub fn load_config(&self, root: &Path) -> Result<HookwardenConfig> {
        HookwardenConfig::load(root, self.config_path.as_deref())
    }

    /// Working tree root when inside a repository, else the current directory
    pub fn root(&self) -> Result<PathBuf> {
        match GitRepo::discover(".") {
            Ok(repo) => Ok(repo.workdir()?.to_path_buf()),
            Err(e) => {
                tracing::debug!("{e:#}, using current directory");
                Ok(std::env::current_dir()?)
            }
        }
    }

    pub fn hook_context(&self, root: PathBuf) -> Result<HookContext> {
        let config = self.load_config(&root)?;
        Ok(HookContext { config, root })
    }
}

/// Installer wired to the repository's hooks dir and the configured source dir
pub fn installer_for(repo: &GitRepo, config: &HookwardenConfig) -> Result<HookInstaller> {
    let source_dir = repo.workdir()?.join(&config.install.source_dir);
    Ok(HookInstaller::new(source_dir, repo.hooks_dir()))
}
