use anyhow::{Context, Result};
use git2::{Status, StatusOptions};
use std::path::PathBuf;

use super::GitRepo;

impl GitRepo {
    /// Files staged for commit, relative to the working tree root, in index
    /// order. Deletions are left out since there is nothing to inspect.
    pub fn get_staged_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut status_opts = StatusOptions::new();
        status_opts.include_ignored(false);
        status_opts.include_untracked(false);

        let statuses = self
            .repo
            .statuses(Some(&mut status_opts))
            .context("Failed to get repository status")?;

        for entry in statuses.iter() {
            let status = entry.status();

            if status.intersects(
                Status::INDEX_NEW
                    | Status::INDEX_MODIFIED
                    | Status::INDEX_RENAMED
                    | Status::INDEX_TYPECHANGE,
            ) {
                if let Some(path) = entry.path() {
                    files.push(PathBuf::from(path));
                }
            }
        }

        tracing::debug!("{} staged files", files.len());
        Ok(files)
    }
}
