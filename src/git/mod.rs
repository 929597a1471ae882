//! Git integration layer for hookwarden
//!
//! Repository discovery, the current branch, the staged file list and the
//! location of the hooks directory, all through git2. The branch-name and
//! commit-message rules live in [`branch`] and [`commit`].

use anyhow::{Context, Result};
use git2::{ErrorCode, Repository};
use std::path::{Path, PathBuf};

pub mod branch;
pub mod commit;
pub mod operations;

pub struct GitRepo {
    pub repo: Repository,
}

impl GitRepo {
    /// Discover and open the repository containing `path`
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref())
            .context("Not a git repository (or any of the parent directories)")?;
        Ok(GitRepo { repo })
    }

    /// Open the repository rooted exactly at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::open(path.as_ref()).context("Failed to open Git repository")?;
        Ok(GitRepo { repo })
    }

    /// Name of the checked out branch, `None` when HEAD is detached.
    ///
    /// A branch without commits yet still reports its name.
    pub fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) => {
                if !head.is_branch() {
                    return Ok(None);
                }
                Ok(head.shorthand().map(str::to_string))
            }
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                let head = self
                    .repo
                    .find_reference("HEAD")
                    .context("Failed to read HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string))
            }
            Err(e) => Err(e).context("Failed to get HEAD reference"),
        }
    }

    /// The `.git` directory (or the worktree's private git dir)
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Working tree root; bare repositories have none
    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .context("Repository has no working directory (bare repository)")
    }

    /// Directory git runs hooks from. Linked worktrees share the main
    /// repository's hooks.
    pub fn hooks_dir(&self) -> PathBuf {
        self.repo.commondir().join("hooks")
    }
}
