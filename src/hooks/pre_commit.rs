//! Pre-commit hook implementation
//!
//! This hook runs before commits are created and checks every staged file:
//! - Size limit (blocks)
//! - Secret detection (blocks)
//! - Debug statements (warns)
//!
//! Every file is checked even after a failure so the whole list of problems
//! shows up in one run.

use super::HookContext;
use super::report::{CheckKind, Finding, HookReport, Location, Severity};
use crate::cli::Output;
use crate::git::GitRepo;
use crate::security::ContentScanner;
use crate::shared::format::format_bytes;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Execute pre-commit hook
pub async fn execute(context: &HookContext, repo: &GitRepo, output: &Output) -> Result<()> {
    let staged_files = repo.get_staged_files()?;

    if staged_files.is_empty() {
        output.info("No staged files to check");
        return Ok(());
    }

    output.verbose(&format!("Checking {} staged files", staged_files.len()));

    let scanner = ContentScanner::from_config(&context.config.pre_commit)?;
    let report = scan_staged(
        &context.root,
        &staged_files,
        &scanner,
        context.config.pre_commit.max_file_size,
    )?;

    output.report(&report);

    if report.is_blocked() {
        output.info("Remove secrets and keep large files out of the repository (Git LFS)");
        output.info("Bypass in an emergency with: git commit --no-verify");
        anyhow::bail!(
            "Commit blocked: {} problem(s) found in staged files",
            report.errors().count()
        );
    }

    let warnings = report.warnings().count();
    if warnings > 0 {
        output.warning(&format!("{warnings} warning(s), review before pushing"));
    }
    output.success(&format!("Checked {} staged files", staged_files.len()));
    Ok(())
}

/// Check each staged file (paths relative to `root`) and collect findings
pub fn scan_staged(
    root: &Path,
    files: &[PathBuf],
    scanner: &ContentScanner,
    max_file_size: u64,
) -> Result<HookReport> {
    let mut report = HookReport::new();

    for relative in files {
        scan_staged_file(root, relative, scanner, max_file_size, &mut report)?;
    }

    Ok(report)
}

fn scan_staged_file(
    root: &Path,
    relative: &Path,
    scanner: &ContentScanner,
    max_file_size: u64,
    report: &mut HookReport,
) -> Result<()> {
    let path = root.join(relative);

    let metadata = match fs::symlink_metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Skipping missing file: {}", relative.display());
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to stat {}", path.display()));
        }
    };

    // Symlinks, submodules and other non-regular entries
    if !metadata.is_file() {
        tracing::debug!("Skipping non-regular file: {}", relative.display());
        return Ok(());
    }

    let size = metadata.len();
    if size > max_file_size {
        report.push(Finding {
            severity: Severity::Error,
            check: CheckKind::FileSize,
            message: format!(
                "File is {} ({size} bytes), limit is {}",
                format_bytes(size),
                format_bytes(max_file_size)
            ),
            location: Some(Location {
                path: relative.to_path_buf(),
                line: None,
            }),
        });
        return Ok(());
    }

    if !scanner.should_scan(relative) {
        return Ok(());
    }

    let bytes = fs::read(&path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    if content_inspector::inspect(&bytes).is_binary() {
        tracing::debug!("Skipping binary file: {}", relative.display());
        return Ok(());
    }

    let content = String::from_utf8_lossy(&bytes);
    for security_match in scanner.scan_text(relative, &content) {
        report.push(security_match.into());
    }

    Ok(())
}
