//! Line-by-line content scanner
//!
//! Runs every enabled secret and debug pattern against each line of a staged
//! file. File-level checks (size, binary detection) happen in the pre-commit
//! hook before content gets here.

use super::patterns::load_patterns;
use super::{SecurityMatch, SecurityPattern, Severity};
use crate::config::PreCommitConfig;
use crate::hooks::report::{CheckKind, Finding, Location};
use crate::shared::glob::build_globset;
use anyhow::Result;
use globset::GlobSet;
use std::path::{Path, PathBuf};

/// Scanner for secrets and debug statements in staged content
pub struct ContentScanner {
    patterns: Vec<SecurityPattern>,
    exclude_globset: GlobSet,
}

impl ContentScanner {
    /// Create a scanner from the pre-commit configuration
    pub fn from_config(config: &PreCommitConfig) -> Result<Self> {
        let patterns = load_patterns(config)?;
        let exclude_globset = build_globset(&config.exclude)?;
        tracing::debug!(
            "Loaded {} patterns, {} exclude globs",
            patterns.len(),
            config.exclude.len()
        );

        Ok(Self {
            patterns,
            exclude_globset,
        })
    }

    /// Add a custom pattern
    pub fn add_pattern(&mut self, pattern: SecurityPattern) {
        self.patterns.push(pattern);
    }

    /// Check a repository-relative path against the exclude globs
    pub fn should_scan(&self, relative: &Path) -> bool {
        if self.exclude_globset.is_match(relative) {
            tracing::debug!("Skipping excluded file: {}", relative.display());
            return false;
        }
        true
    }

    /// Scan text content, `path` is only used for reporting
    pub fn scan_text(&self, path: &Path, content: &str) -> Vec<SecurityMatch> {
        let mut matches = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            for pattern in &self.patterns {
                for mat in pattern.regex.find_iter(line) {
                    matches.push(SecurityMatch {
                        file_path: path.display().to_string(),
                        line_number: line_num + 1,
                        column: mat.start() + 1,
                        content: mat.as_str().to_string(),
                        pattern_name: pattern.name.clone(),
                        severity: pattern.severity,
                    });
                }
            }
        }

        matches
    }
}

impl From<SecurityMatch> for Finding {
    fn from(m: SecurityMatch) -> Self {
        let (severity, check, shown) = match m.severity {
            Severity::Critical => (
                crate::hooks::report::Severity::Error,
                CheckKind::Secret,
                redact(&m.content),
            ),
            Severity::Info => (
                crate::hooks::report::Severity::Warning,
                CheckKind::DebugStatement,
                m.content.trim().to_string(),
            ),
        };

        Finding {
            severity,
            check,
            message: format!("{}: {shown}", m.pattern_name),
            location: Some(Location {
                path: PathBuf::from(m.file_path),
                line: Some(m.line_number),
            }),
        }
    }
}

/// Keep the first four characters of a secret, mask the rest
pub fn redact(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    if secret.chars().count() <= 4 {
        return "****".to_string();
    }
    format!("{visible}****")
}
