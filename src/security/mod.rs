//! Staged content detection for hookwarden
//!
//! Secret patterns and debug-statement patterns share one representation;
//! the severity decides whether a match blocks the commit.

use anyhow::{Context, Result};
use regex::Regex;

pub mod patterns;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::ContentScanner;

/// A pattern hit in scanned content
#[derive(Debug, Clone)]
pub struct SecurityMatch {
    /// File path where the pattern matched
    pub file_path: String,

    /// Line number (1-based)
    pub line_number: usize,

    /// Column number (1-based)
    pub column: usize,

    /// The matched content
    pub content: String,

    /// Pattern name that matched
    pub pattern_name: String,

    /// Severity level
    pub severity: Severity,
}

/// Severity levels for pattern matches
///
/// Secrets are critical and block the commit. Debug statements are
/// informational: worth a look, never a reason to refuse a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks the commit
    Critical,
    /// Reported as a warning
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "CRITICAL"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// Compiled pattern definition
#[derive(Debug, Clone)]
pub struct SecurityPattern {
    /// Pattern name
    pub name: String,

    /// Regular expression
    pub regex: Regex,

    /// Severity level
    pub severity: Severity,

    /// Description
    pub description: String,
}

impl SecurityPattern {
    /// Create a new pattern
    pub fn new(
        name: String,
        pattern: &str,
        severity: Severity,
        description: String,
    ) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid regex pattern for {name}: {pattern}"))?;

        Ok(Self {
            name,
            regex,
            severity,
            description,
        })
    }
}
