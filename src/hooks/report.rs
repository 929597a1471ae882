//! Structured hook results
//!
//! Every check appends [`Finding`]s to a [`HookReport`]. Errors block the git
//! operation, warnings are advisory.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks the git operation
    Error,
    /// Printed, never blocks
    Warning,
}

/// Which check produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    BranchName,
    MessageLength,
    GenericMessage,
    FileSize,
    Secret,
    DebugStatement,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckKind::BranchName => "branch",
            CheckKind::MessageLength => "length",
            CheckKind::GenericMessage => "generic",
            CheckKind::FileSize => "size",
            CheckKind::Secret => "secret",
            CheckKind::DebugStatement => "debug",
        };
        f.write_str(label)
    }
}

/// Where in the staged content a finding points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: PathBuf,
    /// 1-based, absent for whole-file findings
    pub line: Option<usize>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{line}", self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Finding {
    pub severity: Severity,
    pub check: CheckKind,
    pub message: String,
    pub location: Option<Location>,
}

/// Ordered findings of one hook run
#[derive(Debug, Clone, Default)]
pub struct HookReport {
    findings: Vec<Finding>,
}

impl HookReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn error(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(Finding {
            severity: Severity::Error,
            check,
            message: message.into(),
            location: None,
        });
    }

    pub fn warning(&mut self, check: CheckKind, message: impl Into<String>) {
        self.push(Finding {
            severity: Severity::Warning,
            check,
            message: message.into(),
            location: None,
        });
    }

    pub fn extend(&mut self, other: HookReport) {
        self.findings.extend(other.findings);
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    /// Any error finding present
    pub fn is_blocked(&self) -> bool {
        self.errors().next().is_some()
    }

    /// No findings at all
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
