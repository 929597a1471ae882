//! Branch naming rules
//!
//! A pushable branch is `<prefix>/<description>` where prefix is one of the
//! configured prefixes. Exempt branches (main, master) are always allowed.

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::BranchConfig;
use crate::hooks::report::{CheckKind, HookReport};

/// Compiled branch naming rules
#[derive(Debug, Clone)]
pub struct BranchRules {
    prefixes: Vec<String>,
    exempt: Vec<String>,
    pattern: Regex,
}

impl BranchRules {
    pub fn from_config(config: &BranchConfig) -> Result<Self> {
        Self::new(&config.prefixes, &config.exempt)
    }

    pub fn new(prefixes: &[String], exempt: &[String]) -> Result<Self> {
        if prefixes.is_empty() {
            anyhow::bail!("At least one branch prefix must be configured");
        }

        let alternatives = prefixes
            .iter()
            .map(|p| regex::escape(p.trim_end_matches('/')))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!("^(?:{alternatives})/.+"))
            .context("Failed to compile branch name pattern")?;

        Ok(Self {
            prefixes: prefixes.to_vec(),
            exempt: exempt.to_vec(),
            pattern,
        })
    }

    /// True when `name` matches one of the prefixes followed by a description
    pub fn is_valid(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt.iter().any(|e| e == name)
    }

    /// Check `branch` and collect the result. `None` means a detached HEAD.
    pub fn check(&self, branch: Option<&str>) -> HookReport {
        let mut report = HookReport::new();

        match branch {
            None => report.warning(
                CheckKind::BranchName,
                "HEAD is detached, skipping branch name check",
            ),
            Some(name) if self.is_exempt(name) => {
                tracing::debug!("Branch '{name}' is exempt from naming rules");
            }
            Some(name) if self.is_valid(name) => {
                tracing::debug!("Branch '{name}' follows naming rules");
            }
            Some(name) => report.error(
                CheckKind::BranchName,
                format!("Branch name '{name}' does not follow the naming convention"),
            ),
        }

        report
    }

    /// Naming convention help shown when a push is rejected
    pub fn guide(&self) -> Vec<String> {
        let mut lines = vec!["Branch names must start with one of:".to_string()];
        for prefix in &self.prefixes {
            let prefix = prefix.trim_end_matches('/');
            lines.push(format!(
                "  {:<10} e.g. {prefix}/{}",
                format!("{prefix}/"),
                example_suffix(prefix)
            ));
        }
        lines.push("Rename with: git branch -m <new-name>".to_string());
        lines
    }
}

fn example_suffix(prefix: &str) -> &'static str {
    match prefix {
        "feature" => "user-authentication",
        "bugfix" => "login-timeout",
        "hotfix" => "security-patch",
        "docs" => "api-reference",
        "refactor" => "database-layer",
        "test" => "payment-flow",
        "chore" => "update-dependencies",
        "release" => "v1.2.0",
        _ => "short-description",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HookwardenConfig;
    use crate::hooks::report::Severity;

    fn rules() -> BranchRules {
        let config = HookwardenConfig::defaults().unwrap();
        BranchRules::from_config(&config.branch).unwrap()
    }

    #[test]
    fn test_valid_branch_names() {
        let rules = rules();
        for name in [
            "feature/add-login",
            "bugfix/x",
            "hotfix/urgent-fix",
            "docs/readme",
            "refactor/db/layer",
            "test/e2e",
            "chore/deps",
            "release/1.0.0",
        ] {
            assert!(rules.is_valid(name), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_branch_names() {
        let rules = rules();
        for name in [
            "feature/",
            "feature",
            "my-branch",
            "Feature/add-login",
            "features/add-login",
            "xfeature/add-login",
            "develop",
            "fix/login",
        ] {
            assert!(!rules.is_valid(name), "{name} should be invalid");
        }
    }

    #[test]
    fn test_main_and_master_are_exempt() {
        let rules = rules();
        assert!(!rules.check(Some("main")).is_blocked());
        assert!(!rules.check(Some("master")).is_blocked());
        assert!(rules.check(Some("main")).is_clean());
    }

    #[test]
    fn test_check_rejects_invalid_branch() {
        let report = rules().check(Some("my-branch"));
        assert!(report.is_blocked());
        assert_eq!(report.findings()[0].check, CheckKind::BranchName);
        assert!(report.findings()[0].message.contains("my-branch"));
    }

    #[test]
    fn test_detached_head_only_warns() {
        let report = rules().check(None);
        assert!(!report.is_blocked());
        assert_eq!(report.findings()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_custom_prefixes_are_escaped() {
        let rules = BranchRules::new(&["team.a/".to_string()], &[]).unwrap();
        assert!(rules.is_valid("team.a/thing"));
        assert!(!rules.is_valid("teamXa/thing"));
        assert!(!rules.is_exempt("main"));
    }

    #[test]
    fn test_empty_prefixes_rejected() {
        assert!(BranchRules::new(&[], &[]).is_err());
    }

    #[test]
    fn test_guide_lists_every_prefix() {
        let guide = rules().guide();
        assert!(guide.iter().any(|l| l.contains("feature/user-authentication")));
        assert!(guide.iter().any(|l| l.contains("release/v1.2.0")));
        assert_eq!(guide.len(), 10);
    }
}
