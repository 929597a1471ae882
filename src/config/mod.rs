//! Configuration management for hookwarden
//!
//! Every limit the hooks enforce (branch prefixes, minimum commit message
//! length, maximum staged file size, secret and debug patterns) lives here.
//! The built-in values come from `default-config.toml`; a repository can
//! override any of them, see [`core`] for the layering.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod core;

pub use self::core::DEFAULT_CONFIG;

/// Main configuration structure for hookwarden
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookwardenConfig {
    /// Hook installation settings
    pub install: InstallConfig,

    /// Branch naming rules (pre-push)
    pub branch: BranchConfig,

    /// Commit message rules (commit-msg)
    pub commit_msg: CommitMsgConfig,

    /// Staged content rules (pre-commit)
    pub pre_commit: PreCommitConfig,
}

/// Hook installation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Directory holding the hook scripts, relative to the working tree root
    pub source_dir: PathBuf,
}

/// Branch naming rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Allowed prefixes, without the trailing slash
    pub prefixes: Vec<String>,

    /// Branches that skip the naming check entirely
    #[serde(default)]
    pub exempt: Vec<String>,
}

/// Commit message rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitMsgConfig {
    /// Minimum length of the trimmed message, in characters
    pub min_length: usize,

    /// Words that make up a low-information message
    #[serde(default)]
    pub generic_words: Vec<String>,
}

/// Staged content rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreCommitConfig {
    /// Largest allowed staged file, in bytes
    pub max_file_size: u64,

    /// Glob patterns (repo-relative) excluded from content scanning
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Patterns that block the commit
    #[serde(default)]
    pub secrets: Vec<PatternConfig>,

    /// Patterns that only warn
    #[serde(default)]
    pub debug: Vec<PatternConfig>,
}

/// A named regular expression
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Pattern name
    pub name: String,

    /// Regex pattern
    pub regex: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Whether this pattern is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

/// Default enabled state for patterns
fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_match_builtin_limits() {
        let config = HookwardenConfig::defaults().expect("embedded defaults should parse");

        assert_eq!(config.install.source_dir, PathBuf::from("hooks"));
        assert_eq!(config.commit_msg.min_length, 10);
        assert_eq!(config.pre_commit.max_file_size, 10 * 1024 * 1024);
        assert_eq!(
            config.branch.prefixes,
            ["feature", "bugfix", "hotfix", "docs", "refactor", "test", "chore", "release"]
        );
        assert_eq!(config.branch.exempt, ["main", "master"]);
        assert_eq!(config.pre_commit.secrets.len(), 3);
        assert!(config.pre_commit.debug.iter().any(|p| p.name == "console.log"));
        assert!(config.pre_commit.secrets.iter().all(|p| p.enabled));
    }

    #[test]
    fn test_repo_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hookwarden.toml",
                r#"
                [commit_msg]
                min_length = 20

                [branch]
                prefixes = ["feat", "fix"]
                "#,
            )?;

            let config =
                HookwardenConfig::load(jail.directory(), None).map_err(|e| e.to_string())?;
            assert_eq!(config.commit_msg.min_length, 20);
            assert_eq!(config.branch.prefixes, ["feat", "fix"]);
            // Untouched keys keep their defaults
            assert_eq!(config.branch.exempt, ["main", "master"]);
            assert_eq!(config.pre_commit.max_file_size, 10 * 1024 * 1024);
            Ok(())
        });
    }

    #[test]
    fn test_yaml_repo_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file("hookwarden.yaml", "pre_commit:\n  max_file_size: 1024\n")?;

            let config =
                HookwardenConfig::load(jail.directory(), None).map_err(|e| e.to_string())?;
            assert_eq!(config.pre_commit.max_file_size, 1024);
            Ok(())
        });
    }

    #[test]
    fn test_env_has_highest_priority() {
        Jail::expect_with(|jail| {
            jail.create_file("hookwarden.toml", "[commit_msg]\nmin_length = 20\n")?;
            jail.set_env("HOOKWARDEN_COMMIT_MSG__MIN_LENGTH", "30");

            let config =
                HookwardenConfig::load(jail.directory(), None).map_err(|e| e.to_string())?;
            assert_eq!(config.commit_msg.min_length, 30);
            Ok(())
        });
    }

    #[test]
    fn test_custom_config_replaces_repo_files() {
        Jail::expect_with(|jail| {
            jail.create_file("hookwarden.toml", "[commit_msg]\nmin_length = 20\n")?;
            jail.create_file("custom.json", r#"{ "install": { "source_dir": ".githooks" } }"#)?;

            let custom = jail.directory().join("custom.json");
            let config = HookwardenConfig::load(jail.directory(), Some(&custom))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.install.source_dir, PathBuf::from(".githooks"));
            assert_eq!(config.commit_msg.min_length, 10);
            Ok(())
        });
    }

    #[test]
    fn test_missing_custom_config_is_an_error() {
        Jail::expect_with(|jail| {
            let missing = jail.directory().join("nope.toml");
            assert!(HookwardenConfig::load(jail.directory(), Some(&missing)).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_disabled_pattern_deserializes() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "hookwarden.toml",
                r#"
                [[pre_commit.debug]]
                name = "print"
                regex = 'print\('
                enabled = false
                "#,
            )?;

            let config =
                HookwardenConfig::load(jail.directory(), None).map_err(|e| e.to_string())?;
            assert_eq!(config.pre_commit.debug.len(), 1);
            assert!(!config.pre_commit.debug[0].enabled);
            Ok(())
        });
    }
}
