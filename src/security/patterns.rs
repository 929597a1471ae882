//! Pattern loading
//!
//! Converts the `pre_commit.secrets` and `pre_commit.debug` configuration
//! lists into compiled [`SecurityPattern`]s.

use super::{SecurityPattern, Severity};
use crate::config::{PatternConfig, PreCommitConfig};
use anyhow::Result;

/// Convert configuration patterns to compiled patterns of one severity
pub fn patterns_from_config(
    config_patterns: &[PatternConfig],
    severity: Severity,
) -> Result<Vec<SecurityPattern>> {
    let mut patterns = Vec::new();

    for config_pattern in config_patterns {
        if !config_pattern.enabled {
            tracing::debug!("Pattern '{}' disabled", config_pattern.name);
            continue;
        }

        let pattern = SecurityPattern::new(
            config_pattern.name.clone(),
            &config_pattern.regex,
            severity,
            config_pattern.description.clone(),
        )?;

        patterns.push(pattern);
    }

    Ok(patterns)
}

/// Secret patterns (critical) followed by debug patterns (info)
pub fn load_patterns(config: &PreCommitConfig) -> Result<Vec<SecurityPattern>> {
    let mut patterns = patterns_from_config(&config.secrets, Severity::Critical)?;
    patterns.extend(patterns_from_config(&config.debug, Severity::Info)?);
    Ok(patterns)
}
