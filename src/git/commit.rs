//! Commit message rules
//!
//! The message is cleaned up the way git does by default (comment lines
//! dropped, everything below the scissors line cut) before checking:
//!
//! 1. shorter than the minimum length, counted in characters: blocks
//! 2. made up only of generic words ("wip", "fix", "minor changes"): warns

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::CommitMsgConfig;
use crate::hooks::report::{CheckKind, HookReport};

const SCISSORS: &str = "# ------------------------ >8 ------------------------";

/// Compiled commit message rules
#[derive(Debug, Clone)]
pub struct MessageRules {
    min_length: usize,
    generic: Option<Regex>,
}

impl MessageRules {
    pub fn from_config(config: &CommitMsgConfig) -> Result<Self> {
        Self::new(config.min_length, &config.generic_words)
    }

    pub fn new(min_length: usize, generic_words: &[String]) -> Result<Self> {
        let generic = if generic_words.is_empty() {
            None
        } else {
            let words = generic_words
                .iter()
                .map(|w| regex::escape(w.trim()))
                .collect::<Vec<_>>()
                .join("|");
            // Whole message: one or more generic words, separated by
            // whitespace or punctuation
            let pattern =
                format!(r"(?i)^[\s\p{{P}}]*(?:{words})(?:[\s\p{{P}}]+(?:{words}))*[\s\p{{P}}]*$");
            Some(Regex::new(&pattern).context("Failed to compile generic message pattern")?)
        };

        Ok(Self {
            min_length,
            generic,
        })
    }

    /// True when the whole message is nothing but generic words
    pub fn is_generic(&self, message: &str) -> bool {
        self.generic
            .as_ref()
            .is_some_and(|re| re.is_match(message.trim()))
    }

    /// Validate a raw commit message as git hands it to the hook
    pub fn check(&self, raw: &str) -> HookReport {
        let mut report = HookReport::new();
        let message = clean_message(raw);
        let length = message.chars().count();

        if length < self.min_length {
            report.error(
                CheckKind::MessageLength,
                format!(
                    "Commit message too short ({length} characters, minimum {})",
                    self.min_length
                ),
            );
            return report;
        }

        if self.is_generic(&message) {
            report.warning(
                CheckKind::GenericMessage,
                format!("Commit message '{message}' is generic, describe what changed and why"),
            );
        }

        report
    }
}

/// Strip git comment lines and everything below the scissors line, then trim
pub fn clean_message(raw: &str) -> String {
    raw.lines()
        .take_while(|line| *line != SCISSORS)
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
