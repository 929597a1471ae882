//! Styled terminal output for hookwarden
//!
//! Status lines share a small symbol vocabulary: ✔ success, ✖ error,
//! ⚠ warning, ℹ info. Errors always print, everything else respects quiet mode.

use anyhow::Result;
use console::style;
use std::io::{self, IsTerminal, Write};

use crate::hooks::installer::Confirm;
use crate::hooks::report::{Finding, HookReport, Severity};

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if !self.quiet {
            println!("  • {item}");
        }
    }

    /// Print an indented message
    pub fn indent(&self, message: &str) {
        if !self.quiet {
            println!("    {message}");
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }

    /// Print a key-value pair with consistent styling
    pub fn key_value(&self, key: &str, value: &str, highlight: bool) {
        if !self.quiet {
            let styled_value = if highlight {
                style(value).green().bold()
            } else {
                style(value).white()
            };
            println!("  {:<14} {}", style(key).dim(), styled_value);
        }
    }

    /// Print a status indicator with consistent styling
    pub fn status_indicator(&self, status: &str, message: &str, is_success: bool) {
        if !self.quiet {
            let (icon, color) = if is_success {
                ("✓", style(status).green())
            } else {
                ("✗", style(status).red())
            };
            println!("{} {} {}", style(icon).bold(), color.bold(), message);
        }
    }

    /// Print a single finding: `✖ [secret] src/app.rs:3 AWS access key: AKIA****`
    pub fn finding(&self, finding: &Finding) {
        let location = finding
            .location
            .as_ref()
            .map(|l| format!("{} ", style(l.to_string()).underlined()))
            .unwrap_or_default();
        let tag = style(format!("[{}]", finding.check)).dim();

        match finding.severity {
            Severity::Error => {
                eprintln!("{} {tag} {location}{}", style("✖").red(), finding.message);
            }
            Severity::Warning => {
                if !self.quiet {
                    println!("{} {tag} {location}{}", style("⚠").yellow(), finding.message);
                }
            }
        }
    }

    /// Print every finding, warnings last so errors stay on top
    pub fn report(&self, report: &HookReport) {
        for finding in report.errors() {
            self.finding(finding);
        }
        for finding in report.warnings() {
            self.finding(finding);
        }
    }
}

impl Confirm for Output {
    /// Ask for user confirmation, declining by default
    fn confirm(&self, message: &str) -> Result<bool> {
        if io::stdin().is_terminal() && console::Term::stderr().is_term() {
            let answer = dialoguer::Confirm::new()
                .with_prompt(message)
                .default(false)
                .interact()?;
            return Ok(answer);
        }

        // Piped input: read one line, anything but yes declines
        print!("{} {} (y/N): ", style("❯").cyan(), message);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}
