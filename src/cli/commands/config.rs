//! Configuration command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};

use super::Session;
use crate::git::branch::BranchRules;
use crate::git::commit::MessageRules;
use crate::security::ContentScanner;
use crate::shared::format::format_bytes;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,
    },
    /// Compile every rule and report problems
    Validate,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShowFormat {
    Toml,
    Json,
}

/// Execute config commands
pub async fn execute(args: ConfigArgs, session: &Session) -> Result<()> {
    match args.command {
        ConfigCommands::Show { format } => show(format, session),
        ConfigCommands::Validate => validate(session),
    }
}

fn show(format: ShowFormat, session: &Session) -> Result<()> {
    let config = session.load_config(&session.root()?)?;

    let rendered = match format {
        ShowFormat::Toml => {
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?
        }
        ShowFormat::Json => {
            serde_json::to_string_pretty(&config).context("Failed to serialize configuration")?
        }
    };
    println!("{rendered}");
    Ok(())
}

fn validate(session: &Session) -> Result<()> {
    let output = &session.output;
    let config = session.load_config(&session.root()?)?;

    BranchRules::from_config(&config.branch)?;
    MessageRules::from_config(&config.commit_msg)?;
    ContentScanner::from_config(&config.pre_commit)?;

    output.success("Configuration is valid");
    output.key_value("Branch prefixes:", &config.branch.prefixes.join(", "), false);
    output.key_value(
        "Min message:",
        &format!("{} characters", config.commit_msg.min_length),
        false,
    );
    output.key_value(
        "Max file size:",
        &format_bytes(config.pre_commit.max_file_size),
        false,
    );
    let enabled = |patterns: &[crate::config::PatternConfig]| {
        patterns.iter().filter(|p| p.enabled).count().to_string()
    };
    output.key_value("Secret rules:", &enabled(&config.pre_commit.secrets), false);
    output.key_value("Debug rules:", &enabled(&config.pre_commit.debug), false);
    Ok(())
}
