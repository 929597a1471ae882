//! Command-line interface for hookwarden
//!
//! One binary serves both the operator (`install`, `uninstall`, `status`,
//! ...) and git itself, which calls `hookwarden pre-commit`,
//! `hookwarden commit-msg <file>` and `hookwarden pre-push` from the
//! installed hook scripts.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
mod output;

pub use output::Output;

use commands::{Session, config, hook, init, install, status, uninstall};

/// hookwarden - branch naming, commit message and staged content checks as git hooks
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Run as if started in <DIR> instead of the current working directory
    #[arg(short = 'C', long = "directory", value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of hookwarden.{toml,json,yaml}
    #[arg(long, value_name = "FILE", global = true, env = "HOOKWARDEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Install the git hooks from the hook source directory
    #[command(alias = "install-hooks")]
    Install(install::InstallArgs),
    /// Remove the installed git hooks
    #[command(alias = "uninstall-hooks")]
    Uninstall(uninstall::UninstallArgs),
    /// Write the default hook scripts into the hook source directory
    Init(init::InitArgs),
    /// Show installed hooks and the current branch
    Status(status::StatusArgs),
    /// Configuration management
    Config(config::ConfigArgs),
    /// commit-msg hook: validate the commit message in <MESSAGE_FILE>
    #[command(name = "commit-msg")]
    CommitMsg(hook::CommitMsgArgs),
    /// pre-push hook: validate the current branch name
    #[command(name = "pre-push")]
    PrePush(hook::PrePushArgs),
    /// pre-commit hook: check staged files for size, secrets and debug statements
    #[command(name = "pre-commit")]
    PreCommit(hook::PreCommitArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)
                .with_context(|| format!("Cannot change directory to {}", dir.display()))?;
        }

        setup_logging(self.verbose, self.quiet);

        let session = Session::new(Output::new(self.verbose > 0, self.quiet), self.config);

        match self.command {
            Some(Commands::Install(args)) => install::execute(args, &session).await,
            Some(Commands::Uninstall(args)) => uninstall::execute(args, &session).await,
            Some(Commands::Init(args)) => init::execute(args, &session).await,
            Some(Commands::Status(args)) => status::execute(args, &session).await,
            Some(Commands::Config(args)) => config::execute(args, &session).await,
            Some(Commands::CommitMsg(args)) => hook::commit_msg(args, &session).await,
            Some(Commands::PrePush(args)) => hook::pre_push(args, &session).await,
            Some(Commands::PreCommit(args)) => hook::pre_commit(args, &session).await,
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout belongs to command output (`config show` is piped)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_spec_aliases_parse() {
        let cli = Cli::try_parse_from(["hookwarden", "install-hooks", "--force"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Install(ref a)) if a.force));

        let cli = Cli::try_parse_from(["hookwarden", "uninstall-hooks"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Uninstall(_))));
    }

    #[test]
    fn test_pre_push_accepts_git_arguments() {
        let cli =
            Cli::try_parse_from(["hookwarden", "pre-push", "origin", "git@example.com:x.git"])
                .unwrap();
        match cli.command {
            Some(Commands::PrePush(args)) => {
                assert_eq!(args.remote.as_deref(), Some("origin"));
                assert_eq!(args.url.as_deref(), Some("git@example.com:x.git"));
            }
            _ => panic!("expected pre-push"),
        }
    }

    #[test]
    fn test_commit_msg_requires_file() {
        assert!(Cli::try_parse_from(["hookwarden", "commit-msg"]).is_err());
        let cli =
            Cli::try_parse_from(["hookwarden", "-vv", "commit-msg", ".git/COMMIT_EDITMSG"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
