//! Entry points git calls from the installed hook scripts

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::Session;
use crate::hooks;

#[derive(Args)]
pub struct CommitMsgArgs {
    /// File holding the proposed commit message
    pub message_file: PathBuf,
}

#[derive(Args)]
pub struct PrePushArgs {
    /// Remote name, passed by git
    pub remote: Option<String>,

    /// Remote URL, passed by git
    pub url: Option<String>,
}

#[derive(Args)]
pub struct PreCommitArgs {}

pub async fn commit_msg(args: CommitMsgArgs, session: &Session) -> Result<()> {
    let context = session.hook_context(session.root()?)?;
    hooks::commit_msg::execute(&context, &args.message_file, &session.output).await
}

pub async fn pre_push(args: PrePushArgs, session: &Session) -> Result<()> {
    tracing::debug!("pre-push to {:?} ({:?})", args.remote, args.url);
    let repo = session.repo()?;
    let context = session.hook_context(repo.workdir()?.to_path_buf())?;
    hooks::pre_push::execute(&context, &repo, &session.output).await
}

pub async fn pre_commit(_args: PreCommitArgs, session: &Session) -> Result<()> {
    let repo = session.repo()?;
    let context = session.hook_context(repo.workdir()?.to_path_buf())?;
    hooks::pre_commit::execute(&context, &repo, &session.output).await
}
