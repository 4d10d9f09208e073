use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use commentbox_core::{CommentBox, CommentBoxConfig, LocalAction};

use super::render::render_text;
use super::store::FileCommentSource;

/// Commands that can be run against a comment store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Show,
    Comment { body: String },
    Reply { parent_id: String, body: String },
    UpVote { comment_id: String },
    DownVote { comment_id: String },
    Flag { comment_id: String },
}

/// Per-invocation options shared by every command
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub store: PathBuf,
    pub config: CommentBoxConfig,
    /// Acting user. Posting is disabled without one.
    pub user: Option<String>,
    /// Ids to show collapsed
    pub collapse: Vec<String>,
    /// Open the reply box under this comment
    pub reply_to: Option<String>,
}

/// Run one command and return the rendered thread
pub async fn run(options: RunOptions, command: CliCommand) -> Result<String> {
    let mut config = options.config;
    if options.user.is_some() {
        config.disabled = false;
    }

    let source = Arc::new(FileCommentSource::new(&options.store, options.user));
    let mut comment_box = CommentBox::new(source, config);
    comment_box.load().await?;

    for id in options.collapse {
        if !comment_box.state().collapse.is_collapsed(&id) {
            comment_box.dispatch(LocalAction::ToggleCollapse(id))?;
        }
    }
    if let Some(id) = options.reply_to {
        comment_box.dispatch(LocalAction::ShowReply(id))?;
    }

    match command {
        CliCommand::Show => {}
        CliCommand::Comment { body } => {
            comment_box.dispatch(LocalAction::ChangeComment(body))?;
            comment_box.submit_comment().await?;
        }
        CliCommand::Reply { parent_id, body } => {
            comment_box.dispatch(LocalAction::ShowReply(parent_id))?;
            comment_box.dispatch(LocalAction::ChangeReply(body))?;
            comment_box.submit_reply().await?;
        }
        CliCommand::UpVote { comment_id } => {
            comment_box.up_vote(&comment_id).await?;
            comment_box.load().await?;
        }
        CliCommand::DownVote { comment_id } => {
            comment_box.down_vote(&comment_id).await?;
            comment_box.load().await?;
        }
        CliCommand::Flag { comment_id } => {
            comment_box.flag(&comment_id).await?;
        }
    }

    Ok(render_text(&comment_box.view()))
}
