//! `CommentBox` - the single stateful instance a host drives.
//!
//! Local intents go through [`CommentBox::dispatch`] and never touch the
//! source. Mutating intents follow a fixed order:
//! source call -> await -> clear the matching draft -> reload -> apply
//! snapshot. Nothing local is cleared until the source confirms, so a
//! failed call leaves drafts and the reply target intact for a retry.
//! Once the source has confirmed, the operation succeeds even if the
//! follow-up reload fails; the previous snapshot stays displayed.

use std::sync::Arc;

use crate::config::CommentBoxConfig;
use crate::error::CommentBoxError;
use crate::models::Comment;
use crate::source::CommentSource;
use crate::state::{InteractionState, LocalAction};
use crate::view::CommentBoxView;

pub struct CommentBox<S: CommentSource> {
    source: Arc<S>,
    config: CommentBoxConfig,
    state: InteractionState,
    /// Latest raw snapshot. None until the first successful load.
    comments: Option<Vec<S::Raw>>,
}

impl<S: CommentSource> CommentBox<S> {
    pub fn new(source: Arc<S>, config: CommentBoxConfig) -> Self {
        Self {
            source,
            config,
            state: InteractionState::new(),
            comments: None,
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn config(&self) -> &CommentBoxConfig {
        &self.config
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.comments.is_some()
    }

    /// Apply a local intent. No source call, no reload.
    pub fn dispatch(&mut self, action: LocalAction) -> Result<(), CommentBoxError> {
        self.state.apply(action)
    }

    /// Fetch the flat list and replace the snapshot wholesale.
    /// Returns the number of raw records received.
    pub async fn load(&mut self) -> Result<usize, CommentBoxError> {
        let comments = self.source.get_comments().await.map_err(|e| {
            tracing::warn!("Failed to load comments: {:#}", e);
            CommentBoxError::Collaborator(e)
        })?;
        let count = comments.len();
        self.comments = Some(comments);
        tracing::debug!(count, "Loaded comment snapshot");
        Ok(count)
    }

    /// Post the top-level draft, then reload
    pub async fn submit_comment(&mut self) -> Result<(), CommentBoxError> {
        self.ensure_enabled()?;
        let body = self.state.compose.text.clone();

        self.source.comment(&body).await.map_err(|e| {
            tracing::warn!("Failed to post comment: {:#}", e);
            CommentBoxError::Collaborator(e)
        })?;
        tracing::info!("Posted comment");

        self.state.comment_posted();
        self.refresh().await;
        Ok(())
    }

    /// Post the reply draft under the current reply target, then reload
    pub async fn submit_reply(&mut self) -> Result<(), CommentBoxError> {
        self.ensure_enabled()?;
        let (target_id, body) = match (self.state.reply.target_id(), self.state.reply.draft()) {
            (Some(target_id), Some(draft)) => (target_id.to_string(), draft.to_string()),
            _ => return Err(CommentBoxError::NotReplying),
        };

        self.source.reply(&body, &target_id).await.map_err(|e| {
            tracing::warn!(parent_id = %target_id, "Failed to post reply: {:#}", e);
            CommentBoxError::Collaborator(e)
        })?;
        tracing::info!(parent_id = %target_id, "Posted reply");

        self.state.reply_posted();
        self.refresh().await;
        Ok(())
    }

    /// Forward an upvote. Counts show up with the next reload.
    pub async fn up_vote(&self, comment_id: &str) -> Result<(), CommentBoxError> {
        self.source.up_vote(comment_id).await.map_err(|e| {
            tracing::warn!(comment_id, "Failed to upvote comment: {:#}", e);
            CommentBoxError::Collaborator(e)
        })
    }

    /// Forward a downvote. Counts show up with the next reload.
    pub async fn down_vote(&self, comment_id: &str) -> Result<(), CommentBoxError> {
        self.source.down_vote(comment_id).await.map_err(|e| {
            tracing::warn!(comment_id, "Failed to downvote comment: {:#}", e);
            CommentBoxError::Collaborator(e)
        })
    }

    /// Flag a comment, then reload so the badge reflects confirmed state
    pub async fn flag(&mut self, comment_id: &str) -> Result<(), CommentBoxError> {
        self.source.flag(comment_id).await.map_err(|e| {
            tracing::warn!(comment_id, "Failed to flag comment: {:#}", e);
            CommentBoxError::Collaborator(e)
        })?;
        tracing::info!(comment_id, "Flagged comment");

        self.refresh().await;
        Ok(())
    }

    /// Normalize the current snapshot. None until the first load.
    pub fn normalized_comments(&self) -> Option<Vec<Comment>> {
        self.comments.as_ref().map(|raw| {
            raw.iter()
                .map(|r| self.source.normalize_comment(r))
                .collect()
        })
    }

    /// Build the render plan for the current state and snapshot
    pub fn view(&self) -> CommentBoxView {
        let comments = self.normalized_comments();
        CommentBoxView::build(&self.config, &self.state, comments.as_deref())
    }

    /// Reload after a confirmed mutation. A failure is already logged by
    /// `load` and leaves the stale snapshot in place.
    async fn refresh(&mut self) {
        if self.load().await.is_err() {
            tracing::debug!("Keeping previous snapshot after failed reload");
        }
    }

    fn ensure_enabled(&self) -> Result<(), CommentBoxError> {
        if self.config.disabled {
            return Err(CommentBoxError::ComposeDisabled);
        }
        Ok(())
    }
}
