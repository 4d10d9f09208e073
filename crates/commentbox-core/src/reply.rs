//! Reply targeting and compose drafts.
//!
//! At most one reply box is open at a time. The reply draft belongs to its
//! target: switching to another comment starts from an empty draft so text
//! typed against one comment is never posted under another.

use crate::error::CommentBoxError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReplyState {
    #[default]
    Idle,
    Replying {
        target_id: String,
        draft: String,
    },
}

impl ReplyState {
    /// Open the reply box for `comment_id`.
    /// Re-opening the current target keeps its draft; any other target
    /// starts empty.
    pub fn show_reply(&mut self, comment_id: &str) {
        if self.is_replying_to(comment_id) {
            return;
        }
        *self = ReplyState::Replying {
            target_id: comment_id.to_string(),
            draft: String::new(),
        };
    }

    /// Close the reply box and drop its draft
    pub fn hide_reply(&mut self) {
        *self = ReplyState::Idle;
    }

    /// Replace the draft text of the open reply box
    pub fn change_reply(&mut self, text: &str) -> Result<(), CommentBoxError> {
        match self {
            ReplyState::Replying { draft, .. } => {
                draft.clear();
                draft.push_str(text);
                Ok(())
            }
            ReplyState::Idle => Err(CommentBoxError::NotReplying),
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        match self {
            ReplyState::Replying { target_id, .. } => Some(target_id),
            ReplyState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            ReplyState::Replying { draft, .. } => Some(draft),
            ReplyState::Idle => None,
        }
    }

    pub fn is_replying_to(&self, comment_id: &str) -> bool {
        self.target_id() == Some(comment_id)
    }
}

/// Text of the top-level "new comment" box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub text: String,
}

impl ComposeDraft {
    pub fn set(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
