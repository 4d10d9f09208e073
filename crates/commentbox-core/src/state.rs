//! Local interaction state.
//!
//! Everything the user can change without calling the comment source lives
//! here and changes only through [`InteractionState::apply`] or the
//! post-submission hooks. The host owns the single instance.

use crate::collapse::CollapseTracker;
use crate::error::CommentBoxError;
use crate::reply::{ComposeDraft, ReplyState};

/// User intents that are handled locally, without an external call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalAction {
    ToggleCollapse(String),
    ShowReply(String),
    HideReply,
    ChangeReply(String),
    ChangeComment(String),
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub collapse: CollapseTracker,
    pub reply: ReplyState,
    pub compose: ComposeDraft,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: LocalAction) -> Result<(), CommentBoxError> {
        match action {
            LocalAction::ToggleCollapse(id) => {
                self.collapse.toggle(&id);
            }
            LocalAction::ShowReply(id) => self.reply.show_reply(&id),
            LocalAction::HideReply => self.reply.hide_reply(),
            LocalAction::ChangeReply(text) => self.reply.change_reply(&text)?,
            LocalAction::ChangeComment(text) => self.compose.set(&text),
        }
        Ok(())
    }

    /// Called once a top-level comment is confirmed posted
    pub fn comment_posted(&mut self) {
        self.compose.clear();
    }

    /// Called once a reply is confirmed posted
    pub fn reply_posted(&mut self) {
        self.reply.hide_reply();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_local_actions() {
        let mut state = InteractionState::new();
        state
            .apply(LocalAction::ChangeComment("top level".into()))
            .unwrap();
        state.apply(LocalAction::ShowReply("c1".into())).unwrap();
        state
            .apply(LocalAction::ChangeReply("nested".into()))
            .unwrap();
        state
            .apply(LocalAction::ToggleCollapse("c2".into()))
            .unwrap();

        assert_eq!(state.compose.text, "top level");
        assert_eq!(state.reply.draft(), Some("nested"));
        assert!(state.collapse.is_collapsed("c2"));

        state.apply(LocalAction::HideReply).unwrap();
        assert!(state.reply.target_id().is_none());
        assert_eq!(state.compose.text, "top level");
    }

    #[test]
    fn test_change_reply_while_idle_is_rejected() {
        let mut state = InteractionState::new();
        let result = state.apply(LocalAction::ChangeReply("x".into()));
        assert!(matches!(result, Err(CommentBoxError::NotReplying)));
    }

    #[test]
    fn test_posting_clears_only_its_own_draft() {
        let mut state = InteractionState::new();
        state.apply(LocalAction::ChangeComment("a".into())).unwrap();
        state.apply(LocalAction::ShowReply("c1".into())).unwrap();
        state.apply(LocalAction::ChangeReply("b".into())).unwrap();
        state.apply(LocalAction::ToggleCollapse("c1".into())).unwrap();

        state.reply_posted();
        assert_eq!(state.reply, ReplyState::Idle);
        assert_eq!(state.compose.text, "a");

        state.comment_posted();
        assert!(state.compose.is_empty());
        assert!(state.collapse.is_collapsed("c1"));
    }
}
