/// Errors surfaced by [`crate::CommentBox`] operations.
///
/// None of these are fatal to the comment box itself: on any error the
/// local drafts, reply target and last snapshot are left as they were.
#[derive(Debug, thiserror::Error)]
pub enum CommentBoxError {
    #[error("Posting is disabled for this comment box")]
    ComposeDisabled,
    #[error("No reply is being composed")]
    NotReplying,
    #[error("Comment source failed: {0}")]
    Collaborator(#[source] anyhow::Error),
}

impl From<anyhow::Error> for CommentBoxError {
    fn from(err: anyhow::Error) -> Self {
        CommentBoxError::Collaborator(err)
    }
}
