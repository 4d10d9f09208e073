//! Comment source trait - the boundary to whatever persists comments.
//!
//! The core never stores comments itself: it asks the source for a fresh
//! snapshot after every mutation and normalizes each raw record on every
//! render pass.

mod memory;

use async_trait::async_trait;

use crate::models::Comment;

pub use memory::{MemoryCommentSource, SourceCall, SourceOp};

#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Record type handed out by `get_comments`
    type Raw: Clone + Send + Sync;

    /// Fetch the full flat comment list
    async fn get_comments(&self) -> anyhow::Result<Vec<Self::Raw>>;

    /// Map a raw record to the canonical shape. Must be pure.
    fn normalize_comment(&self, raw: &Self::Raw) -> Comment;

    /// Post a top-level comment
    async fn comment(&self, body: &str) -> anyhow::Result<()>;

    /// Post a reply under `parent_id`
    async fn reply(&self, body: &str, parent_id: &str) -> anyhow::Result<()>;

    async fn up_vote(&self, comment_id: &str) -> anyhow::Result<()>;

    async fn down_vote(&self, comment_id: &str) -> anyhow::Result<()>;

    async fn flag(&self, comment_id: &str) -> anyhow::Result<()>;
}
