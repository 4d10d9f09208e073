//! In-memory comment source.
//!
//! Keeps comments in a Vec, records every call, and can be told to fail
//! individual operations. Used by the tests and by hosts that want a
//! throwaway thread.

use std::collections::{HashMap, HashSet};

use anyhow::bail;
use async_trait::async_trait;
use parking_lot::Mutex;

use super::CommentSource;
use crate::models::Comment;

/// Operations that can be configured to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceOp {
    GetComments,
    Comment,
    Reply,
    UpVote,
    DownVote,
    Flag,
}

/// A recorded call to the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    GetComments,
    Comment { body: String },
    Reply { body: String, parent_id: String },
    UpVote(String),
    DownVote(String),
    Flag(String),
}

#[derive(Debug, Default)]
struct Inner {
    comments: Vec<Comment>,
    votes: HashMap<String, i64>,
    calls: Vec<SourceCall>,
    failing: HashSet<SourceOp>,
    next_id: u64,
}

#[derive(Debug)]
pub struct MemoryCommentSource {
    author: String,
    inner: Mutex<Inner>,
}

impl Default for MemoryCommentSource {
    fn default() -> Self {
        Self::new("you")
    }
}

impl MemoryCommentSource {
    /// New empty source; comments it creates are attributed to `author`
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Pre-populate the flat list
    pub fn with_comments(self, comments: Vec<Comment>) -> Self {
        self.inner.lock().comments = comments;
        self
    }

    /// Make every later call of `op` fail until [`Self::succeed`] is called
    pub fn fail(&self, op: SourceOp) {
        self.inner.lock().failing.insert(op);
    }

    pub fn succeed(&self, op: SourceOp) {
        self.inner.lock().failing.remove(&op);
    }

    /// Return all recorded calls.
    pub fn calls(&self) -> Vec<SourceCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of times the flat list was fetched
    pub fn load_count(&self) -> usize {
        self.inner
            .lock()
            .calls
            .iter()
            .filter(|c| matches!(c, SourceCall::GetComments))
            .count()
    }

    pub fn votes(&self, comment_id: &str) -> i64 {
        self.inner.lock().votes.get(comment_id).copied().unwrap_or(0)
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.inner.lock().comments.clone()
    }

    fn record(&self, call: SourceCall, op: SourceOp) -> anyhow::Result<()> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        if inner.failing.contains(&op) {
            bail!("{:?} rejected by source", op);
        }
        Ok(())
    }

    fn push_comment(&self, body: &str, parent_id: Option<&str>) {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let mut comment = Comment::new(format!("m{}", inner.next_id), parent_id);
        comment.body_display = body.to_string();
        comment.user_name_display = self.author.clone();
        comment.belongs_to_author = true;
        inner.comments.push(comment);
    }
}

#[async_trait]
impl CommentSource for MemoryCommentSource {
    type Raw = Comment;

    async fn get_comments(&self) -> anyhow::Result<Vec<Comment>> {
        self.record(SourceCall::GetComments, SourceOp::GetComments)?;
        Ok(self.comments())
    }

    fn normalize_comment(&self, raw: &Comment) -> Comment {
        raw.clone()
    }

    async fn comment(&self, body: &str) -> anyhow::Result<()> {
        self.record(
            SourceCall::Comment {
                body: body.to_string(),
            },
            SourceOp::Comment,
        )?;
        self.push_comment(body, None);
        Ok(())
    }

    async fn reply(&self, body: &str, parent_id: &str) -> anyhow::Result<()> {
        self.record(
            SourceCall::Reply {
                body: body.to_string(),
                parent_id: parent_id.to_string(),
            },
            SourceOp::Reply,
        )?;
        self.push_comment(body, Some(parent_id));
        Ok(())
    }

    async fn up_vote(&self, comment_id: &str) -> anyhow::Result<()> {
        self.record(SourceCall::UpVote(comment_id.to_string()), SourceOp::UpVote)?;
        *self
            .inner
            .lock()
            .votes
            .entry(comment_id.to_string())
            .or_default() += 1;
        Ok(())
    }

    async fn down_vote(&self, comment_id: &str) -> anyhow::Result<()> {
        self.record(
            SourceCall::DownVote(comment_id.to_string()),
            SourceOp::DownVote,
        )?;
        *self
            .inner
            .lock()
            .votes
            .entry(comment_id.to_string())
            .or_default() -= 1;
        Ok(())
    }

    async fn flag(&self, comment_id: &str) -> anyhow::Result<()> {
        self.record(SourceCall::Flag(comment_id.to_string()), SourceOp::Flag)?;
        let mut inner = self.inner.lock();
        if let Some(comment) = inner.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.flagged = true;
        }
        Ok(())
    }
}
