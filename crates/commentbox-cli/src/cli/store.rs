//! JSON file backed comment source.
//!
//! The whole thread is one JSON array on disk. Every mutation is a
//! read-modify-write under an async lock.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use commentbox_core::{Comment, CommentSource};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

/// A comment as persisted in the store file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredComment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub flagged: bool,
    #[serde(default)]
    pub votes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

pub struct FileCommentSource {
    path: PathBuf,
    /// Author of new comments; None means anonymous (read-only)
    current_user: Option<String>,
    write_lock: Mutex<()>,
}

impl FileCommentSource {
    pub fn new<P: AsRef<Path>>(path: P, current_user: Option<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            current_user,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<StoredComment>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read store: {}", self.path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store: {}", self.path.display()))
    }

    async fn write_all(&self, comments: &[StoredComment]) -> Result<()> {
        let json = serde_json::to_string_pretty(comments).context("Failed to serialize store")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write store: {}", self.path.display()))
    }

    /// Read, apply `f`, write back
    async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<StoredComment>) -> Result<()> + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut comments = self.read_all().await?;
        f(&mut comments)?;
        self.write_all(&comments).await
    }

    async fn insert(&self, body: &str, parent_id: Option<&str>) -> Result<()> {
        let Some(author) = self.current_user.clone() else {
            bail!("Posting requires a user name");
        };
        if body.trim().is_empty() {
            bail!("Comment body is empty");
        }
        let comment = StoredComment {
            id: Uuid::new_v4().to_string(),
            parent_comment_id: parent_id.map(str::to_string),
            body: body.to_string(),
            author,
            created_at: Utc::now(),
            flagged: false,
            votes: 0,
            avatar_url: None,
        };
        self.update(move |comments| {
            if let Some(parent_id) = &comment.parent_comment_id {
                if !comments.iter().any(|c| &c.id == parent_id) {
                    bail!("Unknown comment: {}", parent_id);
                }
            }
            tracing::debug!(comment_id = %comment.id, "Storing comment");
            comments.push(comment);
            Ok(())
        })
        .await
    }

    async fn modify(&self, comment_id: &str, f: impl FnOnce(&mut StoredComment) + Send) -> Result<()> {
        let comment_id = comment_id.to_string();
        self.update(move |comments| match comments.iter_mut().find(|c| c.id == comment_id) {
            Some(comment) => {
                f(comment);
                Ok(())
            }
            None => bail!("Unknown comment: {}", comment_id),
        })
        .await
    }
}

#[async_trait]
impl CommentSource for FileCommentSource {
    type Raw = StoredComment;

    async fn get_comments(&self) -> Result<Vec<StoredComment>> {
        self.read_all().await
    }

    fn normalize_comment(&self, raw: &StoredComment) -> Comment {
        Comment {
            id: raw.id.clone(),
            parent_id: raw.parent_comment_id.clone(),
            body_display: raw.body.clone(),
            user_name_display: raw.author.clone(),
            timestamp_display: format!(
                "{} ({} points)",
                raw.created_at.format("%Y-%m-%d %H:%M"),
                raw.votes
            ),
            belongs_to_author: self.current_user.as_deref() == Some(raw.author.as_str()),
            flagged: raw.flagged,
            user_avatar_url: raw.avatar_url.clone(),
        }
    }

    async fn comment(&self, body: &str) -> Result<()> {
        self.insert(body, None).await
    }

    async fn reply(&self, body: &str, parent_id: &str) -> Result<()> {
        self.insert(body, Some(parent_id)).await
    }

    async fn up_vote(&self, comment_id: &str) -> Result<()> {
        self.modify(comment_id, |c| c.votes += 1).await
    }

    async fn down_vote(&self, comment_id: &str) -> Result<()> {
        self.modify(comment_id, |c| c.votes -= 1).await
    }

    async fn flag(&self, comment_id: &str) -> Result<()> {
        self.modify(comment_id, |c| c.flagged = true).await
    }
}
