use serde::{Deserialize, Serialize};

/// Canonical comment shape consumed by the thread assembler.
///
/// Produced by [`crate::CommentSource::normalize_comment`] from whatever raw
/// record the source hands out. Read-only to the core: a reload replaces the
/// whole snapshot rather than patching individual comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Direct parent comment ID (for threaded replies)
    /// None for top-level comments
    #[serde(default)]
    pub parent_id: Option<String>,
    pub body_display: String,
    pub user_name_display: String,
    pub timestamp_display: String,
    #[serde(default)]
    pub belongs_to_author: bool,
    #[serde(default)]
    pub flagged: bool,
    /// Only rendered when the host enables avatars
    #[serde(default)]
    pub user_avatar_url: Option<String>,
}

impl Comment {
    /// Build a comment with empty display fields
    pub fn new(id: impl Into<String>, parent_id: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            body_display: String::new(),
            user_name_display: String::new(),
            timestamp_display: String::new(),
            belongs_to_author: false,
            flagged: false,
            user_avatar_url: None,
        }
    }

    /// Parent reference as used for linking.
    /// An empty parent id means "no parent".
    pub fn parent_ref(&self) -> Option<&str> {
        self.parent_id.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parent_is_root() {
        let comment = Comment::new("1", Some(""));
        assert_eq!(comment.parent_ref(), None);

        let reply = Comment::new("2", Some("1"));
        assert_eq!(reply.parent_ref(), Some("1"));
    }

    #[test]
    fn test_deserialize_minimal_comment() {
        let json = r#"{
            "id": "c1",
            "bodyDisplay": "hello",
            "userNameDisplay": "ann",
            "timestampDisplay": "now"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, "c1");
        assert!(comment.parent_id.is_none());
        assert!(!comment.flagged);
        assert!(!comment.belongs_to_author);
        assert!(comment.user_avatar_url.is_none());
    }
}
