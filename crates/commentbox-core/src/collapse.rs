use std::collections::HashSet;

/// Comment ids whose reply subtree is currently hidden.
///
/// Absent ids are expanded. Entries survive snapshot reloads, including
/// ids that are not in the latest snapshot, so re-fetching never re-expands
/// what the user collapsed.
#[derive(Debug, Clone, Default)]
pub struct CollapseTracker {
    collapsed: HashSet<String>,
}

impl CollapseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle collapsed state for a comment.
    /// Returns true if the comment is now collapsed.
    pub fn toggle(&mut self, comment_id: &str) -> bool {
        if self.collapsed.remove(comment_id) {
            false
        } else {
            self.collapsed.insert(comment_id.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, comment_id: &str) -> bool {
        self.collapsed.contains(comment_id)
    }

    pub fn collapsed_ids(&self) -> &HashSet<String> {
        &self.collapsed
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }
}
