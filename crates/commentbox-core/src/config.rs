use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Static configuration supplied by the host at construction.
/// Every field falls back to its default when left out of the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentBoxConfig {
    pub class_prefix: String,
    pub class_name: String,
    /// When true, compose affordances are replaced by `disabled_view`
    pub disabled: bool,
    pub users_have_avatars: bool,
    /// Horizontal padding per nesting level
    pub level_padding: u32,
    #[serde(flatten)]
    pub labels: Labels,
    pub disabled_view: DisabledView,
}

impl Default for CommentBoxConfig {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            disabled: true,
            users_have_avatars: false,
            level_padding: DEFAULT_LEVEL_PADDING,
            labels: Labels::default(),
            disabled_view: DisabledView::default(),
        }
    }
}

impl CommentBoxConfig {
    /// Deserialize config from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Which compose path the view should take
    pub fn compose_mode(&self) -> ComposeMode {
        if self.disabled {
            ComposeMode::Disabled(self.disabled_view.clone())
        } else {
            ComposeMode::Enabled
        }
    }

    /// Prefix a class name for styling isolation
    pub fn prefix(&self, class_name: &str) -> String {
        format!("{}{}", self.class_prefix, class_name)
    }
}

/// Button and placeholder text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Labels {
    pub loading_content: String,
    pub expand_button_content: String,
    pub contract_button_content: String,
    pub show_reply_button_content: String,
    pub hide_reply_button_content: String,
    pub post_reply_button_content: String,
    pub post_comment_button_content: String,
    pub flag_button_content: String,
    pub flagged_content: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            loading_content: DEFAULT_LOADING_CONTENT.to_string(),
            expand_button_content: DEFAULT_EXPAND_BUTTON.to_string(),
            contract_button_content: DEFAULT_CONTRACT_BUTTON.to_string(),
            show_reply_button_content: DEFAULT_SHOW_REPLY_BUTTON.to_string(),
            hide_reply_button_content: DEFAULT_HIDE_REPLY_BUTTON.to_string(),
            post_reply_button_content: DEFAULT_POST_REPLY_BUTTON.to_string(),
            post_comment_button_content: DEFAULT_POST_COMMENT_BUTTON.to_string(),
            flag_button_content: DEFAULT_FLAG_BUTTON.to_string(),
            flagged_content: DEFAULT_FLAGGED_CONTENT.to_string(),
        }
    }
}

/// Host-supplied content shown instead of the compose affordances,
/// e.g. a login prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisabledView {
    pub message: String,
}

impl Default for DisabledView {
    fn default() -> Self {
        Self {
            message: DEFAULT_DISABLED_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeMode {
    Enabled,
    Disabled(DisabledView),
}
