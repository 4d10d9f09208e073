//! Default labels and layout values
//!
//! Centralized location for the strings and numbers a host gets when its
//! configuration leaves a field out.

pub const DEFAULT_CLASS_PREFIX: &str = "cb-";
pub const DEFAULT_CLASS_NAME: &str = "commentbox";

/// Horizontal padding per nesting level
pub const DEFAULT_LEVEL_PADDING: u32 = 25;

// Button and placeholder labels
pub const DEFAULT_LOADING_CONTENT: &str = "Loading...";
pub const DEFAULT_EXPAND_BUTTON: &str = "[+]";
pub const DEFAULT_CONTRACT_BUTTON: &str = "[-]";
pub const DEFAULT_SHOW_REPLY_BUTTON: &str = "reply";
pub const DEFAULT_HIDE_REPLY_BUTTON: &str = "cancel";
pub const DEFAULT_POST_REPLY_BUTTON: &str = "Post Reply";
pub const DEFAULT_POST_COMMENT_BUTTON: &str = "Post Comment";
pub const DEFAULT_FLAG_BUTTON: &str = "flag";
pub const DEFAULT_FLAGGED_CONTENT: &str = "(flagged)";

/// Shown in place of the compose affordances while posting is disabled
pub const DEFAULT_DISABLED_MESSAGE: &str =
    "Replace with a component that logs in your user or gets their name.";
