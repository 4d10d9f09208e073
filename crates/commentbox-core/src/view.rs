//! Render plan for a comment box.
//!
//! A host-agnostic description of what to draw: class names, indentation,
//! which buttons exist and what they say. Markup and styling belong to the
//! host.

use crate::config::{CommentBoxConfig, ComposeMode, DisabledView};
use crate::models::Comment;
use crate::state::InteractionState;
use crate::thread::{assemble, ThreadEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct CommentBoxView {
    pub class_name: String,
    pub header: ComposeView,
    pub body: BodyView,
}

/// Top-level "new comment" box
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeView {
    pub class_name: String,
    pub draft: String,
    pub affordance: ComposeAffordance,
}

/// Either a submit button or the host's replacement content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeAffordance {
    Submit { label: String },
    Replaced(DisabledView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// No snapshot has been loaded yet
    Loading { class_name: String, label: String },
    Comments(Vec<CommentView>),
}

/// A clickable control; `value` is the comment id it acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub class_name: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagView {
    Button(Button),
    Badge { class_name: String, label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplyForm {
    pub draft: String,
    pub affordance: ComposeAffordance,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentView {
    pub id: String,
    pub class_names: Vec<String>,
    pub level_class: String,
    pub depth: usize,
    pub padding_left: u32,
    pub body: String,
    pub user_name: String,
    pub timestamp: String,
    pub avatar_url: Option<String>,
    /// Present only when the comment has replies
    pub toggle: Option<Button>,
    pub flag: FlagView,
    /// Show-reply, or hide-reply for the current reply target
    pub reply_toggle: Button,
    pub reply_form: Option<ReplyForm>,
}

impl CommentBoxView {
    /// Build the render plan. `comments` is None until the first load.
    pub fn build(
        config: &CommentBoxConfig,
        state: &InteractionState,
        comments: Option<&[Comment]>,
    ) -> Self {
        let body = match comments {
            None => BodyView::Loading {
                class_name: config.prefix("loading"),
                label: config.labels.loading_content.clone(),
            },
            Some(comments) => {
                let entries = assemble(comments, state.collapse.collapsed_ids());
                BodyView::Comments(
                    entries
                        .iter()
                        .filter(|e| e.is_visible)
                        .map(|e| comment_view(config, state, e))
                        .collect(),
                )
            }
        };

        Self {
            class_name: config.class_name.clone(),
            header: ComposeView {
                class_name: config.prefix("header"),
                draft: state.compose.text.clone(),
                affordance: affordance(config, &config.labels.post_comment_button_content),
            },
            body,
        }
    }

    /// Rendered comments, empty while loading
    pub fn comments(&self) -> &[CommentView] {
        match &self.body {
            BodyView::Comments(comments) => comments,
            BodyView::Loading { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.body, BodyView::Loading { .. })
    }
}

fn affordance(config: &CommentBoxConfig, label: &str) -> ComposeAffordance {
    match config.compose_mode() {
        ComposeMode::Enabled => ComposeAffordance::Submit {
            label: label.to_string(),
        },
        ComposeMode::Disabled(view) => ComposeAffordance::Replaced(view),
    }
}

fn comment_view(
    config: &CommentBoxConfig,
    state: &InteractionState,
    entry: &ThreadEntry,
) -> CommentView {
    let comment = &entry.comment;
    let labels = &config.labels;
    let replying = state.reply.is_replying_to(&comment.id);

    let button = |class_name: &str, label: &str| Button {
        class_name: config.prefix(class_name),
        label: label.to_string(),
        value: comment.id.clone(),
    };

    let mut class_names = vec!["comment"];
    if replying {
        class_names.push("replying-to");
    }
    if comment.belongs_to_author {
        class_names.push("belongs-to-author");
    }
    if comment.flagged {
        class_names.push("flagged");
    }

    let toggle = entry.has_children.then(|| {
        let label = if entry.is_collapsed {
            &labels.expand_button_content
        } else {
            &labels.contract_button_content
        };
        button("toggle", label.as_str())
    });

    let flag = if comment.flagged {
        FlagView::Badge {
            class_name: config.prefix("flagged"),
            label: labels.flagged_content.clone(),
        }
    } else {
        FlagView::Button(button("flag", labels.flag_button_content.as_str()))
    };

    let reply_toggle = if replying {
        button("hide-reply", labels.hide_reply_button_content.as_str())
    } else {
        button("show-reply", labels.show_reply_button_content.as_str())
    };

    let reply_form = replying.then(|| ReplyForm {
        draft: state.reply.draft().unwrap_or_default().to_string(),
        affordance: affordance(config, &labels.post_reply_button_content),
    });

    CommentView {
        id: comment.id.clone(),
        class_names: class_names.into_iter().map(|c| config.prefix(c)).collect(),
        level_class: config.prefix(&format!("level-{}", entry.depth)),
        depth: entry.depth,
        padding_left: config
            .level_padding
            .saturating_mul(u32::try_from(entry.depth).unwrap_or(u32::MAX)),
        body: comment.body_display.clone(),
        user_name: comment.user_name_display.clone(),
        timestamp: comment.timestamp_display.clone(),
        avatar_url: if config.users_have_avatars {
            comment.user_avatar_url.clone()
        } else {
            None
        },
        toggle,
        flag,
        reply_toggle,
        reply_form,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LocalAction;

    fn sample() -> Vec<Comment> {
        let mut root = Comment::new("1", None);
        root.body_display = "root".into();
        root.user_avatar_url = Some("https://a/1.png".into());
        let mut mine = Comment::new("2", Some("1"));
        mine.belongs_to_author = true;
        let mut flagged = Comment::new("3", Some("1"));
        flagged.flagged = true;
        vec![root, mine, flagged, Comment::new("4", Some("2"))]
    }

    fn enabled() -> CommentBoxConfig {
        CommentBoxConfig {
            disabled: false,
            ..CommentBoxConfig::default()
        }
    }

    #[test]
    fn test_loading_before_first_snapshot() {
        let view = CommentBoxView::build(&enabled(), &InteractionState::new(), None);
        assert!(view.is_loading());
        assert!(view.comments().is_empty());
        assert_eq!(
            view.body,
            BodyView::Loading {
                class_name: "cb-loading".into(),
                label: "Loading...".into()
            }
        );
    }

    #[test]
    fn test_comment_rows() {
        let comments = sample();
        let view = CommentBoxView::build(&enabled(), &InteractionState::new(), Some(&comments));
        let rows = view.comments();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "4", "3"]);

        assert_eq!(rows[0].class_names, vec!["cb-comment"]);
        assert_eq!(rows[0].level_class, "cb-level-0");
        assert_eq!(rows[0].toggle.as_ref().unwrap().label, "[-]");
        // Avatars are off by default
        assert!(rows[0].avatar_url.is_none());

        assert_eq!(rows[1].class_names, vec!["cb-comment", "cb-belongs-to-author"]);
        assert_eq!(rows[2].padding_left, 50);
        assert!(rows[2].toggle.is_none());

        assert_eq!(rows[3].class_names, vec!["cb-comment", "cb-flagged"]);
        assert!(matches!(&rows[3].flag, FlagView::Badge { label, .. } if label == "(flagged)"));
        assert!(matches!(&rows[1].flag, FlagView::Button(b) if b.value == "2"));
    }

    #[test]
    fn test_collapsed_row_shows_expand_label() {
        let comments = sample();
        let mut state = InteractionState::new();
        state.apply(LocalAction::ToggleCollapse("2".into())).unwrap();

        let view = CommentBoxView::build(&enabled(), &state, Some(&comments));
        let ids: Vec<&str> = view.comments().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(view.comments()[1].toggle.as_ref().unwrap().label, "[+]");
    }

    #[test]
    fn test_reply_form_only_on_target() {
        let comments = sample();
        let mut state = InteractionState::new();
        state.apply(LocalAction::ShowReply("2".into())).unwrap();
        state.apply(LocalAction::ChangeReply("draft".into())).unwrap();

        let view = CommentBoxView::build(&enabled(), &state, Some(&comments));
        let rows = view.comments();
        assert_eq!(rows.iter().filter(|r| r.reply_form.is_some()).count(), 1);

        let target = &rows[1];
        assert!(target.class_names.contains(&"cb-replying-to".to_string()));
        assert_eq!(target.reply_toggle.class_name, "cb-hide-reply");
        assert_eq!(target.reply_toggle.label, "cancel");
        let form = target.reply_form.as_ref().unwrap();
        assert_eq!(form.draft, "draft");
        assert_eq!(
            form.affordance,
            ComposeAffordance::Submit {
                label: "Post Reply".into()
            }
        );

        assert_eq!(rows[0].reply_toggle.class_name, "cb-show-reply");
    }

    #[test]
    fn test_disabled_replaces_compose_affordances() {
        let comments = sample();
        let config = CommentBoxConfig::default();
        let mut state = InteractionState::new();
        state.apply(LocalAction::ShowReply("1".into())).unwrap();

        let view = CommentBoxView::build(&config, &state, Some(&comments));
        assert_eq!(
            view.header.affordance,
            ComposeAffordance::Replaced(config.disabled_view.clone())
        );
        let form = view.comments()[0].reply_form.as_ref().unwrap();
        assert!(matches!(form.affordance, ComposeAffordance::Replaced(_)));
    }

    #[test]
    fn test_avatars_when_enabled() {
        let comments = sample();
        let config = CommentBoxConfig {
            users_have_avatars: true,
            ..enabled()
        };
        let view = CommentBoxView::build(&config, &InteractionState::new(), Some(&comments));
        assert_eq!(
            view.comments()[0].avatar_url.as_deref(),
            Some("https://a/1.png")
        );
    }
}
