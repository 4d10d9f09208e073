use commentbox_core::view::{FlagView, ReplyForm};
use commentbox_core::{BodyView, CommentBoxView, ComposeAffordance};

/// Columns of indentation per nesting level in terminal output
const INDENT_WIDTH: usize = 4;

/// Render the view as indented plain text
pub fn render_text(view: &CommentBoxView) -> String {
    let mut out = String::new();

    match &view.header.affordance {
        ComposeAffordance::Submit { label } => out.push_str(&format!("[{}]\n", label)),
        ComposeAffordance::Replaced(disabled) => {
            out.push_str(&format!("{}\n", disabled.message))
        }
    }
    out.push('\n');

    let comments = match &view.body {
        BodyView::Loading { label, .. } => {
            out.push_str(label);
            out.push('\n');
            return out;
        }
        BodyView::Comments(comments) => comments,
    };

    for comment in comments {
        let indent = " ".repeat(comment.depth * INDENT_WIDTH);

        let mut header = indent.clone();
        if let Some(toggle) = &comment.toggle {
            header.push_str(&toggle.label);
            header.push(' ');
        }
        header.push_str(&comment.user_name);
        if !comment.timestamp.is_empty() {
            header.push_str(" · ");
            header.push_str(&comment.timestamp);
        }
        if let FlagView::Badge { label, .. } = &comment.flag {
            header.push(' ');
            header.push_str(label);
        }
        header.push_str(&format!("  #{}", comment.id));
        out.push_str(&header);
        out.push('\n');

        for line in comment.body.lines() {
            out.push_str(&format!("{}  {}\n", indent, line));
        }

        if let Some(form) = &comment.reply_form {
            render_reply_form(&mut out, &indent, form);
        }
    }

    out
}

fn render_reply_form(out: &mut String, indent: &str, form: &ReplyForm) {
    out.push_str(&format!("{}  > {}\n", indent, form.draft));
    match &form.affordance {
        ComposeAffordance::Submit { label } => out.push_str(&format!("{}  [{}]\n", indent, label)),
        ComposeAffordance::Replaced(disabled) => {
            out.push_str(&format!("{}  {}\n", indent, disabled.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentbox_core::{Comment, CommentBoxConfig, InteractionState, LocalAction};

    fn comment(id: &str, parent: Option<&str>, body: &str) -> Comment {
        let mut c = Comment::new(id, parent);
        c.body_display = body.to_string();
        c.user_name_display = format!("user{}", id);
        c
    }

    #[test]
    fn test_render_loading() {
        let view = CommentBoxView::build(&CommentBoxConfig::default(), &InteractionState::new(), None);
        let text = render_text(&view);
        assert!(text.ends_with("Loading...\n"));
    }

    #[test]
    fn test_render_indents_by_depth() {
        let config = CommentBoxConfig {
            disabled: false,
            ..CommentBoxConfig::default()
        };
        let comments = vec![comment("1", None, "root"), comment("2", Some("1"), "child")];
        let view = CommentBoxView::build(&config, &InteractionState::new(), Some(&comments));
        let text = render_text(&view);

        assert!(text.starts_with("[Post Comment]\n"));
        assert!(text.contains("[-] user1  #1\n  root\n"));
        assert!(text.contains("    user2  #2\n      child\n"));
    }

    #[test]
    fn test_render_reply_form_when_disabled() {
        let config = CommentBoxConfig::default();
        let mut state = InteractionState::new();
        state.apply(LocalAction::ShowReply("1".into())).unwrap();
        state.apply(LocalAction::ChangeReply("hi".into())).unwrap();

        let comments = vec![comment("1", None, "root")];
        let view = CommentBoxView::build(&config, &state, Some(&comments));
        let text = render_text(&view);

        assert!(text.contains("  > hi\n"));
        assert!(text.contains(&format!("  {}\n", config.disabled_view.message)));
    }
}
