pub mod collapse;
pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod reply;
pub mod source;
pub mod state;
pub mod thread;
pub mod view;

// Re-export the host-facing types at crate root for convenience
pub use collapse::CollapseTracker;
pub use config::{CommentBoxConfig, ComposeMode, DisabledView, Labels};
pub use dispatcher::CommentBox;
pub use error::CommentBoxError;
pub use models::Comment;
pub use reply::{ComposeDraft, ReplyState};
pub use source::{CommentSource, MemoryCommentSource};
pub use state::{InteractionState, LocalAction};
pub use thread::{assemble, ThreadEntry};
pub use view::{BodyView, CommentBoxView, CommentView, ComposeAffordance};
