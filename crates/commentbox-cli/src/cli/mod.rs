pub mod app;
pub mod config;
pub mod render;
pub mod store;
pub mod tracing_setup;

pub use app::{run, CliCommand, RunOptions};
pub use config::load_config;
pub use render::render_text;
pub use store::{FileCommentSource, StoredComment};
pub use tracing_setup::init_tracing;
