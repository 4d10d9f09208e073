use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commentbox_cli::cli::{init_tracing, load_config, run, CliCommand, RunOptions};

#[derive(Parser)]
#[command(name = "commentbox")]
#[command(about = "Threaded comments over a JSON file")]
struct Cli {
    /// JSON file holding the comment thread
    #[arg(long, short = 's', default_value = "comments.json")]
    store: PathBuf,

    /// Path to JSON config file (labels, class prefix, level padding)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Post as this user; without it posting is disabled
    #[arg(long, short = 'u')]
    user: Option<String>,

    /// Show this comment collapsed (can be specified multiple times)
    #[arg(long)]
    collapse: Vec<String>,

    /// Open the reply box under this comment
    #[arg(long)]
    reply_to: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the thread
    Show,

    /// Post a top-level comment
    Comment {
        /// Comment text
        body: String,
    },

    /// Reply to a comment
    Reply {
        /// Comment being replied to
        parent_id: String,
        /// Reply text
        body: String,
    },

    /// Upvote a comment
    Upvote { comment_id: String },

    /// Downvote a comment
    Downvote { comment_id: String },

    /// Flag a comment for moderation
    Flag { comment_id: String },
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let command = match cli.command {
        None | Some(Commands::Show) => CliCommand::Show,
        Some(Commands::Comment { body }) => CliCommand::Comment { body },
        Some(Commands::Reply { parent_id, body }) => CliCommand::Reply { parent_id, body },
        Some(Commands::Upvote { comment_id }) => CliCommand::UpVote { comment_id },
        Some(Commands::Downvote { comment_id }) => CliCommand::DownVote { comment_id },
        Some(Commands::Flag { comment_id }) => CliCommand::Flag { comment_id },
    };

    let options = RunOptions {
        store: cli.store,
        config,
        user: cli.user,
        collapse: cli.collapse,
        reply_to: cli.reply_to,
    };

    match run(options, command).await {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
