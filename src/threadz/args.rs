use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "threadz", version)]
#[command(about = "Nested comment threads with stars, stored locally", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $THREADZ_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Post a new top-level comment
    #[command(alias = "c")]
    Post {
        /// Comment text (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Reply to a comment
    #[command(alias = "r")]
    Reply {
        /// Id of the comment to reply to (e.g. 1 or 1.2)
        id: String,

        /// Reply text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete comments together with their replies
    #[command(alias = "rm")]
    Delete {
        /// Ids of the comments (e.g. 1 2.1)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Toggle the star on comments
    #[command(alias = "s")]
    Star {
        /// Ids of the comments (e.g. 1 2.1)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// List all threads
    #[command(alias = "ls")]
    List {
        /// Only show starred comments
        #[arg(long)]
        starred: bool,

        /// Show when each comment was posted
        #[arg(short, long, conflicts_with = "no_timestamps")]
        timestamps: bool,

        /// Hide timestamps even if enabled in config
        #[arg(long)]
        no_timestamps: bool,
    },

    /// View a comment and its replies
    #[command(alias = "v")]
    View {
        /// Id of the comment
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., show-timestamps)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store (optional utility)
    Init,
}
