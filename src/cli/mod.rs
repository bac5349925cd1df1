//! Command-line interface for the daybook application.
//!
//! Argument parsing uses clap's derive API. The optional top-level `--date`
//! argument selects the operative date; it is parsed once in `main` and
//! threaded through the commands as a value.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A plain-file journal with tag indexing.
#[derive(Parser, Debug)]
#[command(name = "daybook", about = "A plain-file journal with tag indexing")]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Date of the entry to operate on (format: YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The daybook subcommands. Running with no subcommand opens today's entry.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a journal entry in the configured editor
    Open {
        /// Open a subject entry instead of the dated entry
        #[arg(short, long)]
        subject: Option<String>,
    },

    /// Append tags to entries selected by file, subject, or date
    Tag {
        /// File path of an entry to tag
        #[arg(short = 'f', long = "file")]
        files: Vec<PathBuf>,

        /// Subject entry to tag
        #[arg(short = 's', long = "subject")]
        subjects: Vec<String>,

        /// Date (YYYY-MM-DD) of an entry to tag
        #[arg(short = 'd', long = "date")]
        dates: Vec<String>,

        /// Tag to append to the selected entries
        #[arg(short = 't', long = "tag")]
        tags: Vec<String>,
    },

    /// Write the tag cross-reference index file
    Index {
        /// Output filename, contained to the journal root
        #[arg(short, long, default_value = "Index.md")]
        output: String,
    },

    /// List every tag in the journal
    ListTags,

    /// Find entries carrying specific tags
    Find {
        /// Tag to search for
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Pull journal changes from the remote
    Sync,

    /// Commit and push all journal entries
    Memorize,

    /// Copy an image into the journal and link it from an entry
    Image {
        /// Attach to a subject entry instead of the dated entry
        #[arg(short, long)]
        subject: Option<String>,

        /// Path of the image file to copy in
        path: PathBuf,
    },
}
