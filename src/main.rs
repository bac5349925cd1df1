/*!
# Daybook - A Plain-File Journal

Daybook is a command-line tool for maintaining a journal of one markdown
file per day, each with a fenced frontmatter header carrying tags and a
timestamp. This file contains the main application flow, coordinating the
various components to implement the journal functionality.

## Usage

```text
daybook [--date YYYY-MM-DD] [COMMAND]

Commands:
  open        Open a journal entry in the configured editor (default)
  tag         Append tags to entries selected by file, subject, or date
  index       Write the tag cross-reference index file
  list-tags   List every tag in the journal
  find        Find entries carrying specific tags
  sync        Pull journal changes from the remote
  memorize    Commit and push all journal entries
  image       Copy an image into the journal and link it from an entry
```

## Configuration

The application can be configured with the following environment variables:
- `DAYBOOK_EDITOR` or `EDITOR`: The editor used to open journal entries (defaults to "vim")
- `DAYBOOK_DIR`: The journal root directory (defaults to "~/journal")
*/

use chrono::Local;
use clap::Parser;
use daybook::cli::{CliArgs, Commands};
use daybook::config::Config;
use daybook::editor::SystemEditor;
use daybook::errors::AppResult;
use daybook::git::SystemGit;
use daybook::journal_core::ContextDate;
use daybook::ops;
use daybook::tagging::FsEntryWriter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the daybook application.
///
/// This function coordinates the overall application flow:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and validates configuration
/// 4. Resolves the operative date once, up front
/// 5. Dispatches to the requested command with its collaborators
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - I/O errors (file not found, permission denied, etc.)
/// - Date parse errors (invalid `--date` argument)
/// - Editor and git errors (failed external commands)
#[tokio::main]
async fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let args = CliArgs::parse();
    debug!("CLI arguments: {:?}", args);

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;
    debug!("journal root: {:?}", config.journal_root);

    // Resolve the operative date once and thread it as a value
    let context = ContextDate::from_arg(args.date.as_deref(), Local::now())?;

    match args.command {
        None => {
            let editor = SystemEditor {
                editor_cmd: config.editor.clone(),
            };
            ops::open::open_entry(&config, &editor, context, None)
        }
        Some(Commands::Open { subject }) => {
            let editor = SystemEditor {
                editor_cmd: config.editor.clone(),
            };
            ops::open::open_entry(&config, &editor, context, subject.as_deref())
        }
        Some(Commands::Tag {
            files,
            subjects,
            dates,
            tags,
        }) => {
            ops::tag::tag_entries(
                &config,
                &FsEntryWriter,
                files,
                subjects,
                dates,
                tags,
                context,
            )
            .await
        }
        Some(Commands::Index { output }) => ops::index::write_index(&config, &output).await,
        Some(Commands::ListTags) => {
            ops::list_tags::list_tags(&config, &mut std::io::stdout()).await
        }
        Some(Commands::Find { tags }) => {
            ops::find::find_entries(&config, &tags, &mut std::io::stdout()).await
        }
        Some(Commands::Sync) => ops::sync::sync_journal(&config, &SystemGit),
        Some(Commands::Memorize) => {
            let result = ops::memorize::memorize_journal(&config, &SystemGit);
            if result.is_ok() {
                info!("journal memorized");
            }
            result
        }
        Some(Commands::Image { subject, path }) => {
            ops::image::attach_image(&config, context, subject.as_deref(), &path)
        }
    }
}
