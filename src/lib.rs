/*!
# Daybook

Daybook is a plain-file journaling tool: one markdown file per day (or per
free-text subject), each carrying a small fenced frontmatter header (tags,
date) followed by free-form prose. Entries are indexed by tag on demand and
the whole journal is versioned with git.

## Core Features

- Open or create the entry for any date or subject in your editor
- Tag entries by file, subject, or date; headers are rewritten in place
- Build a deterministic tag index by scanning every entry concurrently
- Render a cross-reference index page, list tags, and find entries by tag
- Sync and commit the journal through git

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `frontmatter`: The entry header codec
- `journal_core`: Pure journal logic (paths, keys, dates, tag normalization)
- `scan`: Concurrent entry reading and collection
- `index`: The tag index
- `tagging`: The tag rewriting workflow
- `ops`: One module per user-facing command
- `editor`, `git`: Capability traits for the external collaborators

## Usage Example

```rust,no_run
use daybook::index::build_tag_index;
use daybook::Config;

#[tokio::main]
async fn main() -> daybook::AppResult<()> {
    let config = Config::load()?;
    let index = build_tag_index(&config.journal_root).await?;

    for tag in index.sorted_tags() {
        println!("{}", tag);
    }
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Editor abstraction for opening entries
pub mod editor;
/// Error types and utilities for error handling
pub mod errors;
/// Entry header (frontmatter) codec
pub mod frontmatter;
/// Version-control abstraction
pub mod git;
/// The tag index
pub mod index;
/// Pure journal logic without I/O
pub mod journal_core;
/// Journal workflows, one module per command
pub mod ops;
/// Concurrent entry scanning
pub mod scan;
/// The tag rewriting workflow
pub mod tagging;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::ContextDate;
