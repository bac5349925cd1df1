//! Core journal logic without I/O operations.
//!
//! This module contains pure logic for the journal's on-disk layout and for
//! tag normalization: entry paths and keys, the `EntryTarget` addressing
//! modes used by the tagging workflow, and the operative-date value threaded
//! explicitly through every call that needs "today".

use crate::constants::{
    ATTACHMENTS_SUBDIR, DATE_FORMAT_ISO, ENTRIES_SUBDIR, JOURNAL_FILE_EXTENSION,
};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use std::path::{Path, PathBuf};

/// The operative date of an invocation, resolved once in `main` and passed
/// down as a first-class value.
///
/// `date` names the entry a dateless command acts on; `datetime` is the
/// timestamp stamped into headers of newly created entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextDate {
    /// Calendar date of the invocation.
    pub date: NaiveDate,
    /// Full timestamp of the invocation.
    pub datetime: DateTime<FixedOffset>,
}

impl ContextDate {
    /// Resolves the operative date from an optional `--date` argument.
    ///
    /// Without an argument, the current moment is used. With one, the string
    /// must name a real calendar date in `YYYY-MM-DD` form; the timestamp is
    /// then midnight UTC of that date, matching what gets stamped into a
    /// backdated entry's header.
    ///
    /// # Errors
    ///
    /// Returns `AppError::DateParse` when the argument is present but does
    /// not parse as a valid calendar date.
    ///
    /// # Examples
    ///
    /// ```
    /// use daybook::journal_core::ContextDate;
    /// use chrono::{Datelike, Local};
    ///
    /// let context = ContextDate::from_arg(Some("2018-08-01"), Local::now()).unwrap();
    /// assert_eq!(context.date.year(), 2018);
    ///
    /// assert!(ContextDate::from_arg(Some("2018-02-31"), Local::now()).is_err());
    /// ```
    pub fn from_arg(arg: Option<&str>, now: DateTime<Local>) -> AppResult<Self> {
        match arg {
            Some(input) => {
                let date = parse_entry_date(input)?;
                let datetime = date
                    .and_hms_opt(0, 0, 0)
                    .expect("midnight is always a valid time")
                    .and_utc()
                    .fixed_offset();
                Ok(ContextDate { date, datetime })
            }
            None => Ok(ContextDate {
                date: now.date_naive(),
                datetime: now.fixed_offset(),
            }),
        }
    }
}

/// Parses a user-supplied `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `AppError::DateParse` for anything that is not a real calendar
/// date, including well-shaped impossibilities like `2018-02-31`.
pub fn parse_entry_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT_ISO).map_err(|source| AppError::DateParse {
        input: input.to_string(),
        source,
    })
}

/// The directory holding one file per journal entry.
pub fn entries_dir(journal_root: &Path) -> PathBuf {
    journal_root.join(ENTRIES_SUBDIR)
}

/// The directory holding binary attachments referenced from entries.
pub fn attachments_dir(journal_root: &Path) -> PathBuf {
    journal_root.join(ATTACHMENTS_SUBDIR)
}

/// The path of the entry for a free-text subject.
pub fn entry_path_for_subject(journal_root: &Path, subject: &str) -> PathBuf {
    entries_dir(journal_root).join(format!("{}{}", subject, JOURNAL_FILE_EXTENSION))
}

/// The path of the entry for a calendar date.
pub fn entry_path_for_date(journal_root: &Path, date: NaiveDate) -> PathBuf {
    entry_path_for_subject(journal_root, &date.format(DATE_FORMAT_ISO).to_string())
}

/// Derives an entry's key from its file name: the `.md` suffix is stripped,
/// anything else is kept as-is.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::entry_key;
///
/// assert_eq!(entry_key("2018-08-01.md"), "2018-08-01");
/// assert_eq!(entry_key("reading-list.md"), "reading-list");
/// ```
pub fn entry_key(filename: &str) -> &str {
    filename
        .strip_suffix(JOURNAL_FILE_EXTENSION)
        .unwrap_or(filename)
}

/// One target of the tagging workflow, in one of its three addressing modes.
///
/// An explicit file path is used verbatim; a subject or date is resolved to
/// a path under the journal's entries directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryTarget {
    /// An explicit path to an entry file.
    File(PathBuf),
    /// A subject-style logical entry name.
    Subject(String),
    /// A calendar-date entry.
    Date(NaiveDate),
}

impl EntryTarget {
    /// Resolves this target to the concrete file path it addresses.
    pub fn resolve(&self, journal_root: &Path) -> PathBuf {
        match self {
            EntryTarget::File(path) => path.clone(),
            EntryTarget::Subject(subject) => entry_path_for_subject(journal_root, subject),
            EntryTarget::Date(date) => entry_path_for_date(journal_root, *date),
        }
    }
}

/// Deduplicates and sorts a tag list.
///
/// The result is independent of input order and idempotent:
/// `dedupe_and_sort(dedupe_and_sort(t)) == dedupe_and_sort(t)`.
///
/// # Examples
///
/// ```
/// use daybook::journal_core::dedupe_and_sort;
///
/// let tags = vec!["b".to_string(), "a".to_string(), "b".to_string()];
/// assert_eq!(dedupe_and_sort(tags), vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn dedupe_and_sort(mut tags: Vec<String>) -> Vec<String> {
    tags.sort();
    tags.dedup();
    tags
}
