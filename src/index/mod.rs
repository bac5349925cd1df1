//! The tag index.
//!
//! A `TagIndex` maps each tag to the sorted, duplicate-free list of entry
//! keys declaring it. The index is rebuilt from the entry files on every
//! query and never persisted; the directory of files is the durable source
//! of truth.

use crate::errors::AppResult;
use crate::journal_core::entry_key;
use crate::scan::{self, Entry};
use std::collections::BTreeMap;
use std::path::Path;

/// Mapping from tag to the entry keys carrying it.
///
/// Backed by a `BTreeMap`, so tags always iterate in lexicographic order;
/// each tag's key list is sorted and deduplicated at construction, making
/// the index deterministic regardless of filesystem enumeration or worker
/// completion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagIndex {
    map: BTreeMap<String, Vec<String>>,
}

impl TagIndex {
    /// Folds collected entries into a tag index.
    ///
    /// The entry key is the filename with its `.md` suffix stripped. Keys
    /// under each tag are sorted lexicographically and deduplicated.
    pub fn from_entries(entries: &[Entry]) -> Self {
        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in entries {
            let key = entry_key(&entry.filename);
            for tag in &entry.header.tags {
                map.entry(tag.clone()).or_default().push(key.to_string());
            }
        }
        for keys in map.values_mut() {
            keys.sort();
            keys.dedup();
        }
        TagIndex { map }
    }

    /// The tags of the index, in lexicographic order.
    pub fn sorted_tags(&self) -> Vec<&str> {
        self.map.keys().map(String::as_str).collect()
    }

    /// The sorted entry keys declaring `tag`, if any do.
    pub fn entries_for(&self, tag: &str) -> Option<&[String]> {
        self.map.get(tag).map(Vec::as_slice)
    }

    /// Iterates over `(tag, entry keys)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map
            .iter()
            .map(|(tag, keys)| (tag.as_str(), keys.as_slice()))
    }

    /// True when no entry declared any tag.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// Builds the tag index for a journal.
///
/// Lists the entries directory, collects every entry concurrently, and folds
/// the headers into a `TagIndex`. A single unreadable or malformed entry
/// fails the build; there is no partial index.
///
/// # Errors
///
/// Returns `AppError::Io` when the entries directory cannot be listed and
/// `AppError::Batch` when any entry fails to read or decode.
pub async fn build_tag_index(journal_root: &Path) -> AppResult<TagIndex> {
    let files = scan::entry_files(journal_root)?;
    let entries = scan::collect_entries(files).await?;
    Ok(TagIndex::from_entries(&entries))
}
