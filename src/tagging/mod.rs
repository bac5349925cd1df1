//! The tag rewriting workflow.
//!
//! `apply_tags` merges new tags into one or more entries' headers and writes
//! the result back to disk, body untouched. Reads are fanned out through the
//! concurrent collector; writes happen sequentially after every read has
//! completed, through an injected `EntryWriter` so tests can observe writes
//! without touching a filesystem.
//!
//! The write phase is deliberately non-transactional: a failure aborts the
//! remainder of the batch, but files already rewritten stay rewritten. This
//! differs from the index build's all-or-nothing read contract on purpose.

use crate::errors::AppResult;
use crate::frontmatter::{self, Header};
use crate::journal_core::{
    dedupe_and_sort, entry_path_for_date, ContextDate, EntryTarget,
};
use crate::scan;
use std::fs;
use std::path::Path;

/// Capability for persisting a rewritten entry.
///
/// The tag rewriter performs all of its writes through this trait, injected
/// by construction, so the workflow can be exercised with a test double.
///
/// # Examples
///
/// ```
/// use daybook::tagging::EntryWriter;
/// use daybook::errors::AppResult;
/// use std::path::Path;
///
/// struct NullWriter;
///
/// impl EntryWriter for NullWriter {
///     fn write_entry(&self, _path: &Path, _contents: &str) -> AppResult<()> {
///         Ok(())
///     }
/// }
/// ```
pub trait EntryWriter {
    /// Writes the serialized entry to `path`, replacing any previous content.
    fn write_entry(&self, path: &Path, contents: &str) -> AppResult<()>;
}

/// The production `EntryWriter`, writing through the filesystem.
pub struct FsEntryWriter;

impl EntryWriter for FsEntryWriter {
    fn write_entry(&self, path: &Path, contents: &str) -> AppResult<()> {
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Merges `new_tags` into every targeted entry and persists the results.
///
/// Each target resolves to a path under the journal's entries directory (or
/// is used verbatim for explicit file paths). When `targets` is empty, the
/// operative date's entry is used instead, created with a canonical header
/// if it does not exist yet — the same shape the open workflow writes.
///
/// All targets are read concurrently; merging and writing then proceed
/// sequentially in the (non-deterministic) completion order of the reads.
/// Tags are merged with a dedupe-and-sort step, so applying an already
/// present tag is a no-op for that entry's tag set. The body is passed
/// through unmodified and the entry is written back to the same path it was
/// read from.
///
/// Callers must not pass duplicate resolved paths: each read result attempts
/// its own write.
///
/// # Errors
///
/// Returns `AppError::Batch` when any read fails (no write happens in that
/// case), and the first write error otherwise (earlier writes are not rolled
/// back).
pub async fn apply_tags(
    journal_root: &Path,
    targets: &[EntryTarget],
    new_tags: &[String],
    context: ContextDate,
    writer: &dyn EntryWriter,
) -> AppResult<()> {
    let mut paths: Vec<_> = targets
        .iter()
        .map(|target| target.resolve(journal_root))
        .collect();

    if paths.is_empty() {
        let fallback = entry_path_for_date(journal_root, context.date);
        if !fallback.exists() {
            let header = Header {
                tags: Vec::new(),
                date: Some(context.datetime),
            };
            writer.write_entry(&fallback, &frontmatter::encode(&header, ""))?;
        }
        paths.push(fallback);
    }

    let entries = scan::collect_entries(paths).await?;

    for entry in entries {
        let mut header = entry.header;
        let mut tags = header.tags;
        tags.extend(new_tags.iter().cloned());
        header.tags = dedupe_and_sort(tags);

        writer.write_entry(&entry.filepath, &frontmatter::encode(&header, &entry.body))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use chrono::Local;
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Records writes instead of performing them, optionally failing on a
    /// chosen path.
    struct RecordingWriter {
        writes: RefCell<Vec<(PathBuf, String)>>,
        fail_on: Option<PathBuf>,
    }

    impl RecordingWriter {
        fn new() -> Self {
            RecordingWriter {
                writes: RefCell::new(Vec::new()),
                fail_on: None,
            }
        }
    }

    impl EntryWriter for RecordingWriter {
        fn write_entry(&self, path: &Path, contents: &str) -> AppResult<()> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(AppError::Journal("injected write failure".to_string()));
            }
            self.writes
                .borrow_mut()
                .push((path.to_path_buf(), contents.to_string()));
            Ok(())
        }
    }

    fn context() -> ContextDate {
        ContextDate::from_arg(Some("2018-08-01"), Local::now()).unwrap()
    }

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let entries = dir.join("entries");
        fs::create_dir_all(&entries).unwrap();
        let path = entries.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn test_apply_tags_merges_and_sorts() {
        let temp_dir = tempdir().unwrap();
        let path = write_file(
            temp_dir.path(),
            "2018-07-01.md",
            "---\ntags:\n- foo\n---\nbody\n",
        );

        let writer = RecordingWriter::new();
        let targets = vec![EntryTarget::File(path.clone())];
        let tags = vec!["bar".to_string(), "alpha".to_string()];

        apply_tags(temp_dir.path(), &targets, &tags, context(), &writer)
            .await
            .unwrap();

        let writes = writer.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].0, path);
        assert_eq!(
            writes[0].1,
            "---\ntags:\n- alpha\n- bar\n- foo\n---\nbody\n"
        );
    }

    #[tokio::test]
    async fn test_apply_tags_existing_tag_is_not_duplicated() {
        let temp_dir = tempdir().unwrap();
        let path = write_file(
            temp_dir.path(),
            "2018-07-01.md",
            "---\ntags:\n- bar\n---\nkept body\n",
        );

        let writer = RecordingWriter::new();
        let targets = vec![EntryTarget::File(path)];
        let tags = vec!["bar".to_string()];

        apply_tags(temp_dir.path(), &targets, &tags, context(), &writer)
            .await
            .unwrap();

        let writes = writer.writes.borrow();
        assert_eq!(writes[0].1, "---\ntags:\n- bar\n---\nkept body\n");
    }

    #[tokio::test]
    async fn test_apply_tags_preserves_body() {
        let temp_dir = tempdir().unwrap();
        let body = "multi\nline\n\nbody with --- inside\n";
        let raw = format!("---\ntags:\n- a\n---\n{}", body);
        let path = write_file(temp_dir.path(), "subject.md", &raw);

        let writer = RecordingWriter::new();
        let targets = vec![EntryTarget::Subject("subject".to_string())];

        apply_tags(
            temp_dir.path(),
            &targets,
            &["b".to_string()],
            context(),
            &writer,
        )
        .await
        .unwrap();

        let writes = writer.writes.borrow();
        assert_eq!(writes[0].0, path);
        assert!(writes[0].1.ends_with(body));
    }

    #[tokio::test]
    async fn test_apply_tags_no_targets_creates_todays_entry() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("entries")).unwrap();

        // The fallback placeholder must land on disk before it is read back
        struct FsBackedRecorder {
            written: RefCell<Vec<PathBuf>>,
        }
        impl EntryWriter for FsBackedRecorder {
            fn write_entry(&self, path: &Path, contents: &str) -> AppResult<()> {
                fs::write(path, contents)?;
                self.written.borrow_mut().push(path.to_path_buf());
                Ok(())
            }
        }

        let writer = FsBackedRecorder {
            written: RefCell::new(Vec::new()),
        };

        apply_tags(
            temp_dir.path(),
            &[],
            &["daily".to_string()],
            context(),
            &writer,
        )
        .await
        .unwrap();

        let expected = temp_dir.path().join("entries/2018-08-01.md");
        let written = writer.written.borrow();
        assert!(written.contains(&expected));

        let contents = fs::read_to_string(&expected).unwrap();
        let (header, body) = frontmatter::decode(&contents).unwrap();
        assert_eq!(header.tags, vec!["daily"]);
        assert!(header.date.is_some());
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_apply_tags_read_failure_aborts_before_writes() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("entries")).unwrap();
        let good = write_file(temp_dir.path(), "good.md", "---\ntags:\n- a\n---\n");

        let writer = RecordingWriter::new();
        let targets = vec![
            EntryTarget::File(good),
            EntryTarget::Subject("missing".to_string()),
        ];

        let result = apply_tags(
            temp_dir.path(),
            &targets,
            &["t".to_string()],
            context(),
            &writer,
        )
        .await;

        match result {
            Err(AppError::Batch(_)) => {}
            other => panic!("Expected Batch error, got {:?}", other),
        }
        assert!(
            writer.writes.borrow().is_empty(),
            "no write may happen when any read fails"
        );
    }

    #[tokio::test]
    async fn test_apply_tags_write_failure_keeps_earlier_writes() {
        let temp_dir = tempdir().unwrap();
        let keep = write_file(temp_dir.path(), "keep.md", "---\ntags:\n- a\n---\n");
        let fail = write_file(temp_dir.path(), "fail.md", "---\ntags:\n- a\n---\n");

        let writer = RecordingWriter {
            writes: RefCell::new(Vec::new()),
            fail_on: Some(fail.clone()),
        };
        let targets = vec![EntryTarget::File(keep), EntryTarget::File(fail)];

        let result = apply_tags(
            temp_dir.path(),
            &targets,
            &["t".to_string()],
            context(),
            &writer,
        )
        .await;

        assert!(result.is_err());
        // Completion order decides whether keep.md was written before the
        // failure; what must hold is that no write happened after it.
        assert!(writer.writes.borrow().len() <= 1);
    }
}
