
use chrono::Local;
use daybook::frontmatter;
use daybook::journal_core::{ContextDate, EntryTarget};
use daybook::tagging::{apply_tags, FsEntryWriter};
use tempfile::tempdir;
use test_helpers::seed_entry;

fn context() -> ContextDate {
    ContextDate::from_arg(Some("2018-08-01"), Local::now()).unwrap()
}

#[tokio::test]
async fn test_apply_existing_tag_is_idempotent() {
    let journal = tempdir().unwrap();
    let path = seed_entry(
        journal.path(),
        "2018-07-01.md",
        "---\ntags:\n- bar\n---\nJuly first.\n",
    );
    let before = std::fs::read_to_string(&path).unwrap();

    apply_tags(
        journal.path(),
        &[EntryTarget::Date(
            chrono::NaiveDate::from_ymd_opt(2018, 7, 1).unwrap(),
        )],
        &["bar".to_string()],
        context(),
        &FsEntryWriter,
    )
    .await
    .unwrap();

    // The tag was already present, so the rewrite is byte-identical
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[tokio::test]
async fn test_apply_tags_rewrites_header_only() {
    let journal = tempdir().unwrap();
    let body = "A body with\n\n---\n\nan hrule inside.\n";
    let path = seed_entry(
        journal.path(),
        "notes.md",
        &format!("---\ntags:\n- old\n---\n{}", body),
    );

    apply_tags(
        journal.path(),
        &[EntryTarget::Subject("notes".to_string())],
        &["new".to_string()],
        context(),
        &FsEntryWriter,
    )
    .await
    .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let (header, decoded_body) = frontmatter::decode(&contents).unwrap();
    assert_eq!(header.tags, vec!["new", "old"]);
    assert_eq!(decoded_body, body);
}

#[tokio::test]
async fn test_apply_tags_across_multiple_targets() {
    let journal = tempdir().unwrap();
    let a = seed_entry(journal.path(), "a.md", "---\ntags:\n- one\n---\n");
    let b = seed_entry(journal.path(), "2018-07-02.md", "---\n---\n");

    apply_tags(
        journal.path(),
        &[
            EntryTarget::File(a.clone()),
            EntryTarget::Date(chrono::NaiveDate::from_ymd_opt(2018, 7, 2).unwrap()),
        ],
        &["shared".to_string()],
        context(),
        &FsEntryWriter,
    )
    .await
    .unwrap();

    let (header_a, _) = frontmatter::decode(&std::fs::read_to_string(&a).unwrap()).unwrap();
    assert_eq!(header_a.tags, vec!["one", "shared"]);

    let (header_b, _) = frontmatter::decode(&std::fs::read_to_string(&b).unwrap()).unwrap();
    assert_eq!(header_b.tags, vec!["shared"]);
}

#[tokio::test]
async fn test_apply_tags_creates_todays_entry_when_unaddressed() {
    let journal = tempdir().unwrap();
    std::fs::create_dir_all(journal.path().join("entries")).unwrap();

    apply_tags(
        journal.path(),
        &[],
        &["daily".to_string()],
        context(),
        &FsEntryWriter,
    )
    .await
    .unwrap();

    let path = journal.path().join("entries/2018-08-01.md");
    let content = std::fs::read_to_string(&path).unwrap();
    let (header, body) = frontmatter::decode(&content).unwrap();
    assert_eq!(header.tags, vec!["daily"]);
    assert!(header.date.is_some());
    assert!(body.is_empty());
}
