//! File-backed store behaviour across separate connections

use snippets::storage::SnippetStore;
use snippets::Error;
use tempfile::TempDir;

fn db_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("snippets.db")
}

#[test]
fn snippets_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = SnippetStore::open(&db_path(&dir)).unwrap();
    store.put("foo", "bar").unwrap();
    store.close().unwrap();

    let mut reopened = SnippetStore::open(&db_path(&dir)).unwrap();
    assert_eq!(reopened.get("foo").unwrap().as_deref(), Some("bar"));
    assert_eq!(reopened.catalog().unwrap(), vec!["foo"]);
}

#[test]
fn upsert_across_invocations_keeps_one_row() {
    let dir = tempfile::tempdir().unwrap();

    for content in ["A", "B"] {
        let mut store = SnippetStore::open(&db_path(&dir)).unwrap();
        store.put("name", content).unwrap();
        store.close().unwrap();
    }

    let mut store = SnippetStore::open(&db_path(&dir)).unwrap();
    assert_eq!(store.count().unwrap(), 1);
    assert_eq!(store.get("name").unwrap().as_deref(), Some("B"));
}

#[test]
fn reads_do_not_hold_a_transaction_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut reader = SnippetStore::open(&db_path(&dir)).unwrap();
    let mut writer = SnippetStore::open(&db_path(&dir)).unwrap();

    assert!(reader.catalog().unwrap().is_empty());
    assert_eq!(reader.get("missing-name").unwrap(), None);

    // A lingering read transaction on `reader` would block this write.
    writer.put("after-read", "ok").unwrap();
    assert_eq!(reader.catalog().unwrap(), vec!["after-read"]);
}

#[test]
fn full_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = SnippetStore::open(&db_path(&dir)).unwrap();

    store.put("a", "foobar").unwrap();
    store.put("b", "barfoo").unwrap();
    store.put("c", "baz").unwrap();

    let mut found = store.search("%foo%").unwrap();
    found.sort();
    assert_eq!(found, vec!["a", "b"]);
    assert_eq!(store.get_name("baz").unwrap().as_deref(), Some("c"));
    assert_eq!(store.catalog().unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn unopenable_path_is_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing_parent = dir.path().join("no-such-dir").join("snippets.db");

    let err = SnippetStore::open(&missing_parent).err().unwrap();
    assert!(matches!(err, Error::Connection { .. }));
}

#[test]
fn non_database_file_is_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(db_path(&dir), vec![b'x'; 4096]).unwrap();

    let err = SnippetStore::open(&db_path(&dir)).err().unwrap();
    match err {
        Error::Connection { path, .. } => assert_eq!(path, db_path(&dir)),
        other => panic!("expected connection error, got {other:?}"),
    }
}
