//! Unit tests for the file-backed store.

use crate::{FileStore, KeyValueStore, StorageError};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tempfile::TempDir;

#[tokio::test]
async fn given_missing_root_when_get_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("does-not-exist"));

    let value = store.get("user").await.unwrap();

    assert_that!(value, none());
}

#[tokio::test]
async fn given_missing_root_when_set_then_creates_directory_and_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("storage");
    let store = FileStore::new(&root);

    store.set("user", r#"{"name":"A","email":"a@x"}"#).await.unwrap();

    assert!(root.join("user.json").is_file());
    let on_disk = std::fs::read_to_string(root.join("user.json")).unwrap();
    assert_that!(on_disk.as_str(), eq(r#"{"name":"A","email":"a@x"}"#));
}

#[tokio::test]
async fn given_set_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    store.set("user", "value").await.unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp."))
        .collect();
    assert!(leftovers.is_empty(), "temp files left: {leftovers:?}");
}

#[tokio::test]
async fn given_value_when_new_store_over_same_root_then_reads_it() {
    let temp = TempDir::new().unwrap();
    FileStore::new(temp.path())
        .set("user", "persisted")
        .await
        .unwrap();

    let reopened = FileStore::new(temp.path());
    let value = reopened.get("user").await.unwrap();

    assert_that!(value, some(eq("persisted")));
}

#[tokio::test]
async fn given_existing_value_when_remove_then_get_returns_none() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());
    store.set("user", "value").await.unwrap();

    store.remove("user").await.unwrap();

    assert_that!(store.get("user").await.unwrap(), none());
    assert!(!temp.path().join("user.json").exists());
}

#[tokio::test]
async fn given_absent_key_when_remove_then_ok() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    assert!(store.remove("user").await.is_ok());
}

#[tokio::test]
async fn given_traversal_key_when_set_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    let result = store.set("../escape", "value").await;

    assert!(matches!(result, Err(StorageError::InvalidKey { .. })));
}

#[tokio::test]
async fn given_bad_keys_when_get_then_invalid_key() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    for key in ["", ".hidden", "a/b", "with space"] {
        let result = store.get(key).await;
        assert!(
            matches!(result, Err(StorageError::InvalidKey { .. })),
            "expected InvalidKey for {key:?}"
        );
    }
}

#[tokio::test]
async fn given_root_is_a_file_when_set_then_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("occupied");
    std::fs::write(&root, "not a directory").unwrap();
    let store = FileStore::new(&root);

    let result = store.set("user", "value").await;

    assert!(matches!(result, Err(StorageError::DirCreation { .. })));
}
