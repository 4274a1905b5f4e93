//! Unit tests for storage errors.

use crate::StorageError;

use std::path::PathBuf;

fn io_error() -> std::io::Error {
    std::io::Error::other("test")
}

#[test]
fn given_any_error_when_recovery_hint_then_returns_non_empty_string() {
    let errors = vec![
        StorageError::invalid_key("", "empty"),
        StorageError::dir_creation(PathBuf::from("/test"), io_error()),
        StorageError::file_read(PathBuf::from("/test"), io_error()),
        StorageError::file_write(PathBuf::from("/test"), io_error()),
        StorageError::file_remove(PathBuf::from("/test"), io_error()),
        StorageError::atomic_rename(PathBuf::from("/from"), PathBuf::from("/to"), io_error()),
        StorageError::unavailable("down"),
    ];

    for err in errors {
        let hint = err.recovery_hint();
        assert!(
            !hint.is_empty(),
            "recovery_hint should not be empty for {err:?}"
        );
    }
}

#[test]
fn given_file_write_error_when_display_then_includes_path() {
    let err = StorageError::file_write(PathBuf::from("/data/user.json"), io_error());
    assert!(err.to_string().contains("/data/user.json"));
}
