use crate::DirectoryConfig;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};

fn config_with(base_url: &str) -> DirectoryConfig {
    DirectoryConfig {
        base_url: base_url.to_string(),
    }
}

#[test]
fn given_default_when_validate_then_ok() {
    assert_that!(DirectoryConfig::default().validate(), ok(anything()));
}

#[test]
fn given_http_url_when_validate_then_ok() {
    assert_that!(config_with("http://127.0.0.1:8080").validate(), ok(anything()));
}

#[test]
fn given_empty_url_when_validate_then_error() {
    let result = config_with("   ").validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("cannot be empty")
    );
}

#[test]
fn given_url_without_scheme_when_validate_then_error() {
    let result = config_with("jsonplaceholder.typicode.com").validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().to_string(),
        contains_substring("http:// or https://")
    );
}

#[test]
fn given_ftp_url_when_validate_then_error() {
    assert_that!(config_with("ftp://example.com").validate(), err(anything()));
}
