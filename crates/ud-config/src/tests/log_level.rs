use crate::{Config, LogLevel};

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;

#[test]
fn given_known_names_when_parse_then_maps_each_level() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("WARN", LevelFilter::Warn),
        ("Info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        (" trace ", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        assert_that!(*LogLevel::parse_lenient(input), eq(expected));
    }
}

#[test]
fn given_unknown_name_when_parse_then_default_level() {
    let level: LogLevel = "verbose".parse().unwrap();
    assert_that!(level, eq(LogLevel::default()));
}

#[test]
fn given_non_string_level_in_toml_when_deserialize_then_default_level() {
    let config: Config = toml::from_str("[logging]\nlevel = 3").unwrap();
    assert_that!(*config.logging.level, eq(LevelFilter::Warn));
}
