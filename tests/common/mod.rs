//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, TimeZone};
use tempfile::NamedTempFile;
use todofmt::{FormattingConfig, Todo, TodoList};

/// The fixed "now" every formatter in the integration tests is built with.
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 1, 10, 0, 0)
        .unwrap()
}

/// Default patterns, pinned to UTC.
pub fn utc_config() -> FormattingConfig {
    FormattingConfig {
        timezone: Some("UTC".to_string()),
        ..Default::default()
    }
}

pub fn list(name: &str) -> Arc<TodoList> {
    Arc::new(TodoList::new(name))
}

pub fn buy_milk() -> Todo {
    Todo::new(1, "Buy milk", list("Home")).with_priority(4)
}

/// Write `contents` to a temporary `.yaml` file that lives as long as the handle.
pub fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
