//! Common test fixtures
//!
//! Provides shared raw inputs for the integration tests and a helper that
//! writes CSV text to a temporary file.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;

pub fn sample_data_with_headers() -> Vec<Vec<&'static str>> {
    vec![
        vec!["a", "b", "c", "d", "e"],
        vec!["1", "2", "3", "4", "5"],
        vec!["3", "5", "2", "2", "4"],
        vec!["7", "6", "1", "3", "3"],
        vec!["4", "2", "4", "7", "6"],
    ]
}

pub fn sample_data_without_headers() -> Vec<Vec<&'static str>> {
    vec![
        vec!["1", "2", "3", "4", "5"],
        vec!["3", "5", "2", "2", "4"],
        vec!["7", "6", "1", "3", "3"],
        vec!["4", "2", "4", "7", "6"],
    ]
}

pub fn sample_data_with_categorical_data() -> Vec<Vec<&'static str>> {
    vec![
        vec!["a", "b", "c", "d", "e"],
        vec!["1", "2", "3", "a", "5"],
        vec!["3", "5", "2", "b", "4"],
        vec!["7", "6", "1", "b", "3"],
        vec!["4", "2", "4", "a", "6"],
    ]
}

pub fn sample_data_with_mixed_headers() -> Vec<Vec<&'static str>> {
    vec![
        vec!["1", "2", "c", "3", "e"],
        vec!["1", "2", "3", "4", "5"],
        vec!["3", "5", "2", "2", "4"],
        vec!["7", "6", "1", "3", "3"],
        vec!["4", "2", "4", "7", "6"],
    ]
}

/// Header row followed by the four sample rows repeated four times
pub fn larger_sample_data() -> Vec<Vec<&'static str>> {
    let mut rows = sample_data_with_headers();
    let body: Vec<Vec<&'static str>> = rows[1..].to_vec();
    for _ in 0..3 {
        rows.extend(body.iter().cloned());
    }
    rows
}

/// Write CSV text to a temporary file, deleted when the handle drops
pub fn create_test_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create test CSV");
    file.write_all(content.as_bytes())
        .expect("Failed to write test CSV");
    file.flush().expect("Failed to flush test CSV");
    file
}
