// File: src/dataset.rs
use crate::core::types::EmojiRecord;
use crate::error::DatasetError;
use std::fs;
use std::path::Path;

/// The generated table shipped with the crate (fully-qualified entries of
/// emoji-test.txt, Emoji 15.1).
pub const BUNDLED_TABLE: &str = include_str!("../data/emoji.json");

pub fn parse_records(json: &str) -> Result<Vec<EmojiRecord>, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_table(path: &Path) -> Result<String, DatasetError> {
    Ok(fs::read_to_string(path)?)
}

/// Content hash of a table, used to tell which table a snapshot came from.
pub fn table_fingerprint(json: &str) -> String {
    blake3::hash(json.as_bytes()).to_hex().to_string()
}
