// src/core/types.rs
use serde::{Deserialize, Serialize};

/// One matched emoji cluster and where it sits in the source text.
/// `start..end` is a half-open range of code-point indices, so
/// `text.chars().skip(start).take(end - start)` yields exactly `cluster`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmojiToken {
    #[serde(rename = "emoji")]
    pub cluster: String,
    pub start: usize,
    pub end: usize,
}

impl EmojiToken {
    pub fn new(cluster: impl Into<String>, start: usize, end: usize) -> Self {
        Self { cluster: cluster.into(), start, end }
    }

    /// Width of the token in code points.
    pub fn len_chars(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// How often a cluster appears in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    #[serde(rename = "emoji")]
    pub cluster: String,
    pub count: usize,
}

/// A row of the generated emoji table.
/// `unicode` lists the code points as `"U+1F44D"` labels, without U+FE0F.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojiRecord {
    pub emoji: String,
    #[serde(default)]
    pub unicode: Vec<String>,
}
