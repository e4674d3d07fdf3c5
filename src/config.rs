// File: src/config.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_OPEN_TAG: &str = "<emoji>";
pub const DEFAULT_CLOSE_TAG: &str = "</emoji>";

/// Markers placed around each cluster by `annotate_text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationTags {
    pub open: String,
    pub close: String,
}

impl Default for AnnotationTags {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_TAG.to_string(),
            close: DEFAULT_CLOSE_TAG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub annotation: AnnotationTags,
}

impl FormatterConfig {
    /// Parses a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
