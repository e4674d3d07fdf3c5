// src/lib.rs

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod persistence;

pub use crate::config::FormatterConfig;
pub use crate::core::engine::EmojiFormatter;
pub use crate::core::set::KnownEmojiSet;
pub use crate::core::types::{EmojiRecord, EmojiToken, FrequencyEntry};
pub use crate::error::{DatasetError, FormatError, PersistenceError};
