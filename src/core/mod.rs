// src/core/mod.rs

pub mod engine;
pub mod format;
pub mod set;
pub mod tokenizer;
pub mod tones;
pub mod trie;
pub mod types;
