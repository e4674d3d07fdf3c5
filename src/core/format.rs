// File: src/core/format.rs
use crate::core::types::EmojiToken;
use crate::error::FormatError;
use std::iter;

/// Writes each token's cluster over its `start..end` range of `text` and
/// passes everything outside the ranges through unchanged.
///
/// Ranges are code-point indices and must be ascending and non-overlapping.
/// All ranges are checked before anything is written; the first bad range is
/// reported and no partial output is produced. Empty ranges are allowed and
/// insert the cluster at that position.
pub fn format(tokens: &[EmojiToken], text: &str) -> Result<String, FormatError> {
    // Byte offset of every code-point boundary, including the end of the text.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(text.len()))
        .collect();
    let len = offsets.len() - 1;

    let mut previous_end = 0;
    for token in tokens {
        if token.start > token.end {
            return Err(FormatError::Inverted { start: token.start, end: token.end });
        }
        if token.end > len {
            return Err(FormatError::OutOfBounds { end: token.end, len });
        }
        if token.start < previous_end {
            return Err(FormatError::Overlapping { previous_end, start: token.start });
        }
        previous_end = token.end;
    }

    let mut result = String::with_capacity(text.len());
    let mut last = 0;
    for token in tokens {
        result.push_str(&text[offsets[last]..offsets[token.start]]);
        result.push_str(&token.cluster);
        last = token.end;
    }
    result.push_str(&text[offsets[last]..]);
    Ok(result)
}
