// File: src/core/tokenizer.rs
use crate::core::trie::EmojiTrie;
use crate::core::types::EmojiToken;
use std::iter::FusedIterator;
use std::ops::Range;

/// A matched cluster borrowed from the scanned text, with its position both
/// as a byte range (for slicing the `&str`) and as a code-point range (for
/// `EmojiToken`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'t> {
    pub cluster: &'t str,
    pub bytes: Range<usize>,
    pub chars: Range<usize>,
}

impl Span<'_> {
    pub fn to_token(&self) -> EmojiToken {
        EmojiToken::new(self.cluster, self.chars.start, self.chars.end)
    }
}

/// Lazy left-to-right scan of a text for known clusters.
///
/// At every position the longest known cluster wins; if none starts there the
/// scan moves on by one code point. The scan holds no shared state, so a
/// clone replays exactly the same spans.
#[derive(Debug, Clone)]
pub struct Tokens<'s, 't> {
    trie: &'s EmojiTrie,
    text: &'t str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'s, 't> Tokens<'s, 't> {
    pub fn new(trie: &'s EmojiTrie, text: &'t str) -> Self {
        Self { trie, text, byte_pos: 0, char_pos: 0 }
    }
}

impl<'t> Iterator for Tokens<'_, 't> {
    type Item = Span<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.byte_pos < self.text.len() {
            let rest = &self.text[self.byte_pos..];

            if let Some(len) = self.trie.longest_prefix(rest) {
                let cluster = &rest[..len];
                let width = cluster.chars().count();
                let span = Span {
                    cluster,
                    bytes: self.byte_pos..self.byte_pos + len,
                    chars: self.char_pos..self.char_pos + width,
                };
                self.byte_pos += len;
                self.char_pos += width;
                return Some(span);
            }

            let c = rest.chars().next()?;
            self.byte_pos += c.len_utf8();
            self.char_pos += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.text.len() - self.byte_pos))
    }
}

impl FusedIterator for Tokens<'_, '_> {}
