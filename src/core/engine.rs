use crate::config::FormatterConfig;
use crate::core::format::format;
use crate::core::set::KnownEmojiSet;
use crate::core::tokenizer::{Span, Tokens};
use crate::core::tones::normalize_skin_tones;
use crate::core::types::{EmojiToken, FrequencyEntry};
use crate::error::{DatasetError, FormatError};
use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

/// Every text operation, driven by one tokenizer over an injected set.
///
/// Holds only read-only state, so one formatter can serve many threads.
#[derive(Debug, Clone)]
pub struct EmojiFormatter {
    set: Arc<KnownEmojiSet>,
    config: FormatterConfig,
}

impl EmojiFormatter {
    pub fn new(set: Arc<KnownEmojiSet>) -> Self {
        Self::with_config(set, FormatterConfig::default())
    }

    pub fn with_config(set: Arc<KnownEmojiSet>, config: FormatterConfig) -> Self {
        Self { set, config }
    }

    /// A formatter over the table shipped with the crate.
    pub fn bundled() -> Result<Self, DatasetError> {
        Ok(Self::new(KnownEmojiSet::bundled()?))
    }

    pub fn known_set(&self) -> &KnownEmojiSet {
        &self.set
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Lazy form of [`extract_emoji`](Self::extract_emoji).
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'_, 't> {
        Tokens::new(self.set.trie(), text)
    }

    pub fn extract_emoji(&self, text: &str) -> Vec<EmojiToken> {
        self.tokens(text).map(|span| span.to_token()).collect()
    }

    pub fn remove_from_text(&self, text: &str) -> String {
        self.rewrite(text, |_, _| {})
    }

    pub fn strip_all_but_emojis(&self, text: &str) -> String {
        self.tokens(text).map(|span| span.cluster).collect()
    }

    /// Code points left once every emoji is removed.
    pub fn text_length(&self, text: &str) -> usize {
        let emoji_chars: usize = self.tokens(text).map(|span| span.chars.len()).sum();
        text.chars().count() - emoji_chars
    }

    /// Code points in the whole text, each emoji counting as many as it spans.
    pub fn length_with_emojis(&self, text: &str) -> usize {
        text.chars().count()
    }

    pub fn has_emoji(&self, text: &str) -> bool {
        self.tokens(text).next().is_some()
    }

    /// True when the tokens cover the whole text. Whitespace is not emoji, so
    /// `"😊 👍"` is false. The empty string has nothing left after removal and
    /// counts as true.
    pub fn is_only_emoji(&self, text: &str) -> bool {
        let mut covered = 0;
        for span in self.tokens(text) {
            if span.bytes.start != covered {
                return false;
            }
            covered = span.bytes.end;
        }
        covered == text.len()
    }

    pub fn get_first_emoji<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.tokens(text).next().map(|span| span.cluster)
    }

    pub fn only_emojis<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.tokens(text).map(|span| span.cluster).collect()
    }

    pub fn count_unique(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for span in self.tokens(text) {
            *counts.entry(span.cluster.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Counts per cluster, highest first. Equal counts keep the order in which
    /// the clusters first appear in `text`.
    pub fn emoji_frequency_sorted(&self, text: &str) -> Vec<FrequencyEntry> {
        // 1. Count in first-appearance order
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for span in self.tokens(text) {
            match positions.get(span.cluster) {
                Some(&i) => entries[i].count += 1,
                None => {
                    positions.insert(span.cluster, entries.len());
                    entries.push(FrequencyEntry { cluster: span.cluster.to_string(), count: 1 });
                }
            }
        }

        // 2. Stable sort, so ties stay in appearance order
        entries.sort_by_key(|entry| Reverse(entry.count));
        entries
    }

    /// Keeps the first occurrence of each cluster and deletes later repeats.
    /// Text between emoji is never touched.
    pub fn remove_duplicates(&self, text: &str) -> String {
        let mut seen = HashSet::new();
        self.rewrite(text, |out, cluster| {
            if seen.insert(cluster) {
                out.push_str(cluster);
            }
        })
    }

    /// Tokens whose cluster is in `allowed`. Offsets still refer to `text`.
    pub fn filter_by_emoji_set<S>(&self, text: &str, allowed: &HashSet<S>) -> Vec<EmojiToken>
    where
        S: Borrow<str> + Hash + Eq,
    {
        self.tokens(text)
            .filter(|span| allowed.contains(span.cluster))
            .map(|span| span.to_token())
            .collect()
    }

    pub fn format(&self, tokens: &[EmojiToken], text: &str) -> Result<String, FormatError> {
        format(tokens, text)
    }

    pub fn normalize_skin_tones(&self, emoji: &str) -> String {
        normalize_skin_tones(emoji)
    }

    pub fn replace_emojis<F, R>(&self, text: &str, mut replacer: F) -> String
    where
        F: FnMut(&str) -> R,
        R: AsRef<str>,
    {
        self.rewrite(text, |out, cluster| out.push_str(replacer(cluster).as_ref()))
    }

    /// Wraps each cluster in the configured tags, `<emoji>…</emoji>` by default.
    pub fn annotate_text(&self, text: &str) -> String {
        let tags = &self.config.annotation;
        self.rewrite(text, |out, cluster| {
            out.push_str(&tags.open);
            out.push_str(cluster);
            out.push_str(&tags.close);
        })
    }

    /// Copies the non-emoji parts of `text` and lets `on_emoji` decide what
    /// goes where each cluster was.
    fn rewrite<'t, F>(&self, text: &'t str, mut on_emoji: F) -> String
    where
        F: FnMut(&mut String, &'t str),
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for Span { cluster, bytes, .. } in self.tokens(text) {
            out.push_str(&text[last..bytes.start]);
            on_emoji(&mut out, cluster);
            last = bytes.end;
        }
        out.push_str(&text[last..]);
        out
    }
}
