// File: src/core/set.rs
use crate::core::trie::EmojiTrie;
use crate::core::types::EmojiRecord;
use crate::dataset::{parse_records, read_table, table_fingerprint, BUNDLED_TABLE};
use crate::error::DatasetError;
use crate::persistence::load_snapshot;
use once_cell::sync::{Lazy, OnceCell};
use std::path::Path;
use std::sync::Arc;

static BUNDLED: OnceCell<Arc<KnownEmojiSet>> = OnceCell::new();
static BUNDLED_FINGERPRINT: Lazy<String> = Lazy::new(|| table_fingerprint(BUNDLED_TABLE));

/// The immutable set of emoji clusters the tokenizer recognises.
///
/// Built once and then only read, so a single instance can be shared
/// between threads behind an `Arc` without locking. The trie is the only
/// copy of the clusters.
#[derive(Clone, Debug)]
pub struct KnownEmojiSet {
    trie: EmojiTrie,
    len: usize,
    /// Fingerprint of the table this set was compiled from, if any.
    source: Option<String>,
}

impl KnownEmojiSet {
    pub fn from_clusters<I, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = EmojiTrie::new();
        let mut len = 0;
        for cluster in clusters {
            if trie.insert(cluster.as_ref()) {
                len += 1;
            }
        }

        tracing::debug!(clusters = len, trie_nodes = trie.node_count(), "compiled emoji set");
        Self { trie, len, source: None }
    }

    /// Builds the set from generated table rows. Only the `emoji` field is
    /// used; the table is trusted as produced.
    pub fn from_records(records: &[EmojiRecord]) -> Self {
        Self::from_clusters(records.iter().map(|r| r.emoji.as_str()))
    }

    /// Parses a generated table and tags the set with the table's fingerprint.
    pub fn from_table_json(json: &str) -> Result<Self, DatasetError> {
        let records = parse_records(json)?;
        Ok(Self::from_records(&records).with_source(table_fingerprint(json)))
    }

    pub fn from_table_file(path: &Path) -> Result<Self, DatasetError> {
        Self::from_table_json(&read_table(path)?)
    }

    /// The table shipped with the crate, parsed on first use and shared after.
    pub fn bundled() -> Result<Arc<Self>, DatasetError> {
        BUNDLED
            .get_or_try_init(|| {
                tracing::debug!("parsing bundled emoji table");
                Ok::<_, DatasetError>(Arc::new(Self::from_table_json(BUNDLED_TABLE)?))
            })
            .map(Arc::clone)
    }

    /// Loads a compiled snapshot from `path` when it was built from the
    /// bundled table. A missing, unreadable, or stale snapshot falls back to
    /// the bundled table.
    pub fn from_snapshot_or_bundled(path: &Path) -> Result<Arc<Self>, DatasetError> {
        match load_snapshot(path) {
            Ok(set) if set.source() == Some(BUNDLED_FINGERPRINT.as_str()) => Ok(Arc::new(set)),
            Ok(set) => {
                tracing::info!(
                    path = %path.display(),
                    source = set.source().unwrap_or("none"),
                    "snapshot built from another table, using bundled table"
                );
                Self::bundled()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "snapshot unusable, using bundled table");
                Self::bundled()
            }
        }
    }

    pub(crate) fn with_source(mut self, source: String) -> Self {
        self.source = Some(source);
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn contains(&self, cluster: &str) -> bool {
        self.trie.contains(cluster)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn trie(&self) -> &EmojiTrie {
        &self.trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_empty_and_duplicate_clusters() {
        let set = KnownEmojiSet::from_clusters(["🔥", "", "🔥", "👍🏽"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("👍🏽"));
        assert!(!set.contains("👍"));
        assert!(!set.contains(""));
        assert_eq!(set.trie().clusters(), vec!["👍🏽", "🔥"]);
        assert_eq!(set.source(), None);
    }

    #[test]
    fn empty_set() {
        let set = KnownEmojiSet::from_clusters(Vec::<String>::new());
        assert!(set.is_empty());
        assert_eq!(set.trie().longest_prefix("🔥"), None);
    }

    #[test]
    fn table_sets_carry_their_fingerprint() {
        let json = r#"[{"emoji":"🔥","unicode":["U+1F525"]}]"#;
        let set = KnownEmojiSet::from_table_json(json).unwrap();
        assert_eq!(set.source(), Some(table_fingerprint(json).as_str()));
        assert!(set.contains("🔥"));
    }

    #[test]
    fn bundled_is_shared() {
        let a = KnownEmojiSet::bundled().unwrap();
        let b = KnownEmojiSet::bundled().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.len(), 3773);
        assert_eq!(a.source(), Some(BUNDLED_FINGERPRINT.as_str()));
        assert!(a.contains("🔥"));
        assert!(a.contains("\u{2764}\u{FE0F}"));
        // Skin-tone modifiers on their own are components, not emoji.
        assert!(!a.contains("\u{1F3FD}"));
    }

    #[test]
    fn missing_snapshot_falls_back_to_bundled() {
        let set = KnownEmojiSet::from_snapshot_or_bundled(Path::new("/no/such/snapshot.bin")).unwrap();
        assert!(Arc::ptr_eq(&set, &KnownEmojiSet::bundled().unwrap()));
    }
}
