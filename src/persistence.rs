// File: src/persistence.rs
use crate::core::set::KnownEmojiSet;
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk form of a compiled set. Only the clusters are stored; the trie
/// is rebuilt on load, so no arena index is ever read back from disk.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    source: Option<String>,
    clusters: Vec<String>,
}

/// Writes the compiled set to `path`. The file is written next to its
/// destination and renamed into place, so readers never see a partial file.
pub fn save_snapshot(set: &KnownEmojiSet, path: &Path) -> Result<(), PersistenceError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let snapshot = Snapshot {
        source: set.source().map(str::to_owned),
        clusters: set.trie().clusters(),
    };
    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &snapshot)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::debug!(path = %path.display(), clusters = set.len(), "saved emoji set snapshot");
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<KnownEmojiSet, PersistenceError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: Snapshot = bincode::deserialize_from(reader)?;

    let mut set = KnownEmojiSet::from_clusters(&snapshot.clusters);
    if let Some(source) = snapshot.source {
        set = set.with_source(source);
    }
    tracing::debug!(path = %path.display(), clusters = set.len(), "loaded emoji set snapshot");
    Ok(set)
}
