//! In-memory cache of compiled sound files.
//!
//! Keyed by absolute path and validated by modification time. Every write
//! replaces a whole slot, so concurrent readers observe either a complete
//! entry or nothing.

use dashmap::DashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::SystemTime;

/// One compiled audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCacheEntry {
    /// Slash-separated path relative to the sound directory.
    pub relative_path: String,
    /// Modification time observed when the entry was compiled.
    pub modified_at: Option<SystemTime>,
    /// `data:audio/...;base64,...` URL.
    pub content: String,
    pub symbol_id: String,
}

impl AssetCacheEntry {
    /// Whether this entry is still valid for a file with the given mtime.
    #[inline]
    pub fn is_fresh(&self, modified_at: Option<SystemTime>) -> bool {
        self.modified_at.is_some() && self.modified_at == modified_at
    }
}

#[derive(Debug, Clone)]
struct Slot {
    entry: Arc<AssetCacheEntry>,
    /// Compilation pass that last saw this path.
    seen: u64,
}

/// Process-lifetime cache owned by one compiler instance.
#[derive(Debug, Default)]
pub struct AssetCache {
    slots: DashMap<PathBuf, Slot>,
    generation: AtomicU64,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<Arc<AssetCacheEntry>> {
        self.slots.get(path).map(|slot| Arc::clone(&slot.entry))
    }

    /// Look up an entry that is still fresh for `modified_at`.
    pub fn get_fresh(
        &self,
        path: &Path,
        modified_at: Option<SystemTime>,
    ) -> Option<Arc<AssetCacheEntry>> {
        self.get(path).filter(|entry| entry.is_fresh(modified_at))
    }

    pub fn put(&self, path: PathBuf, entry: AssetCacheEntry) -> Arc<AssetCacheEntry> {
        let entry = Arc::new(entry);
        self.slots.insert(
            path,
            Slot {
                entry: Arc::clone(&entry),
                seen: self.current_generation(),
            },
        );
        entry
    }

    /// Start a compilation pass, returning its generation number.
    pub fn begin_pass(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Record that `path` was enumerated during pass `generation`.
    pub fn touch(&self, path: &Path, generation: u64) {
        if let Some(mut slot) = self.slots.get_mut(path)
            && slot.seen < generation
        {
            slot.seen = generation;
        }
    }

    /// Drop entries not seen since `generation`. Returns the number removed.
    pub fn prune_older_than(&self, generation: u64) -> usize {
        let before = self.slots.len();
        self.slots.retain(|_, slot| slot.seen >= generation);
        before - self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&self) {
        self.slots.clear();
    }
}
