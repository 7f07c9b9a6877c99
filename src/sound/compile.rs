//! Compilation pass: directories -> cache -> registry.

use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::path::PathBuf;

use super::cache::{AssetCache, AssetCacheEntry};
use super::scan::{ScannedSound, scan_sound_dir};
use super::{CompileError, create_symbol_id, to_data_url};
use crate::debug;

/// Inputs of a compilation pass.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Sound directories, processed in order.
    pub dirs: Vec<PathBuf>,
    /// Symbol ID pattern; `None` uses relative paths as IDs.
    pub symbol_id: Option<String>,
    /// Drop cache entries for files that were not enumerated this pass.
    pub prune_stale: bool,
}

/// Counters for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileStats {
    pub scanned: usize,
    /// Entries (re)compiled from disk.
    pub refreshed: usize,
    /// Entries served from cache.
    pub reused: usize,
    /// IDs overwritten by a later file.
    pub collisions: usize,
    pub pruned: usize,
}

/// Result of one compilation pass.
///
/// `ids` always equals the key set of `urls`.
#[derive(Debug, Clone, Default)]
pub struct CompiledRegistry {
    pub ids: FxHashSet<String>,
    pub urls: FxHashMap<String, String>,
    pub stats: CompileStats,
}

impl CompiledRegistry {
    fn insert(&mut self, entry: &AssetCacheEntry) -> Option<String> {
        self.ids.insert(entry.symbol_id.clone());
        self.urls
            .insert(entry.symbol_id.clone(), entry.content.clone())
    }

    /// IDs in stable (sorted) order.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.ids.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// ID -> URL pairs in stable (sorted by ID) order.
    pub fn sorted_urls(&self) -> Vec<(&str, &str)> {
        let mut urls: Vec<(&str, &str)> = self
            .urls
            .iter()
            .map(|(id, url)| (id.as_str(), url.as_str()))
            .collect();
        urls.sort_unstable_by(|a, b| a.0.cmp(b.0));
        urls
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Compile every configured sound directory, refreshing stale cache entries.
///
/// The first directory error aborts the pass.
pub fn compile(
    cache: &AssetCache,
    options: &CompileOptions,
) -> Result<CompiledRegistry, CompileError> {
    let generation = cache.begin_pass();
    let mut registry = CompiledRegistry::default();

    for dir in &options.dirs {
        for sound in scan_sound_dir(dir)? {
            registry.stats.scanned += 1;

            let entry = match cache.get_fresh(&sound.path, sound.modified_at) {
                Some(entry) => {
                    registry.stats.reused += 1;
                    cache.touch(&sound.path, generation);
                    entry
                }
                None => {
                    registry.stats.refreshed += 1;
                    let entry = compile_sound(&sound, options.symbol_id.as_deref())?;
                    cache.put(sound.path.clone(), entry)
                }
            };

            if registry.insert(&entry).is_some() {
                registry.stats.collisions += 1;
                debug!("sound"; "`{}` redefined by {}", entry.symbol_id, sound.path.display());
            }
        }
    }

    if options.prune_stale {
        registry.stats.pruned = cache.prune_older_than(generation);
    }

    debug!(
        "sound";
        "{} sounds ({} compiled, {} cached)",
        registry.len(),
        registry.stats.refreshed,
        registry.stats.reused
    );
    Ok(registry)
}

/// Read, encode and name a single sound file.
fn compile_sound(
    sound: &ScannedSound,
    pattern: Option<&str>,
) -> Result<AssetCacheEntry, CompileError> {
    let bytes = fs::read(&sound.path).map_err(|e| CompileError::File(sound.path.clone(), e))?;

    Ok(AssetCacheEntry {
        relative_path: sound.relative_path.clone(),
        modified_at: sound.modified_at,
        content: to_data_url(sound.format, &bytes),
        symbol_id: create_symbol_id(&sound.relative_path, pattern),
    })
}
