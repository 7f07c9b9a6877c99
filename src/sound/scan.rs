//! Sound directory enumeration (read-only, no cache access).

use jwalk::WalkDir;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use super::{CompileError, SoundFormat};

/// A supported audio file found under a sound directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedSound {
    pub path: PathBuf,
    /// Slash-separated, relative to the scanned directory.
    pub relative_path: String,
    pub modified_at: Option<SystemTime>,
    pub format: SoundFormat,
}

/// Recursively list supported audio files under `dir`, sorted by path.
///
/// A missing or unreadable `dir` is an error naming it; an empty one yields
/// an empty list.
pub fn scan_sound_dir(dir: &Path) -> Result<Vec<ScannedSound>, CompileError> {
    let meta = fs::metadata(dir).map_err(|e| CompileError::Directory(dir.to_path_buf(), e))?;
    if !meta.is_dir() {
        return Err(CompileError::NotADirectory(dir.to_path_buf()));
    }
    // Surface permission errors on the root itself rather than an empty walk.
    fs::read_dir(dir).map_err(|e| CompileError::Directory(dir.to_path_buf(), e))?;

    let mut sounds = Vec::new();
    for entry in WalkDir::new(dir).sort(true).follow_links(true) {
        let entry = entry.map_err(|e| CompileError::Walk(dir.to_path_buf(), e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(format) = SoundFormat::from_path(&path) else {
            continue;
        };

        let modified_at = entry.metadata().ok().and_then(|m| m.modified().ok());
        let relative_path = relative_slash_path(&path, dir);

        sounds.push(ScannedSound {
            path,
            relative_path,
            modified_at,
            format,
        });
    }

    Ok(sounds)
}

/// Path of `path` relative to `base`, always joined with `/`.
fn relative_slash_path(path: &Path, base: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
