//! Filesystem path normalization.
//!
//! - `normalize_path`: absolute form (canonicalize + fallback)
//! - `resolve_path`: config-relative paths with `~` expansion

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a configured path against the project root.
///
/// `~` is expanded first. Absolute paths are kept, relative ones are
/// joined to `root`. Always returns an absolute path when `root` is.
///
/// # Example
/// ```ignore
/// resolve_path(Path::new("assets/sounds"), Path::new("/site")) // /site/assets/sounds
/// resolve_path(Path::new("~/sfx"), Path::new("/site"))         // $HOME/sfx
/// ```
pub fn resolve_path(path: &Path, root: &Path) -> PathBuf {
    let path = match path.to_str() {
        Some(raw) => PathBuf::from(shellexpand::tilde(raw).into_owned()),
        None => path.to_path_buf(),
    };

    if path.is_absolute() {
        normalize_path(&path)
    } else {
        normalize_path(&root.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_path_absolute() {
        let resolved = resolve_path(Path::new("/absolute/path"), Path::new("/root"));
        assert_eq!(resolved, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_resolve_path_relative_to_root() {
        let resolved = resolve_path(Path::new("nonexistent/path"), Path::new("/root"));
        assert_eq!(resolved, PathBuf::from("/root/nonexistent/path"));
    }

    #[test]
    fn test_resolve_path_existing_dir() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("sounds")).unwrap();

        let resolved = resolve_path(Path::new("sounds"), root.path());
        assert_eq!(resolved, root.path().join("sounds").canonicalize().unwrap());
    }

    #[test]
    fn test_resolve_path_tilde() {
        if std::env::var_os("HOME").is_none() {
            return;
        }
        let resolved = resolve_path(Path::new("~/nonexistent-sfx"), Path::new("/root"));
        assert!(!resolved.starts_with("~"));
        assert!(resolved.ends_with("nonexistent-sfx"));
    }
}
