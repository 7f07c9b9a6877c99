//! `[sound]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [sound]
//! dirs = ["assets/sounds"]        # Sound directories (relative to project root)
//! symbol_id = "sound-[dir]-[name]" # ID pattern; "" uses relative paths as IDs
//! prune_stale = false             # Drop cache entries for deleted files
//! ```
//!
//! Directories are processed in order. When two files map to the same ID
//! the later directory wins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::sound::{CompileOptions, DEFAULT_PATTERN};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSectionConfig {
    /// Sound directories, processed in order.
    pub dirs: Vec<PathBuf>,

    /// Symbol ID pattern with `[dir]` and `[name]` tokens.
    pub symbol_id: String,

    /// Drop cached entries not seen by the latest pass.
    pub prune_stale: bool,
}

impl Default for SoundSectionConfig {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            symbol_id: DEFAULT_PATTERN.to_string(),
            prune_stale: false,
        }
    }
}

impl SoundSectionConfig {
    const DIRS: FieldPath = FieldPath::new("sound.dirs");

    /// Validate raw values, before paths are joined to the project root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.dirs.is_empty() {
            diag.error_with_hint(
                Self::DIRS,
                "at least one sound directory is required",
                "add `dirs = [\"assets/sounds\"]` under [sound]",
            );
        }

        for (index, dir) in self.dirs.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                diag.error(Self::DIRS, format!("entry {index} is empty"));
            }
        }
    }

    /// Validate normalized paths.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for dir in &self.dirs {
            if !dir.is_dir() {
                diag.hint(
                    Self::DIRS,
                    format!("directory '{}' not found", dir.display()),
                );
            }
        }
    }

    /// Join every directory to `root`, expanding `~`.
    pub fn normalize(&mut self, root: &Path) {
        self.dirs = self
            .dirs
            .iter()
            .map(|dir| crate::utils::path::resolve_path(dir, root))
            .collect();
    }

    /// Options for a compilation pass.
    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            dirs: self.dirs.clone(),
            symbol_id: Some(self.symbol_id.clone()),
            prune_stale: self.prune_stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};
    use crate::sound::DEFAULT_PATTERN;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_sound_config() {
        let config = test_parse_config(
            "[sound]\ndirs = [\"a\", \"b\"]\nsymbol_id = \"sfx-[name]\"\nprune_stale = true",
        );
        assert_eq!(
            config.sound.dirs,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
        assert_eq!(config.sound.symbol_id, "sfx-[name]");
        assert!(config.sound.prune_stale);
    }

    #[test]
    fn test_sound_config_defaults() {
        let config = test_parse_config("");
        assert!(config.sound.dirs.is_empty());
        assert_eq!(config.sound.symbol_id, DEFAULT_PATTERN);
        assert!(!config.sound.prune_stale);
    }

    #[test]
    fn test_validate_paths_rejects_empty_dirs() {
        let config = test_parse_config("[sound]\ndirs = []");
        let mut diag = ConfigDiagnostics::new();
        config.sound.validate_paths(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "sound.dirs");
    }

    #[test]
    fn test_validate_paths_rejects_empty_entry() {
        let config = test_parse_config("[sound]\ndirs = [\"ok\", \"\"]");
        let mut diag = ConfigDiagnostics::new();
        config.sound.validate_paths(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("entry 1"));
    }

    #[test]
    fn test_normalize_and_compile_options() {
        let mut config = test_parse_config("[sound]\ndirs = [\"sounds\", \"/abs/sfx\"]");
        config.sound.normalize(Path::new("/project"));

        let options = config.sound.compile_options();
        assert_eq!(
            options.dirs,
            vec![PathBuf::from("/project/sounds"), PathBuf::from("/abs/sfx")]
        );
        assert_eq!(options.symbol_id.as_deref(), Some(DEFAULT_PATTERN));
        assert!(!options.prune_stale);
    }
}
