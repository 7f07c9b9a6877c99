//! Project configuration management for `soundsprite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── sound      # [sound]
//! │   ├── build      # [build]
//! │   └── serve      # [serve]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SoundConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section   | Purpose                                           |
//! |-----------|---------------------------------------------------|
//! | `[sound]` | Sound directories, symbol ID pattern, pruning     |
//! | `[build]` | Output directory and type declarations            |
//! | `[serve]` | Development module server (interface, port)       |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, ServeConfig, SoundSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, CompileArgs},
    log,
    sound::CompileOptions,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing soundsprite.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Absolute path to the config file, empty when running without one
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Sound directories and ID pattern
    #[serde(default)]
    pub sound: SoundSectionConfig,

    /// Build output settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SoundConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is
    /// the config file's parent directory. When no file exists but `--dir`
    /// was given, defaults are used with cwd as the root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.config_path = crate::utils::path::normalize_path(&path);
                config
            }
            None if !cli.dirs.is_empty() => Self::default(),
            None => return Err(ConfigError::NotFound(cwd.join(&cli.config)).into()),
        };

        let root = match config.config_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => cwd,
        };

        config.apply_command_options(cli);
        config.validate_paths()?;
        config.finalize(&root);
        config.validate();

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Options for a compilation pass.
    pub fn compile_options(&self) -> CompileOptions {
        self.sound.compile_options()
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        if !cli.dirs.is_empty() {
            self.sound.dirs = cli.dirs.clone();
        }

        self.apply_compile_args(cli.command.compile_args());

        match &cli.command {
            Commands::Build {
                output,
                declaration,
                ..
            } => {
                Self::update_option(&mut self.build.output, output.as_ref());
                Self::update_option(&mut self.build.declaration, declaration.as_ref());
            }
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Ids { .. } => {}
        }
    }

    /// Apply compile arguments shared by every command.
    fn apply_compile_args(&mut self, args: &CompileArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.sound.symbol_id, args.symbol_id.as_ref());
        Self::update_option(&mut self.sound.prune_stale, args.prune_stale.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve every configured path against `root`.
    fn finalize(&mut self, root: &Path) {
        self.root = crate::utils::path::normalize_path(root);
        self.sound.normalize(&self.root);
        self.build.normalize(&self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate raw paths before normalization.
    ///
    /// Joining to the root turns an empty entry into the root itself, so
    /// this must run before `finalize()`.
    fn validate_paths(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.sound.validate_paths(&mut diag);
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Report hints for normalized paths.
    fn validate(&self) {
        let mut diag = ConfigDiagnostics::new();
        self.sound.validate(&mut diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SoundConfig {
    let (parsed, ignored) = SoundConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
