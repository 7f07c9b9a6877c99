//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist/sounds"      # Where `build` writes the generated modules
//! declaration = true          # Also write use-sound.d.ts
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory for generated modules.
    pub output: PathBuf,

    /// Write a TypeScript declaration next to the modules.
    pub declaration: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "dist/sounds".into(),
            declaration: true,
        }
    }
}

impl BuildSectionConfig {
    pub fn normalize(&mut self, root: &Path) {
        self.output = crate::utils::path::resolve_path(&self.output, root);
    }
}
