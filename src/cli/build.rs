//! `build` command: compile once and write the generated modules.

use crate::{
    codegen,
    config::SoundConfig,
    debug, log,
    module::{LoadMode, ModuleServer, VirtualModule},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

/// File name of the written type declarations.
pub const DECLARATION_FILE: &str = "use-sound.d.ts";

/// Outcome of a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub sounds: usize,
    /// Files whose content changed.
    pub written: usize,
    /// Files left untouched because their content was identical.
    pub unchanged: usize,
}

/// Compile every sound directory and write both modules to `[build] output`.
///
/// Module sources come from the build-mode load hook; later passes reuse
/// the cache filled by the first one.
pub fn build(config: &SoundConfig) -> Result<BuildSummary> {
    let modules = ModuleServer::new(config.compile_options());
    let registry = modules.compile()?;

    let mut files = Vec::with_capacity(VirtualModule::ALL.len() + 1);
    for module in VirtualModule::ALL {
        if let Some(source) = modules.load(module.id(), LoadMode::Build)? {
            files.push((module.file_name(), source));
        }
    }
    if config.build.declaration {
        files.push((DECLARATION_FILE, codegen::render_declaration(&registry)));
    }

    let output = &config.build.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let mut summary = BuildSummary {
        sounds: registry.len(),
        ..BuildSummary::default()
    };

    for (name, content) in files {
        if write_if_changed(&output.join(name), &content)? {
            debug!("build"; "wrote {}", name);
            summary.written += 1;
        } else {
            summary.unchanged += 1;
        }
    }

    log!(
        "build";
        "{} sounds -> {} ({} written, {} unchanged)",
        summary.sounds,
        output.display(),
        summary.written,
        summary.unchanged
    );

    Ok(summary)
}

/// Write `content` unless the file already holds exactly it.
///
/// Keeps mtimes stable so downstream watchers do not rebuild.
fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read(path).is_ok_and(|existing| existing == content.as_bytes()) {
        return Ok(false);
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    fn config_for(root: &Path, extra: &str) -> SoundConfig {
        let mut config = test_parse_config(&format!(
            "[sound]\ndirs = [\"{}\"]\n[build]\noutput = \"{}\"\n{extra}",
            root.join("sounds").display(),
            root.join("out").display(),
        ));
        config.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_build_writes_modules() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("sounds")).unwrap();
        fs::write(root.path().join("sounds/click.mp3"), b"ID3").unwrap();

        let summary = build(&config_for(root.path(), "")).unwrap();
        assert_eq!(summary.sounds, 1);
        assert_eq!(summary.written, 3);

        let out = root.path().join("out");
        let registry = fs::read_to_string(out.join("use-sound.js")).unwrap();
        assert!(registry.contains("data:audio/mp3;base64,SUQz"));
        let ids = fs::read_to_string(out.join("use-sound-ids.js")).unwrap();
        assert_eq!(ids, r#"export default ["sound-click"]"#);
        let dts = fs::read_to_string(out.join(DECLARATION_FILE)).unwrap();
        assert!(dts.contains("\"sound-click\""));
    }

    #[test]
    fn test_build_skips_unchanged_files() {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("sounds")).unwrap();
        fs::write(root.path().join("sounds/click.mp3"), b"ID3").unwrap();
        let config = config_for(root.path(), "declaration = false");

        assert_eq!(build(&config).unwrap().written, 2);

        let again = build(&config).unwrap();
        assert_eq!(again.written, 0);
        assert_eq!(again.unchanged, 2);
        assert!(!root.path().join("out").join(DECLARATION_FILE).exists());
    }

    #[test]
    fn test_build_writes_load_hook_output() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("sounds/a")).unwrap();
        fs::write(root.path().join("sounds/a/tap.wav"), b"RIFF").unwrap();
        let config = config_for(root.path(), "");
        build(&config).unwrap();

        let hook = ModuleServer::new(config.compile_options());
        for module in VirtualModule::ALL {
            let path = root.path().join("out").join(module.file_name());
            let written = fs::read_to_string(path).unwrap();
            let loaded = hook.load(module.id(), LoadMode::Build).unwrap();
            assert_eq!(loaded.as_deref(), Some(written.as_str()));
        }
    }

    #[test]
    fn test_build_fails_on_missing_directory() {
        let root = TempDir::new().unwrap();
        let err = build(&config_for(root.path(), "")).unwrap_err();
        assert!(err.to_string().contains("sounds"));
        assert!(!root.path().join("out").exists());
    }
}
