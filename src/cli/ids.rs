//! `ids` command: list the symbol IDs of every known sound.

use crate::{config::SoundConfig, module::ModuleServer};
use anyhow::Result;
use std::io::{self, Write};

/// Print sorted IDs, one per line or as a JSON array.
pub fn ids(config: &SoundConfig, json: bool) -> Result<()> {
    let registry = ModuleServer::new(config.compile_options()).compile()?;
    let ids = registry.sorted_ids();

    let mut stdout = io::stdout().lock();
    write_ids(&mut stdout, &ids, json)?;
    stdout.flush()?;
    Ok(())
}

fn write_ids(out: &mut impl Write, ids: &[&str], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, ids)?;
        writeln!(out)?;
    } else {
        for id in ids {
            writeln!(out, "{id}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ids_lines() {
        let mut out = Vec::new();
        write_ids(&mut out, &["sound-a", "sound-b"], false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "sound-a\nsound-b\n");
    }

    #[test]
    fn test_write_ids_json() {
        let mut out = Vec::new();
        write_ids(&mut out, &["sound-a"], true).unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec!["sound-a".to_string()]);
    }
}
