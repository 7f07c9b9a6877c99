//! MIME type constants for served and written modules.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JAVASCRIPT: &str = "application/javascript; charset=utf-8";
    pub const TYPESCRIPT: &str = "text/typescript; charset=utf-8";
    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension.
pub fn from_path(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Guess MIME type from file extension string.
pub fn from_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("js" | "mjs" | "cjs") => types::JAVASCRIPT,
        Some("ts" | "mts" | "cts") => types::TYPESCRIPT,
        Some("txt") => types::PLAIN,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("use-sound.js")), types::JAVASCRIPT);
        assert_eq!(from_path(&PathBuf::from("use-sound.d.ts")), types::TYPESCRIPT);
        assert_eq!(from_path(&PathBuf::from("click.mp3")), types::OCTET_STREAM);
    }
}
