//! Supported audio container formats.

use std::path::Path;

/// Audio formats picked up by directory scanning.
///
/// Files are treated as opaque bytes; the format only decides whether a
/// file is enumerated and which MIME subtype its data URL carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundFormat {
    Mp3,
    Wav,
    M4a,
    Aac,
}

impl SoundFormat {
    pub const ALL: [Self; 4] = [Self::Mp3, Self::Wav, Self::M4a, Self::Aac];

    /// Detect format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }

    /// Detect format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Canonical lowercase extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::M4a => "m4a",
            Self::Aac => "aac",
        }
    }

    /// MIME type used in data URLs (`audio/<extension>`).
    pub const fn data_url_mime(self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
            Self::Wav => "audio/wav",
            Self::M4a => "audio/m4a",
            Self::Aac => "audio/aac",
        }
    }

    /// Strip a trailing `.<ext>` of any supported format from `s`.
    pub fn strip_extension_suffix(s: &str) -> &str {
        let Some((stem, ext)) = s.rsplit_once('.') else {
            return s;
        };
        if Self::from_extension(ext).is_some() {
            stem
        } else {
            s
        }
    }
}
