//! Inline data URL encoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::SoundFormat;

/// Wrap raw file bytes as `data:audio/<ext>;base64,<payload>`.
pub fn to_data_url(format: SoundFormat, bytes: &[u8]) -> String {
    let mime = format.data_url_mime();
    let mut url = String::with_capacity(mime.len() + 13 + bytes.len().div_ceil(3) * 4);
    url.push_str("data:");
    url.push_str(mime);
    url.push_str(";base64,");
    STANDARD.encode_string(bytes, &mut url);
    url
}
