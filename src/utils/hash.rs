//! Content fingerprints for HTTP validation.
//!
//! Uses `blake3` over the exact bytes, so byte-identical bodies always get
//! the same tag and any change yields a different one.
//!
//! # Usage
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let tag = hash::weak_etag("export default []"); // -> W/"11-..."
//! ```

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Digest characters kept in an ETag.
const DIGEST_LEN: usize = 27;

/// Compute a content fingerprint (truncated base64 blake3 digest).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    let hash = blake3::hash(data.as_ref());
    let mut encoded = STANDARD.encode(hash.as_bytes());
    encoded.truncate(DIGEST_LEN);
    encoded
}

/// Weak ETag: `W/"<byte length in hex>-<fingerprint>"`.
pub fn weak_etag<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    let bytes = data.as_ref();
    format!("W/\"{:x}-{}\"", bytes.len(), fingerprint(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_etag_format() {
        let tag = weak_etag("export default []");
        assert!(tag.starts_with("W/\"11-"));
        assert!(tag.ends_with('"'));
        assert_eq!(tag.len(), "W/\"11-\"".len() + DIGEST_LEN);
    }

    #[test]
    fn test_weak_etag_tracks_content() {
        assert_eq!(weak_etag("a"), weak_etag("a"));
        assert_ne!(weak_etag("a"), weak_etag("b"));
        // Same length, different bytes.
        assert_ne!(weak_etag("ab"), weak_etag("ba"));
    }
}
