//! Shared utilities.
//!
//! | Module | Purpose                                  |
//! |--------|------------------------------------------|
//! | `hash` | Content fingerprints and weak ETags      |
//! | `mime` | Content types for served files           |
//! | `path` | Filesystem path normalization            |

pub mod hash;
pub mod mime;
pub mod path;
