//! Sound discovery, identifier generation and the compiled-entry cache.
//!
//! ```text
//! dirs ──scan──▶ ScannedSound ──cache hit?──▶ AssetCacheEntry ──▶ CompiledRegistry
//!                                  │ miss/stale
//!                                  └─ read + base64 + symbol id ─┘
//! ```

mod cache;
mod compile;
mod encode;
mod error;
mod kind;
mod scan;
mod symbol;

pub use cache::AssetCache;
pub use compile::{CompileOptions, CompiledRegistry, compile};
pub use encode::to_data_url;
pub use error::CompileError;
pub use kind::SoundFormat;
pub use symbol::{DEFAULT_PATTERN, create_symbol_id};
