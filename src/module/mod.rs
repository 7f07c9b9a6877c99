//! Virtual module boundary: host hooks and HTTP payloads.

mod name;
mod server;

pub use name::VirtualModule;
pub use server::{LoadMode, ModuleServer, ServedModule};
