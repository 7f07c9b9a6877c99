//! Configuration section definitions.
//!
//! Each module corresponds to a section in `soundsprite.toml`:
//!
//! | Module  | TOML Section | Purpose                              |
//! |---------|--------------|--------------------------------------|
//! | `sound` | `[sound]`    | Sound directories and ID pattern     |
//! | `build` | `[build]`    | Output of the `build` command        |
//! | `serve` | `[serve]`    | Development module server            |

mod build;
mod serve;
mod sound;

pub use build::BuildSectionConfig;
pub use serve::ServeConfig;
pub use sound::SoundSectionConfig;
