//! Source generation for the virtual sound modules.
//!
//! | Module                  | Content                                      |
//! |-------------------------|----------------------------------------------|
//! | `virtual:use-sound`     | ID -> URL table plus the player runtime      |
//! | `virtual:use-sound-ids` | default export: array of known symbol IDs    |
//! | `use-sound.d.ts`        | declarations for both (written by `build`)   |

mod declaration;
mod identifiers;
mod registry;

pub use declaration::render_declaration;
pub use identifiers::render_identifiers;
pub use registry::render_registry;

use crate::sound::CompiledRegistry;

/// Module body served to SSR loads in dev mode.
pub const SSR_STUB: &str = "export default {}";

/// Both generated module sources for one registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModules {
    pub registry: String,
    pub identifiers: String,
}

/// Render both modules.
pub fn render(registry: &CompiledRegistry) -> GeneratedModules {
    GeneratedModules {
        registry: render_registry(registry),
        identifiers: render_identifiers(registry),
    }
}

/// Escape `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
