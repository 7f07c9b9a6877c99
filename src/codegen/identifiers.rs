//! `virtual:use-sound-ids` rendering.

use crate::sound::CompiledRegistry;

/// `export default [...]` with every symbol ID, sorted.
pub fn render_identifiers(registry: &CompiledRegistry) -> String {
    let ids = serde_json::Value::from(registry.sorted_ids());
    format!("export default {ids}")
}
