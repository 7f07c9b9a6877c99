//! `virtual:use-sound` rendering.

use super::js_string;
use crate::embed::runtime::{RUNTIME_JS, RuntimeVars};
use crate::sound::CompiledRegistry;

/// Prefixes that mark a `useSound` argument as a literal URL.
const URL_SCHEMES: [&str; 5] = ["https://", "http://", "data:", "blob:", "file:"];

/// Registry module: URL table + player runtime.
pub fn render_registry(registry: &CompiledRegistry) -> String {
    RUNTIME_JS.render(&RuntimeVars {
        urls: url_table(registry),
        schemes: scheme_list(),
    })
}

/// Object literal `{ ["id"]: "url", ... }`, sorted by ID.
///
/// Computed keys make `__proto__` an own property like any other ID.
fn url_table(registry: &CompiledRegistry) -> String {
    let urls = registry.sorted_urls();
    if urls.is_empty() {
        return "{}".to_string();
    }

    let entries: Vec<String> = urls
        .into_iter()
        .map(|(id, url)| format!("  [{}]: {}", js_string(id), js_string(url)))
        .collect();
    format!("{{\n{}\n}}", entries.join(",\n"))
}

fn scheme_list() -> String {
    serde_json::Value::from(URL_SCHEMES.to_vec()).to_string()
}
