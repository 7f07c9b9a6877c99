//! TypeScript declarations for the virtual modules.

use super::js_string;
use crate::embed::runtime::{DECLARATION_TS, DeclarationVars};
use crate::sound::CompiledRegistry;

/// Declarations with a `SoundId` union of the registry's IDs.
pub fn render_declaration(registry: &CompiledRegistry) -> String {
    let ids = registry.sorted_ids();
    let id_union = if ids.is_empty() {
        "string".to_string()
    } else {
        ids.into_iter()
            .map(js_string)
            .collect::<Vec<_>>()
            .join(" | ")
    };
    DECLARATION_TS.render(&DeclarationVars { id_union })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::test_support::{assert_parses, registry_of};
    use oxc::span::SourceType;

    fn dts() -> SourceType {
        SourceType::from_path("use-sound.d.ts").unwrap()
    }

    #[test]
    fn test_declaration_union() {
        let registry = registry_of(&[("sound-b", "u"), ("sound-a", "u")]);
        let source = render_declaration(&registry);

        assert!(source.contains(r#"export type SoundId = "sound-a" | "sound-b";"#));
        assert_parses(&source, dts());
    }

    #[test]
    fn test_declaration_without_sounds() {
        let source = render_declaration(&registry_of(&[]));
        assert!(source.contains("export type SoundId = string;"));
        assert_parses(&source, dts());
    }
}
