//! Embedded source templates for generated modules.
//!
//! - `runtime/use-sound.js` - body of `virtual:use-sound`
//! - `runtime/use-sound.d.ts` - declarations for both virtual modules
//!
//! # Usage
//!
//! ```ignore
//! use embed::runtime::{RUNTIME_JS, RuntimeVars};
//!
//! let js = RUNTIME_JS.render(&RuntimeVars { urls: "{}".into(), schemes: "[]".into() });
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod runtime {
    use super::{Template, TemplateVars};

    /// Variables for use-sound.js.
    ///
    /// Both fields are JavaScript literals, already escaped.
    pub struct RuntimeVars {
        /// Object literal mapping symbol IDs to URLs.
        pub urls: String,
        /// Array literal of recognized URL scheme prefixes.
        pub schemes: String,
    }

    impl TemplateVars for RuntimeVars {
        fn apply(&self, content: &str) -> String {
            // URLs last: inserted data is never scanned for placeholders.
            content
                .replace("__SOUND_URL_SCHEMES__", &self.schemes)
                .replace("__SOUND_URLS__", &self.urls)
        }
    }

    /// Player runtime for the registry module.
    pub const RUNTIME_JS: Template<RuntimeVars> =
        Template::new(include_str!("runtime/use-sound.js"));

    /// Variables for use-sound.d.ts.
    pub struct DeclarationVars {
        /// TypeScript union of string literal types (`string` when empty).
        pub id_union: String,
    }

    impl TemplateVars for DeclarationVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__SOUND_ID_UNION__", &self.id_union)
        }
    }

    /// Type declarations for `virtual:use-sound` and `virtual:use-sound-ids`.
    pub const DECLARATION_TS: Template<DeclarationVars> =
        Template::new(include_str!("runtime/use-sound.d.ts"));
}

#[cfg(test)]
mod tests {
    use super::TemplateVars;
    use super::runtime::*;

    #[test]
    fn test_runtime_template_has_placeholders() {
        let content = RUNTIME_JS.content();
        assert_eq!(content.matches("__SOUND_URLS__").count(), 1);
        assert_eq!(content.matches("__SOUND_URL_SCHEMES__").count(), 1);
    }

    #[test]
    fn test_runtime_vars_do_not_rescan_inserted_urls() {
        let vars = RuntimeVars {
            urls: r#"{"__SOUND_URL_SCHEMES__": "x"}"#.into(),
            schemes: "[]".into(),
        };
        let out = vars.apply("__SOUND_URL_SCHEMES__;__SOUND_URLS__");
        assert_eq!(out, r#"[];{"__SOUND_URL_SCHEMES__": "x"}"#);
    }

    #[test]
    fn test_declaration_template() {
        let out = DECLARATION_TS.render(&DeclarationVars {
            id_union: "'a' | 'b'".into(),
        });
        assert!(out.contains("export type SoundId = 'a' | 'b';"));
        assert!(out.contains("declare module 'virtual:use-sound-ids'"));
    }
}
