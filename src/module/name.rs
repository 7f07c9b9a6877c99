//! Virtual module identifiers.

use crate::codegen::GeneratedModules;

/// The two generated modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualModule {
    /// `virtual:use-sound`
    Registry,
    /// `virtual:use-sound-ids`
    Identifiers,
}

impl VirtualModule {
    pub const ALL: [Self; 2] = [Self::Registry, Self::Identifiers];

    /// Module ID as imported by client code.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Registry => "virtual:use-sound",
            Self::Identifiers => "virtual:use-sound-ids",
        }
    }

    /// File name used when writing the module to disk.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Registry => "use-sound.js",
            Self::Identifiers => "use-sound-ids.js",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.id() == id)
    }

    /// Match a normalized request path ending in `/@id/<module id>`.
    pub fn from_request_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| {
            path.strip_suffix(m.id())
                .is_some_and(|prefix| prefix.ends_with("/@id/"))
        })
    }

    /// Pick this module's source out of a rendered pair.
    pub fn select(self, modules: &GeneratedModules) -> &str {
        match self {
            Self::Registry => &modules.registry,
            Self::Identifiers => &modules.identifiers,
        }
    }
}

impl std::fmt::Display for VirtualModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(
            VirtualModule::from_id("virtual:use-sound"),
            Some(VirtualModule::Registry)
        );
        assert_eq!(
            VirtualModule::from_id("virtual:use-sound-ids"),
            Some(VirtualModule::Identifiers)
        );
        assert_eq!(VirtualModule::from_id("virtual:other"), None);
    }

    #[test]
    fn test_from_request_path() {
        assert_eq!(
            VirtualModule::from_request_path("/@id/virtual:use-sound"),
            Some(VirtualModule::Registry)
        );
        assert_eq!(
            VirtualModule::from_request_path("/base/@id/virtual:use-sound-ids"),
            Some(VirtualModule::Identifiers)
        );
        assert_eq!(VirtualModule::from_request_path("/virtual:use-sound"), None);
        assert_eq!(VirtualModule::from_request_path("/@id/virtual:use-sounds"), None);
        assert_eq!(VirtualModule::from_request_path("/index.html"), None);
    }
}
