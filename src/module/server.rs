//! Module server: compile on demand, render, fingerprint.

use std::path::Path;

use super::VirtualModule;
use crate::codegen::{self, GeneratedModules, SSR_STUB};
use crate::sound::{AssetCache, CompileError, CompileOptions, CompiledRegistry, compile};
use crate::utils::hash::weak_etag;
use crate::utils::mime;

/// How the host is loading a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Production bundle: always generate.
    Build,
    /// Dev server: client loads go over HTTP, SSR loads get a stub.
    Serve { ssr: bool },
}

/// A generated module ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServedModule {
    pub module: VirtualModule,
    pub body: String,
    /// Weak validator derived from `body`.
    pub etag: String,
}

impl ServedModule {
    pub const CACHE_CONTROL: &'static str = "no-cache";

    pub fn content_type(&self) -> &'static str {
        mime::from_path(Path::new(self.module.file_name()))
    }

    /// Whether an `If-None-Match` header value matches this body.
    pub fn matches(&self, if_none_match: &str) -> bool {
        if_none_match
            .split(',')
            .map(str::trim)
            .any(|tag| tag == "*" || weak_eq(tag, &self.etag))
    }
}

/// Weak comparison: `W/` prefixes are ignored.
fn weak_eq(a: &str, b: &str) -> bool {
    a.trim_start_matches("W/") == b.trim_start_matches("W/")
}

/// Owns the configuration and asset cache of one plugin instance.
///
/// Every request recompiles; the cache keeps unchanged files cheap.
/// Overlapping calls are allowed and may redo the same work.
#[derive(Debug)]
pub struct ModuleServer {
    options: CompileOptions,
    cache: AssetCache,
}

impl ModuleServer {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            options,
            cache: AssetCache::new(),
        }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    /// Run one compilation pass against this server's cache.
    pub fn compile(&self) -> Result<CompiledRegistry, CompileError> {
        compile(&self.cache, &self.options)
    }

    /// Compile and render both modules.
    pub fn generate(&self) -> Result<GeneratedModules, CompileError> {
        Ok(codegen::render(&self.compile()?))
    }

    /// Compile, render and fingerprint `module`.
    pub fn serve(&self, module: VirtualModule) -> Result<ServedModule, CompileError> {
        let modules = self.generate()?;
        let body = module.select(&modules).to_string();
        let etag = weak_etag(&body);
        Ok(ServedModule { module, body, etag })
    }

    /// Host `resolveId` hook: claim the virtual module IDs.
    pub fn resolve_id(id: &str) -> Option<VirtualModule> {
        VirtualModule::from_id(id)
    }

    /// Host `load` hook.
    ///
    /// Returns `None` for IDs this server does not own, and for dev-mode
    /// client loads (those are answered by the HTTP middleware instead).
    pub fn load(&self, id: &str, mode: LoadMode) -> Result<Option<String>, CompileError> {
        let Some(module) = Self::resolve_id(id) else {
            return Ok(None);
        };

        match mode {
            LoadMode::Serve { ssr: false } => Ok(None),
            LoadMode::Serve { ssr: true } => Ok(Some(SSR_STUB.to_string())),
            LoadMode::Build => {
                let modules = self.generate()?;
                Ok(Some(module.select(&modules).to_string()))
            }
        }
    }
}
