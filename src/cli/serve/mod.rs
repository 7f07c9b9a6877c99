//! Development module server.
//!
//! Answers `/@id/virtual:use-sound` and `/@id/virtual:use-sound-ids`
//! (under any base path) with freshly compiled module source. Every request
//! runs a compilation pass; unchanged files come from the asset cache.

mod lifecycle;
mod path;
mod response;

use crate::{
    config::SoundConfig,
    log,
    logger::serve_status,
    module::{ModuleServer, VirtualModule},
};
use anyhow::{Context, Result};
use crossbeam::channel;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Request handler threads.
const POOL_THREADS: usize = 4;

/// Bound server ready to accept requests
pub struct BoundServer {
    server: Arc<Server>,
    addr: SocketAddr,
}

/// Bind the HTTP server without starting the request loop
pub fn bind_server(config: &SoundConfig) -> Result<BoundServer> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    Ok(BoundServer { server, addr })
}

impl BoundServer {
    /// Start the request loop (blocking).
    pub fn run(self, modules: Arc<ModuleServer>) -> Result<()> {
        for module in VirtualModule::ALL {
            log!("serve"; "http://{}/@id/{}", self.addr, module.id());
        }
        run_request_loop(&self.server, modules)
    }
}

/// Compile once to report problems early, then serve until Ctrl+C.
pub fn serve(config: &SoundConfig) -> Result<()> {
    let modules = Arc::new(ModuleServer::new(config.compile_options()));

    match modules.compile() {
        Ok(registry) => log!("sound"; "{} sounds ready", registry.len()),
        Err(e) => log!("error"; "{e}"),
    }

    bind_server(config)?.run(modules)
}

fn run_request_loop(server: &Server, modules: Arc<ModuleServer>) -> Result<()> {
    // On-demand compilation must not block other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(POOL_THREADS)
        .build()
        .context("failed to create request thread pool")?;

    let (in_flight, drained) = channel::bounded::<()>(0);

    for request in server.incoming_requests() {
        let modules = Arc::clone(&modules);
        let in_flight = in_flight.clone();
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &modules) {
                log!("serve"; "request error: {e}");
            }
            drop(in_flight);
        });
    }

    drop(in_flight);
    lifecycle::wait_for_drain(drained);
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, modules: &ModuleServer) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let url = path::normalize_url(request.url());
    let Some(module) = VirtualModule::from_request_path(&url) else {
        return response::respond_not_found(request);
    };

    if response::is_preflight_request(&request) {
        return response::respond_preflight(request);
    }
    if !response::is_read_request(&request) {
        return response::respond_method_not_allowed(request);
    }

    match modules.serve(module) {
        Ok(served) => {
            if response::is_not_modified(&request, &served) {
                serve_status().unchanged(&format!("{} (not modified)", module.file_name()));
            } else {
                serve_status().success(&format!(
                    "{} ({} bytes)",
                    module.file_name(),
                    served.body.len()
                ));
            }
            response::respond_module(request, &served)
        }
        Err(e) => {
            let summary = format!("{}: compile failed", module.file_name());
            serve_status().error(&summary, &e.to_string());
            response::respond_compile_error(request, &e)
        }
    }
}
