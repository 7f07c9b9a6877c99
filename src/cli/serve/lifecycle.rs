//! Server lifecycle management.

use crate::{core::register_server, log};
use anyhow::Result;
use crossbeam::channel::Receiver;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// How long shutdown waits for in-flight requests.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(2);

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    let mut offset = 0;
    loop {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => offset += 1,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
}

/// Register server for graceful shutdown.
///
/// When Ctrl+C is pressed, the handler set up in main() unblocks it.
pub fn register_server_for_shutdown(server: Arc<Server>) {
    register_server(server);
}

/// Wait until every in-flight request handler dropped its sender.
///
/// Gives up after `DRAIN_TIMEOUT`.
pub fn wait_for_drain(in_flight: Receiver<()>) {
    // Handlers never send; the channel disconnects when the last one ends.
    let _ = in_flight.recv_timeout(DRAIN_TIMEOUT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;
    use std::net::{IpAddr, Ipv4Addr, TcpListener};
    use std::time::Instant;

    #[test]
    fn test_bind_with_retry_skips_taken_port() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let (_server, addr) =
            bind_with_retry(IpAddr::V4(Ipv4Addr::LOCALHOST), port).unwrap();
        assert_ne!(addr.port(), port);
        assert!(addr.port() > port);
    }

    #[test]
    fn test_wait_for_drain_returns_on_disconnect() {
        let (tx, rx) = channel::bounded::<()>(0);
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            drop(tx);
        });

        let start = Instant::now();
        wait_for_drain(rx);
        assert!(start.elapsed() < DRAIN_TIMEOUT);
        handle.join().unwrap();
    }
}
