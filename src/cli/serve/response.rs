//! HTTP response handlers.

use crate::module::ServedModule;
use crate::sound::CompileError;
use crate::utils::mime::types::PLAIN;
use anyhow::{Result, anyhow};
use tiny_http::{Header, Method, Request, Response, StatusCode};

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, HEAD, OPTIONS";

/// Respond with a generated module.
///
/// A matching `If-None-Match` yields `304 Not Modified` without a body.
pub fn respond_module(request: Request, served: &ServedModule) -> Result<()> {
    let not_modified = is_not_modified(&request, served);

    let headers = [
        header("Content-Type", served.content_type())?,
        header("Cache-Control", ServedModule::CACHE_CONTROL)?,
        header("ETag", &served.etag)?,
        header("Access-Control-Allow-Origin", ALLOW_ORIGIN)?,
    ];

    if not_modified {
        return send_empty(request, 304, headers);
    }
    if is_head_request(&request) {
        return send_empty(request, 200, headers);
    }

    let mut response =
        Response::from_data(served.body.as_bytes().to_vec()).with_status_code(StatusCode(200));
    for header in headers {
        response.add_header(header);
    }
    request.respond(response)?;
    Ok(())
}

/// Respond to a CORS preflight.
pub fn respond_preflight(request: Request) -> Result<()> {
    let headers = [
        header("Access-Control-Allow-Origin", ALLOW_ORIGIN)?,
        header("Access-Control-Allow-Methods", ALLOW_METHODS)?,
    ];
    send_empty(request, 204, headers)
}

/// Respond with a failed compilation pass (500).
pub fn respond_compile_error(request: Request, error: &CompileError) -> Result<()> {
    let body = format!("500 Internal Server Error\n\n{error}");
    send_text(request, 500, body)
}

/// Respond with 404 for paths that name no module.
pub fn respond_not_found(request: Request) -> Result<()> {
    send_text(request, 404, "404 Not Found".to_string())
}

/// Respond with 405 for methods other than GET, HEAD and OPTIONS.
pub fn respond_method_not_allowed(request: Request) -> Result<()> {
    let response = Response::from_string("405 Method Not Allowed")
        .with_status_code(StatusCode(405))
        .with_header(header("Content-Type", PLAIN)?)
        .with_header(header("Allow", ALLOW_METHODS)?);
    request.respond(response)?;
    Ok(())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_text(request, 503, "503 Service Unavailable".to_string())
}

pub fn is_head_request(request: &Request) -> bool {
    request.method() == &Method::Head
}

pub fn is_preflight_request(request: &Request) -> bool {
    request.method() == &Method::Options
}

pub fn is_read_request(request: &Request) -> bool {
    matches!(request.method(), Method::Get | Method::Head)
}

/// Whether the client already holds `served` (`If-None-Match` matches).
pub fn is_not_modified(request: &Request, served: &ServedModule) -> bool {
    if_none_match(request).is_some_and(|tag| served.matches(&tag))
}

/// Value of the `If-None-Match` request header.
fn if_none_match(request: &Request) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv("If-None-Match"))
        .map(|h| h.value.to_string())
}

fn send_empty<const N: usize>(request: Request, status: u16, headers: [Header; N]) -> Result<()> {
    let mut response = Response::empty(StatusCode(status));
    for header in headers {
        response.add_header(header);
    }
    request.respond(response)?;
    Ok(())
}

fn send_text(request: Request, status: u16, body: String) -> Result<()> {
    let response = Response::from_string(body)
        .with_status_code(StatusCode(status))
        .with_header(header("Content-Type", PLAIN)?)
        .with_header(header("Access-Control-Allow-Origin", ALLOW_ORIGIN)?);
    request.respond(response)?;
    Ok(())
}

fn header(key: &str, value: &str) -> Result<Header> {
    Header::from_bytes(key.as_bytes(), value.as_bytes())
        .map_err(|()| anyhow!("invalid header `{key}: {value}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_valid() {
        let etag = header("ETag", "W/\"3-abc\"").unwrap();
        assert!(etag.field.equiv("etag"));
        assert_eq!(etag.value.as_str(), "W/\"3-abc\"");
    }

    #[test]
    fn test_header_rejects_non_ascii() {
        assert!(header("X-Bad", "caf\u{e9}").is_err());
    }
}
