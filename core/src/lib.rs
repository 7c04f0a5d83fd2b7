//! Fluent synchronous HTTP client wrapper.
//!
//! # Overview
//! A thin façade over a pooled HTTP transport: configure once, then build
//! requests (query parameters, JSON/form bodies, header overrides), dispatch
//! them, and read the response through one-shot body accessors. Everything
//! hard — connection pooling, TLS, redirects, proxies, timeouts — is
//! delegated to the transport.
//!
//! # Design
//! - [`ClientConfig`] is an explicit record with named setters; building a
//!   [`Client`] freezes it.
//! - Per-call state travels in [`CallOptions`]; requests and responses are
//!   never shared between calls.
//! - Response bodies are consumed at most once; a second accessor returns
//!   [`Error::BodyConsumed`] rather than empty data.
//! - A process-wide default client is built exactly once on first use via
//!   an atomic set-once cell; [`init_default`] reports visibly whether its
//!   configuration took effect instead of discarding it in silence.
//!
//! Errors are returned to the caller, never logged and swallowed. The only
//! logging is a `debug!` pair at the dispatch boundary.

pub mod cancel;
pub mod client;
pub mod config;
pub mod error;
pub mod header;
pub mod mime;
pub mod request;
pub mod response;

use std::sync::OnceLock;

pub use cancel::CancelToken;
pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use request::{append_query, join_url, CallOptions};
pub use response::Response;

// Re-exported transport types callers need at the API surface.
pub use reqwest::blocking::Body;
pub use reqwest::{Method, StatusCode};

static DEFAULT: OnceLock<Client> = OnceLock::new();

/// The process-wide default client, built from `ClientConfig::default()` on
/// first use. Concurrent first calls observe exactly one construction.
///
/// Panics if the default transport cannot be constructed, which only
/// happens when the TLS backend fails to initialize.
pub fn default_client() -> &'static Client {
    DEFAULT.get_or_init(|| {
        Client::new(ClientConfig::default())
            .unwrap_or_else(|e| panic!("failed to build default HTTP client: {e}"))
    })
}

/// Install `config` as the default client if none has been built yet.
///
/// Returns `Ok(true)` when this call installed the client, `Ok(false)` when
/// the default was already materialized — the config is then dropped and the
/// existing client stays untouched. Configuration can never partially apply
/// to an already-built default.
pub fn init_default(config: ClientConfig) -> Result<bool, Error> {
    let client = Client::new(config)?;
    Ok(DEFAULT.set(client).is_ok())
}

pub fn head(path: &str, query: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().head(path, query, opts)
}

pub fn get(path: &str, query: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().get(path, query, opts)
}

pub fn delete(path: &str, query: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().delete(path, query, opts)
}

pub fn patch(path: &str, query: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().patch(path, query, opts)
}

pub fn post(path: &str, body: impl Into<Body>, opts: CallOptions) -> Result<Response, Error> {
    default_client().post(path, body, opts)
}

pub fn post_json<T: serde::Serialize + ?Sized>(
    path: &str,
    body: &T,
    opts: CallOptions,
) -> Result<Response, Error> {
    default_client().post_json(path, body, opts)
}

pub fn post_form(path: &str, form: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().post_form(path, form, opts)
}

pub fn put(path: &str, body: impl Into<Body>, opts: CallOptions) -> Result<Response, Error> {
    default_client().put(path, body, opts)
}

pub fn put_json<T: serde::Serialize + ?Sized>(
    path: &str,
    body: &T,
    opts: CallOptions,
) -> Result<Response, Error> {
    default_client().put_json(path, body, opts)
}

pub fn put_form(path: &str, form: &[(&str, &str)], opts: CallOptions) -> Result<Response, Error> {
    default_client().put_form(path, form, opts)
}

/// Generic dispatch through the default client: any method, optional body.
pub fn request(
    method: Method,
    path: &str,
    body: Option<Body>,
    opts: CallOptions,
) -> Result<Response, Error> {
    default_client().request(method, path, body, opts)
}
