//! Error types for the request client.
//!
//! # Design
//! One flat enum covering the three places a call can fail: building the
//! request (before any network I/O), the transport round-trip, and consuming
//! the response body. Every variant is returned synchronously to the caller;
//! nothing is retried, logged-and-swallowed, or downgraded internally.

use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) calls and
/// [`Response`](crate::Response) accessors.
#[derive(Debug, Error)]
pub enum Error {
    /// A default or per-call header name or value is not valid HTTP.
    ///
    /// Surfaces from [`Client::new`](crate::Client::new) or at request
    /// assembly, not from the setter that recorded the bad value.
    #[error("invalid header {0:?}")]
    InvalidHeader(String),

    /// The request could not be assembled (malformed URL, bad header).
    #[error("failed to build request: {0}")]
    Build(#[source] reqwest::Error),

    /// The JSON body could not be serialized. The call aborts before any
    /// network I/O.
    #[error("failed to encode json body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A per-call finalizer hook rejected the assembled request.
    #[error("request finalizer failed: {0}")]
    Finalize(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The call's [`CancelToken`](crate::CancelToken) was cancelled or its
    /// deadline had passed before dispatch.
    #[error("request cancelled before completion")]
    Cancelled,

    /// The transport reported a failure (connection refused, timeout, TLS).
    /// Surfaced verbatim, never retried.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// A body accessor was called after the body stream was already drained
    /// or closed.
    #[error("response body already consumed")]
    BodyConsumed,

    /// Reading the response body from the wire failed.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The response body is not valid JSON for the requested target type.
    #[error("failed to decode json body: {0}")]
    Decode(#[source] serde_json::Error),
}
