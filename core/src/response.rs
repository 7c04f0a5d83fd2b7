//! Response wrapper with at-most-once body consumption.
//!
//! # Design
//! Status, headers and final URL are captured at wrap time so they stay
//! readable forever. The body is held as `Option<reqwest::blocking::Response>`
//! and taken by the first of `bytes`/`text`/`json` to run; later accessors
//! get [`Error::BodyConsumed`] instead of silently empty data. No caching of
//! the drained body — the original contract makes no such guarantee and
//! adding it here would hide double-consumption bugs.

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// A dispatched call's response. Body accessors consume the underlying
/// stream exactly once.
#[derive(Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Option<reqwest::blocking::Response>,
}

impl Response {
    pub(crate) fn new(raw: reqwest::blocking::Response) -> Self {
        Self {
            status: raw.status(),
            headers: raw.headers().clone(),
            url: raw.url().clone(),
            body: Some(raw),
        }
    }

    /// Status code; always available, never consumes anything.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers as received.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Final URL of the response (after any redirects).
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Drain the body into a byte vector and release the stream.
    pub fn bytes(&mut self) -> Result<Vec<u8>, Error> {
        let raw = self.take()?;
        let buf = raw.bytes().map_err(Error::Read)?;
        Ok(buf.to_vec())
    }

    /// Drain the body as text, honoring the response charset.
    pub fn text(&mut self) -> Result<String, Error> {
        self.take()?.text().map_err(Error::Read)
    }

    /// Drain the body and decode it as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&mut self) -> Result<T, Error> {
        let raw = self.take()?;
        let buf = raw.bytes().map_err(Error::Read)?;
        serde_json::from_slice(&buf).map_err(Error::Decode)
    }

    /// Release the body without reading it. Safe to call repeatedly, and
    /// after any accessor already drained the stream.
    pub fn close(&mut self) {
        self.body.take();
    }

    fn take(&mut self) -> Result<reqwest::blocking::Response, Error> {
        self.body.take().ok_or(Error::BodyConsumed)
    }
}
