//! URL composition and per-call request options.
//!
//! # Design
//! URL joining and query encoding are pure string operations so they can be
//! tested without a client or a network. `CallOptions` carries everything
//! that varies per call: extra headers, basic auth, a cancellation token,
//! and an optional finalizer hook that sees the fully assembled request
//! last.

use reqwest::blocking::Request;

use crate::cancel::CancelToken;
use crate::header;

/// Join a base URL and a path with exactly one `/` between them.
///
/// Strips one trailing slash from a non-empty base; returns the path
/// unchanged when the base is empty. Pure string work, no parsing.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Append percent-encoded query parameters to a URL.
///
/// Joins with `&` when the URL already carries a query string, `?`
/// otherwise. Multi-valued keys are expressed by repeating the key.
pub fn append_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{encoded}")
}

/// Encode key-value pairs as an `application/x-www-form-urlencoded` body.
pub(crate) fn encode_form(pairs: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Hook that receives the fully assembled request and may replace it or
/// abort the call with an error.
pub type Finalizer =
    Box<dyn FnOnce(Request) -> Result<Request, Box<dyn std::error::Error + Send + Sync>> + Send>;

/// Options applied to a single call, created fresh per request and consumed
/// by dispatch.
///
/// Header precedence, lowest to highest: client default headers, the
/// content-type implied by a JSON/form body, headers set here, then the
/// finalizer hook.
#[derive(Default)]
pub struct CallOptions {
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) basic_auth: Option<(String, Option<String>)>,
    pub(crate) cancel: Option<CancelToken>,
    pub(crate) finalize: Option<Finalizer>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header on this request only, overriding any client default of
    /// the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Shorthand for setting the `Content-Type` header.
    pub fn content_type(self, value: impl Into<String>) -> Self {
        self.header(header::CONTENT_TYPE, value)
    }

    /// Send an `Authorization: Basic` header for these credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.basic_auth = Some((username.into(), password.map(str::to_string)));
        self
    }

    /// Carry a cancellation token; checked before dispatch, and a deadline
    /// on the token bounds the transport call.
    pub fn cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run `hook` on the assembled request just before dispatch. The hook
    /// may return a replacement request; an error aborts the call.
    pub fn finalize<F>(mut self, hook: F) -> Self
    where
        F: FnOnce(Request) -> Result<Request, Box<dyn std::error::Error + Send + Sync>>
            + Send
            + 'static,
    {
        self.finalize = Some(Box::new(hook));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_single_slash() {
        assert_eq!(join_url("http://x", "y"), "http://x/y");
        assert_eq!(join_url("http://x", "/y"), "http://x/y");
        assert_eq!(join_url("http://x/", "y"), "http://x/y");
        assert_eq!(join_url("http://x/", "/y"), "http://x/y");
    }

    #[test]
    fn join_with_empty_base_returns_path() {
        assert_eq!(join_url("", "/y"), "/y");
        assert_eq!(join_url("", "http://absolute/z"), "http://absolute/z");
    }

    #[test]
    fn join_with_empty_path_returns_trimmed_base() {
        assert_eq!(join_url("http://x/", ""), "http://x");
        assert_eq!(join_url("http://x", ""), "http://x");
    }

    #[test]
    fn append_query_uses_question_mark_then_ampersand() {
        assert_eq!(
            append_query("http://x/y", &[("QFoo", "bar")]),
            "http://x/y?QFoo=bar"
        );
        assert_eq!(
            append_query("http://x/y?a=1", &[("QFoo", "bar")]),
            "http://x/y?a=1&QFoo=bar"
        );
    }

    #[test]
    fn append_query_without_params_is_identity() {
        assert_eq!(append_query("http://x/y", &[]), "http://x/y");
    }

    #[test]
    fn append_query_percent_encodes() {
        assert_eq!(
            append_query("http://x", &[("q", "a b&c")]),
            "http://x?q=a+b%26c"
        );
    }

    #[test]
    fn append_query_repeats_multi_valued_keys() {
        assert_eq!(
            append_query("http://x", &[("k", "1"), ("k", "2")]),
            "http://x?k=1&k=2"
        );
    }

    #[test]
    fn encode_form_produces_urlencoded_pairs() {
        assert_eq!(encode_form(&[("foo", "bar")]), "foo=bar");
        assert_eq!(encode_form(&[("a", "1"), ("b", "x y")]), "a=1&b=x+y");
    }
}
