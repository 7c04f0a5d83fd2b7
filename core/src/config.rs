//! Client configuration.
//!
//! # Design
//! `ClientConfig` is an explicit record with named builder-style setters.
//! Setters are pure mutators and perform no validation; a bad header or URL
//! only surfaces when the client is built or the request is dispatched.
//! Once [`Client::new`](crate::Client::new) consumes the config it is
//! frozen — there is no mutation API on a built client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::cookie::Jar;
use reqwest::redirect;

/// Settings applied once at [`Client`](crate::Client) construction.
///
/// The defaults delegate everything hard to the transport: pooled
/// connections, proxy from environment, a 30s whole-request timeout.
#[derive(Debug, Default)]
pub struct ClientConfig {
    pub(crate) base_url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) redirect: Option<redirect::Policy>,
    pub(crate) cookie_jar: Option<Arc<Jar>>,
    pub(crate) transport: Option<HttpClient>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// URL prefix joined with every per-call path. May stay empty, in which
    /// case paths are used as-is.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = base.into();
        self
    }

    /// Add a header sent with every request. Setting the same name again
    /// overwrites; per-call headers take precedence over these.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Whole-request time limit, connect through body. Overrides the 30s
    /// default the transport ships with.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Redirect-handling policy, including `redirect::Policy::custom`
    /// check functions.
    pub fn redirect(mut self, policy: redirect::Policy) -> Self {
        self.redirect = Some(policy);
        self
    }

    /// Cookie store shared by all requests of the built client.
    pub fn cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Use a pre-built transport instead of constructing one. When set, the
    /// `timeout`, `redirect` and `cookie_jar` fields are ignored — the
    /// handle is opaque to this layer and already carries its own policy.
    pub fn transport(mut self, client: HttpClient) -> Self {
        self.transport = Some(client);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_record_without_validating() {
        let config = ClientConfig::new()
            .base_url("http://localhost:9")
            .default_header("X-Probe", "1")
            .default_header("not a header name", "\0")
            .timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:9");
        assert_eq!(config.headers.len(), 2);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
