//! The client: request assembly and dispatch.
//!
//! # Design
//! `Client` is a concrete struct holding the frozen pieces of its
//! [`ClientConfig`]: the transport handle, the base URL, and the validated
//! default header set. Each verb method funnels into one `send` path:
//! compose the URL, merge headers in precedence order, attach the body, run
//! the finalizer hook, then hand the request to the transport. Nothing is
//! retried or buffered here — the response body stays unread until the
//! caller asks for it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use reqwest::blocking::{Body, Client as HttpClient, Request};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;

use crate::cancel::CancelToken;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::request::{append_query, encode_form, join_url, CallOptions};
use crate::response::Response;
use crate::mime;

/// Synchronous HTTP client with a base URL and default headers.
///
/// Cheap to clone; clones share the same pooled transport. All per-call
/// state lives in [`CallOptions`], so one client is safe to use from many
/// threads at once.
#[derive(Clone, Debug)]
pub struct Client {
    http: HttpClient,
    base_url: String,
    headers: HeaderMap,
}

impl Client {
    /// Build a client from `config`, freezing it. Default-header names and
    /// values recorded in the config are validated here; transport
    /// construction errors surface as [`Error::Build`].
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.clone()))?;
            let parsed_value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.clone()))?;
            headers.insert(parsed_name, parsed_value);
        }

        let http = match config.transport {
            Some(client) => client,
            None => {
                let mut builder = HttpClient::builder()
                    .connect_timeout(std::time::Duration::from_secs(30))
                    .tcp_keepalive(std::time::Duration::from_secs(30))
                    .pool_idle_timeout(std::time::Duration::from_secs(90));
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(policy) = config.redirect {
                    builder = builder.redirect(policy);
                }
                if let Some(jar) = config.cookie_jar {
                    builder = builder.cookie_provider(jar);
                }
                builder.build().map_err(Error::Build)?
            }
        };

        Ok(Self {
            http,
            base_url: config.base_url,
            headers,
        })
    }

    pub fn head(
        &self,
        path: &str,
        query: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::HEAD, path, query, None, None, opts)
    }

    pub fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::GET, path, query, None, None, opts)
    }

    pub fn delete(
        &self,
        path: &str,
        query: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::DELETE, path, query, None, None, opts)
    }

    pub fn patch(
        &self,
        path: &str,
        query: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::PATCH, path, query, None, None, opts)
    }

    /// POST a raw body. The caller sets any content-type it wants via
    /// `opts`.
    pub fn post(
        &self,
        path: &str,
        body: impl Into<Body>,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::POST, path, &[], Some(body.into()), None, opts)
    }

    /// POST `body` serialized as JSON with content-type
    /// `application/json; charset=utf-8`. Serialization failure aborts the
    /// call before any network I/O.
    pub fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send_json(Method::POST, path, body, opts)
    }

    /// POST key-value pairs as an `application/x-www-form-urlencoded` body.
    pub fn post_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send_form(Method::POST, path, form, opts)
    }

    pub fn put(
        &self,
        path: &str,
        body: impl Into<Body>,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(Method::PUT, path, &[], Some(body.into()), None, opts)
    }

    pub fn put_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send_json(Method::PUT, path, body, opts)
    }

    pub fn put_form(
        &self,
        path: &str,
        form: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send_form(Method::PUT, path, form, opts)
    }

    /// Generic entry point: any method, optional raw body.
    pub fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Body>,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        self.send(method, path, &[], body, None, opts)
    }

    fn send_json<T: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &T,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        let buf = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.send(
            method,
            path,
            &[],
            Some(buf.into()),
            Some(mime::APPLICATION_JSON_CHARSET_UTF8),
            opts,
        )
    }

    fn send_form(
        &self,
        method: Method,
        path: &str,
        form: &[(&str, &str)],
        opts: CallOptions,
    ) -> Result<Response, Error> {
        let encoded = encode_form(form);
        self.send(
            method,
            path,
            &[],
            Some(encoded.into()),
            Some(mime::APPLICATION_FORM),
            opts,
        )
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Body>,
        content_type: Option<&str>,
        opts: CallOptions,
    ) -> Result<Response, Error> {
        let (request, cancel) = self.build(method, path, query, body, content_type, opts)?;
        self.dispatch(request, cancel.as_ref())
    }

    /// Assemble the outbound request. Header precedence, lowest to highest:
    /// client defaults, body-derived content-type, per-call headers, basic
    /// auth, then the finalizer hook, which sees the finished request last.
    /// Same-named entries replace; a header never reaches the wire twice
    /// because two layers both set it.
    fn build(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Body>,
        content_type: Option<&str>,
        opts: CallOptions,
    ) -> Result<(Request, Option<CancelToken>), Error> {
        let CallOptions {
            headers,
            basic_auth,
            cancel,
            finalize,
        } = opts;

        // Merged into one map with insert (replace) semantics: appending
        // here would put both the default and the override on the wire.
        let mut merged = self.headers.clone();
        if let Some(value) = content_type {
            let value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(value.to_string()))?;
            merged.insert(CONTENT_TYPE, value);
        }
        for (name, value) in &headers {
            let parsed_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.clone()))?;
            let parsed_value =
                HeaderValue::from_str(value).map_err(|_| Error::InvalidHeader(name.clone()))?;
            merged.insert(parsed_name, parsed_value);
        }
        if let Some((username, password)) = &basic_auth {
            let token = STANDARD.encode(format!(
                "{username}:{}",
                password.as_deref().unwrap_or_default()
            ));
            let mut value = HeaderValue::from_str(&format!("Basic {token}"))
                .map_err(|_| Error::InvalidHeader(AUTHORIZATION.to_string()))?;
            value.set_sensitive(true);
            merged.insert(AUTHORIZATION, value);
        }

        let url = append_query(&join_url(&self.base_url, path), query);
        let mut builder = self.http.request(method, url).headers(merged);

        if let Some(remaining) = cancel.as_ref().and_then(CancelToken::remaining) {
            // Deadline expiry mid-flight aborts through the request timeout.
            builder = builder.timeout(remaining);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let mut request = builder.build().map_err(Error::Build)?;
        if let Some(hook) = finalize {
            request = hook(request).map_err(Error::Finalize)?;
        }
        Ok((request, cancel))
    }

    fn dispatch(
        &self,
        request: Request,
        cancel: Option<&CancelToken>,
    ) -> Result<Response, Error> {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(Error::Cancelled);
        }
        debug!("dispatching {} {}", request.method(), request.url());
        let raw = self.http.execute(request).map_err(Error::Transport)?;
        debug!("received {} from {}", raw.status(), raw.url());
        Ok(Response::new(raw))
    }
}
