//! HTTP echo server backing the client integration tests.
//!
//! Every request, any method and any path, is answered with a JSON document
//! describing what arrived on the wire: method, path, raw query string,
//! headers, and body. Client tests assert against this report instead of
//! trusting the client's own bookkeeping.

use std::collections::BTreeMap;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, Uri};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// What the server observed for one request. Header names are lowercased
/// (hyper normalization); a header sent twice reports two values, so
/// clients can assert that an override displaced a default instead of
/// riding along with it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: BTreeMap<String, Vec<String>>,
    pub body: String,
}

pub fn app() -> Router {
    Router::new().fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Echo> {
    let mut seen: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        seen.entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }

    Json(Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers: seen,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn echo_for(request: Request<Body>) -> Echo {
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn reports_method_path_and_query() {
        let request = Request::builder()
            .method("POST")
            .uri("/widgets?a=1&a=2")
            .body(Body::from("hello"))
            .unwrap();
        let echo = echo_for(request).await;
        assert_eq!(echo.method, "POST");
        assert_eq!(echo.path, "/widgets");
        assert_eq!(echo.query.as_deref(), Some("a=1&a=2"));
        assert_eq!(echo.body, "hello");
    }

    #[tokio::test]
    async fn reports_headers_lowercased() {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .header("X-Probe", "yes")
            .body(Body::empty())
            .unwrap();
        let echo = echo_for(request).await;
        assert_eq!(echo.headers.get("x-probe"), Some(&vec!["yes".to_string()]));
    }

    #[tokio::test]
    async fn repeated_header_reports_every_value() {
        let request = Request::builder()
            .method("GET")
            .uri("/")
            .header("X-Probe", "one")
            .header("X-Probe", "two")
            .body(Body::empty())
            .unwrap();
        let echo = echo_for(request).await;
        assert_eq!(
            echo.headers.get("x-probe"),
            Some(&vec!["one".to_string(), "two".to_string()])
        );
    }

    #[tokio::test]
    async fn answers_arbitrary_methods() {
        let request = Request::builder()
            .method("PURGE")
            .uri("/cache/item")
            .body(Body::empty())
            .unwrap();
        let echo = echo_for(request).await;
        assert_eq!(echo.method, "PURGE");
        assert_eq!(echo.path, "/cache/item");
        assert!(echo.query.is_none());
    }

    #[test]
    fn echo_roundtrips_through_json() {
        let echo = Echo {
            method: "GET".to_string(),
            path: "/x".to_string(),
            query: Some("a=1".to_string()),
            headers: BTreeMap::from([("host".to_string(), vec!["local".to_string()])]),
            body: String::new(),
        };
        let json = serde_json::to_string(&echo).unwrap();
        let back: Echo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.method, echo.method);
        assert_eq!(back.query, echo.query);
        assert_eq!(back.headers, echo.headers);
    }
}
