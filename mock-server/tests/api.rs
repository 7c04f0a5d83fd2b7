use axum::body::Body;
use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Echo};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Echo {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn every_path_is_echoed() {
    let resp = app()
        .oneshot(Request::builder().uri("/any/deep/path").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let echo = body_json(resp).await;
    assert_eq!(echo.path, "/any/deep/path");
    assert_eq!(echo.method, "GET");
    assert!(echo.body.is_empty());
}

#[tokio::test]
async fn content_type_header_is_reported() {
    let resp = app()
        .oneshot(json_request("POST", "/items", r#"{"foo":"bar"}"#))
        .await
        .unwrap();

    let echo = body_json(resp).await;
    assert_eq!(
        echo.headers.get("content-type"),
        Some(&vec!["application/json".to_string()])
    );
    assert_eq!(echo.body, r#"{"foo":"bar"}"#);
}

#[tokio::test]
async fn query_string_is_preserved_raw() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/search?q=a+b%26c&page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let echo = body_json(resp).await;
    // Raw, undecoded: the client tests do their own decoding.
    assert_eq!(echo.query.as_deref(), Some("q=a+b%26c&page=2"));
}

#[tokio::test]
async fn delete_without_body_is_echoed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/items/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let echo = body_json(resp).await;
    assert_eq!(echo.method, "DELETE");
    assert_eq!(echo.path, "/items/7");
    assert!(echo.query.is_none());
}
