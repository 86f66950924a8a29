//! Tests that drive the router directly, without a socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use house_feed::http::HttpServer;
use tower::ServiceExt;

mod common;

use common::{config_in, TWO_HOUSES};

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_combined_filters() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    std::fs::write(
        &config.input_path,
        r#"[
            {"price": "100", "area": "50", "furnishingstatus": "FURNISHED"},
            {"price": 300, "area": 90, "furnishingstatus": "furnished"},
            {"price": 120, "area": 60, "furnishingstatus": "unfurnished"}
        ]"#,
    )
    .unwrap();
    let router = HttpServer::new(config).router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/?furnished=true&max_price=200")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert_eq!(common::element_texts(&body, "price"), vec!["100"]);
    assert_eq!(common::element_texts(&body, "area"), vec!["50"]);
    assert_eq!(common::element_texts(&body, "furnishingstatus"), vec!["FURNISHED"]);
}

#[tokio::test]
async fn test_unwritable_output_is_generic_500() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir).with_output_path(dir.path().join("missing-dir").join("out.xml"));
    std::fs::write(&config.input_path, TWO_HOUSES).unwrap();
    let router = HttpServer::new(config).router();

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/anything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain; charset=utf-8");
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_text(response).await, "Internal Server Error");
}

#[tokio::test]
async fn test_invalid_utf8_source_is_served() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(&dir);
    let mut source = br#"[{"price": 1, "area": 2, "furnishingstatus": "caf"#.to_vec();
    source.extend_from_slice(&[0xff]);
    source.extend_from_slice(br#""}]"#);
    std::fs::write(&config.input_path, source).unwrap();
    let router = HttpServer::new(config).router();

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert_eq!(common::element_texts(&body, "furnishingstatus"), vec!["caf\u{FFFD}"]);
}
