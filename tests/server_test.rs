#![cfg(feature = "server")]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use rs_feedposts::server::{self, AppState};

const BOUNDARY: &str = "feedpostsboundary";
const SNAPSHOT: &str = include_str!("fixtures/feed_snapshot.html");

fn app() -> Router {
    server::router(Arc::new(AppState::default()), 1024 * 1024)
}

fn multipart_body(name: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
    let disposition = match filename {
        Some(f) => format!("form-data; name=\"{name}\"; filename=\"{f}\""),
        None => format!("form-data; name=\"{name}\""),
    };
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: text/plain\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("valid request")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn index_serves_upload_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("valid request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"action="/upload""#));
    assert!(html.contains(r#"enctype="multipart/form-data""#));
    assert!(html.contains(r#"name="file""#));
}

#[tokio::test]
async fn upload_returns_csv_attachment() {
    let body = multipart_body("file", Some("feed.txt"), SNAPSHOT.as_bytes());
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/csv")
    );
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok()),
        Some("attachment; filename=extracted_posts.csv")
    );

    let csv = body_string(response).await;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("reposter_name,original_poster,original_poster_link,"));
    assert!(lines[2].contains("Acme Robotics"));
    assert!(lines[2].ends_with(",video"));
}

#[tokio::test]
async fn upload_without_posts_returns_header_only() {
    let body = multipart_body("file", Some("empty.txt"), b"<html><body>nothing</body></html>");
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    let csv = body_string(response).await;
    assert_eq!(csv.lines().count(), 1);
}

#[tokio::test]
async fn upload_with_invalid_utf8_still_succeeds() {
    let content = b"<li class=\"JCniPHMkzeWTJVYtYcBxPACGcXOBjlBoflxc\">\xFF\xFE</li>";
    let body = multipart_body("file", Some("feed.txt"), content);
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await.lines().count(), 2);
}

#[tokio::test]
async fn missing_file_field_is_bad_request() {
    let body = multipart_body("note", None, b"hello");
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file found in the request");
}

#[tokio::test]
async fn file_field_without_filename_is_not_a_file() {
    let body = multipart_body("file", None, b"<li>x</li>");
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No file found in the request");
}

#[tokio::test]
async fn empty_filename_is_bad_request() {
    let body = multipart_body("file", Some(""), b"");
    let response = app().oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "No selected file");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let big = vec![b'a'; 4096];
    let body = multipart_body("file", Some("big.txt"), &big);
    let app = server::router(Arc::new(AppState::default()), 1024);
    let response = app.oneshot(upload_request(body)).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn get_on_upload_is_not_allowed() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/upload")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
