use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, InboxEntry};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- ping ---

#[tokio::test]
async fn ping_answers_with_a_body() {
    let app = app();
    let resp = app.oneshot(get_request("/ping")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"pong");
}

// --- echo ---

#[tokio::test]
async fn echo_reflects_a_posted_body() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/echo", r#"{"hello":"world"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], br#"{"hello":"world"}"#);
}

#[tokio::test]
async fn echo_accepts_put_and_patch() {
    for method in ["PUT", "PATCH"] {
        let app = app();
        let resp = app
            .oneshot(json_request(method, "/echo", "payload"))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "method {method}");
        assert_eq!(&body_bytes(resp).await[..], b"payload", "method {method}");
    }
}

// --- headers ---

#[tokio::test]
async fn headers_route_reflects_custom_headers() {
    let app = app();
    let req = Request::builder()
        .uri("/headers")
        .header("X-Probe", "one")
        .header("X-Other", "two")
        .body(String::new())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let map: std::collections::HashMap<String, String> = body_json(resp).await;
    assert_eq!(map.get("x-probe").map(String::as_str), Some("one"));
    assert_eq!(map.get("x-other").map(String::as_str), Some("two"));
}

// --- status ---

#[tokio::test]
async fn status_route_answers_the_requested_code() {
    let app = app();
    let resp = app.oneshot(get_request("/status/503")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(&body_bytes(resp).await[..], b"status 503");
}

#[tokio::test]
async fn status_route_rejects_an_unusable_code() {
    let app = app();
    let resp = app.oneshot(get_request("/status/99")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delay ---

#[tokio::test]
async fn delay_route_answers_after_sleeping() {
    let app = app();
    let resp = app.oneshot(get_request("/delay/0")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(&body_bytes(resp).await[..], b"done");
}

// --- inbox ---

#[tokio::test]
async fn inbox_starts_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/inbox")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<InboxEntry> = body_json(resp).await;
    assert!(entries.is_empty());
}

#[tokio::test]
async fn inbox_stores_and_lists_submissions() {
    use tower::Service;

    let mut app = app().into_service();

    // submit one JSON payload
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/inbox", r#"{"probe":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ack: serde_json::Value = body_json(resp).await;
    assert_eq!(ack["accepted"], true);
    assert_eq!(ack["count"], 1);

    // the listing shows it, content type included
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/inbox"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let entries: Vec<InboxEntry> = body_json(resp).await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(entries[0].body, r#"{"probe":1}"#);
}

#[tokio::test]
async fn inbox_accepts_bodies_without_content_type() {
    use tower::Service;

    let mut app = app().into_service();

    let req = Request::builder()
        .method("POST")
        .uri("/inbox")
        .body("raw bytes".to_string())
        .unwrap();
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(req)
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get_request("/inbox"))
        .await
        .unwrap();
    let entries: Vec<InboxEntry> = body_json(resp).await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].content_type.is_none());
    assert_eq!(entries[0].body, "raw bytes");
}
