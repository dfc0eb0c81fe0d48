use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InboxEntry {
    pub content_type: Option<String>,
    pub body: String,
}

pub type Inbox = Arc<RwLock<Vec<InboxEntry>>>;

pub fn app() -> Router {
    let inbox: Inbox = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/ping", get(ping))
        .route("/echo", post(echo).put(echo).patch(echo))
        .route("/headers", get(reflect_headers))
        .route("/status/{code}", get(fixed_status))
        .route("/delay/{ms}", get(delay))
        .route("/inbox", post(accept_entry).get(list_entries))
        .with_state(inbox)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> &'static str {
    "pong"
}

async fn echo(body: Bytes) -> Bytes {
    body
}

/// Reflect the request headers as a JSON map; names arrive lowercased from
/// the HTTP layer.
async fn reflect_headers(headers: HeaderMap) -> Json<HashMap<String, String>> {
    let mut map = HashMap::new();
    for (name, value) in headers.iter() {
        if let Ok(v) = value.to_str() {
            map.insert(name.to_string(), v.to_string());
        }
    }
    Json(map)
}

/// Answer with the status code taken from the path and a small marker body.
async fn fixed_status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, format!("status {code}")),
        Err(_) => (StatusCode::BAD_REQUEST, format!("unusable status {code}")),
    }
}

async fn delay(Path(ms): Path<u64>) -> &'static str {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    "done"
}

async fn accept_entry(
    State(inbox): State<Inbox>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, Json<serde_json::Value>) {
    let entry = InboxEntry {
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    let mut entries = inbox.write().await;
    entries.push(entry);
    (
        StatusCode::OK,
        Json(serde_json::json!({ "accepted": true, "count": entries.len() })),
    )
}

async fn list_entries(State(inbox): State<Inbox>) -> Json<Vec<InboxEntry>> {
    let entries = inbox.read().await;
    Json(entries.clone())
}
