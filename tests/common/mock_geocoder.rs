//! Mock HTTP server standing in for the geocoding and IP location APIs.

#![allow(dead_code)]

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: Value,
}

impl MockReply {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": "mock failure" }),
        }
    }
}

#[derive(Clone)]
struct MockState {
    reply: Arc<Mutex<MockReply>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub struct MockGeocoder {
    pub addr: SocketAddr,
    state: MockState,
}

impl MockGeocoder {
    pub async fn start(reply: MockReply) -> Self {
        let state = MockState {
            reply: Arc::new(Mutex::new(reply)),
            queries: Arc::new(Mutex::new(Vec::new())),
        };
        let router = Router::new()
            .route("/maps/api/geocode/json", get(handle))
            .route("/json", get(handle))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Query strings received so far.
    pub async fn queries(&self) -> Vec<HashMap<String, String>> {
        self.state.queries.lock().await.clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    state.queries.lock().await.push(params);
    let reply = state.reply.lock().await.clone();
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply.body))
}
