//! Shared helpers for integration tests.
//!
//! Provides a local stand-in for the completions API that records every
//! request it receives and answers with a canned response.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;

/// A request captured by the mock API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    response: Value,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running mock API server.
pub struct MockApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    /// Start a server answering every engine request with `status` and `response`.
    pub async fn start(status: StatusCode, response: Value) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            response,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/v1/engines/:engine/:action", post(handle_engine_request))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read mock address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{}/v1", addr),
            requests,
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle_engine_request(
    State(state): State<MockState>,
    Path((engine, action)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    state.requests.lock().unwrap().push(RecordedRequest {
        path: format!("/v1/engines/{}/{}", engine, action),
        authorization,
        body,
    });

    (state.status, Json(state.response.clone()))
}
