//! Stub DeepLX endpoint shared by the integration tests.
#![allow(dead_code, clippy::unwrap_used)]

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::post;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// A DeepLX stand-in serving one canned response on `POST /translate`.
///
/// Runs on its own thread and runtime so it can back both async client tests
/// and blocking `assert_cmd` runs.
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl StubServer {
    /// Serves `body` with HTTP 200.
    pub fn ok(body: Value) -> Self {
        Self::start(StatusCode::OK, body.to_string())
    }

    /// Serves a raw body with an arbitrary HTTP status.
    pub fn start(status: StatusCode, body: String) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            runtime.block_on(async move {
                let handler = move |Json(payload): Json<Value>| {
                    let recorded = Arc::clone(&recorded);
                    let body = body.clone();
                    async move {
                        recorded.lock().unwrap().push(payload);
                        (status, [(header::CONTENT_TYPE, "application/json")], body)
                    }
                };
                let app = Router::new().route("/translate", post(handler));

                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self {
            url: format!("http://{addr}/translate"),
            requests,
        }
    }

    /// JSON bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// A URL on a port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/translate")
}
