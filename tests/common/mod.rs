// Copyright 2026 Sift Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! In-process stand-in for the search service.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use assert_cmd::Command;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use serde_json::Value;
use serde_json::json;

const CORPUS: [(&str, f64); 5] = [
    ("doc42", 0.8765),
    ("doc7", 0.5432),
    ("doc13", 0.3),
    ("doc2", 0.1234),
    ("doc99", 0.05),
];

pub struct MockService {
    pub origin: String,
    hits: Arc<AtomicUsize>,
}

impl MockService {
    pub fn search_hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn search(State(hits): State<Arc<AtomicUsize>>, Json(body): Json<Value>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    let query = body["query"].as_str().unwrap_or_default().to_string();
    let top_k = body["top_k"].as_u64().unwrap_or(3) as usize;
    match query.as_str() {
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "index unavailable"})),
        )
            .into_response(),
        "nothing" => Json(json!({"query": query, "count": 0, "results": []})).into_response(),
        "warming" => Json(json!({"error": "index warming up"})).into_response(),
        _ => {
            let results: Vec<Value> = CORPUS
                .iter()
                .take(top_k)
                .enumerate()
                .map(|(i, (id, score))| json!({"rank": i + 1, "document_id": id, "score": score}))
                .collect();
            Json(json!({"query": query, "count": results.len(), "results": results}))
                .into_response()
        }
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "API is running",
        "documents_loaded": CORPUS.len()
    }))
}

async fn info() -> Json<Value> {
    Json(json!({
        "name": "IR Search API",
        "version": "1.0",
        "endpoints": {
            "/": "Web interface",
            "/health": "Health check",
            "/search": "Search documents (POST)",
            "/api/info": "API info"
        }
    }))
}

/// Serves on an ephemeral port from a background thread for the rest of the
/// test process.
pub fn spawn_service() -> MockService {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/search", post(search))
        .route("/health", get(health))
        .route("/api/info", get(info))
        .with_state(Arc::clone(&hits));

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.set_nonblocking(true).expect("nonblocking");
    let addr = listener.local_addr().expect("addr");
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("listener");
            axum::serve(listener, app).await.expect("serve");
        });
    });

    MockService {
        origin: format!("http://{addr}"),
        hits,
    }
}

/// An origin nothing listens on.
pub fn dead_origin() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn sift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sift"))
}

pub fn sift_cmd_with_env(config_root: &Path) -> Command {
    let mut cmd = sift_cmd();
    cmd.env("XDG_CONFIG_HOME", config_root);
    cmd.env("HOME", config_root);
    cmd.env("APPDATA", config_root);
    cmd
}

pub fn global_config_path(config_root: &Path) -> std::path::PathBuf {
    let base = if cfg!(target_os = "macos") {
        config_root.join("Library").join("Application Support")
    } else {
        config_root.to_path_buf()
    };
    base.join("sift").join("sift.toml")
}

pub fn run_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("run command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("parse json")
}
