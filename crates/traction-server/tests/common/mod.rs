#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tower::util::ServiceExt;
use traction_ai::{ChatMessage, CompletionClient};
use traction_server::app;
use traction_server::config::ServerConfig;
use traction_server::state::AppState;
use traction_storage::ReportStore;

/// 可编程的补全客户端：按预设返回固定文本或失败，并记录收到的调用。
pub struct MockCompletionClient {
    behavior: Mutex<MockBehavior>,
    pub calls: Mutex<Vec<RecordedCall>>,
}

enum MockBehavior {
    Respond(String),
    Fail(String),
}

#[derive(Clone)]
pub struct RecordedCall {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub max_tokens: u32,
}

impl MockCompletionClient {
    pub fn respond_with(text: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Mutex::new(MockBehavior::Respond(text.to_string())),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn set_response(&self, text: &str) {
        *self.behavior.lock().expect("behavior lock") = MockBehavior::Respond(text.to_string());
    }

    pub fn set_failure(&self, message: &str) {
        *self.behavior.lock().expect("behavior lock") = MockBehavior::Fail(message.to_string());
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    fn provider(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        messages: &[ChatMessage],
        model: &str,
        max_tokens: u32,
    ) -> Result<String> {
        self.calls.lock().expect("calls lock").push(RecordedCall {
            messages: messages.to_vec(),
            model: model.to_string(),
            max_tokens,
        });
        match &*self.behavior.lock().expect("behavior lock") {
            MockBehavior::Respond(text) => Ok(text.clone()),
            MockBehavior::Fail(message) => Err(anyhow::anyhow!("{message}")),
        }
    }
}

pub struct TestContext {
    pub temp_dir: TempDir,
    pub state: AppState,
    pub app: axum::Router,
    pub completion: Arc<MockCompletionClient>,
}

pub async fn build_test_context() -> Result<TestContext> {
    traction_common::id::init(1, 1);

    let temp_dir = tempfile::tempdir()?;
    let db_url = format!(
        "sqlite://{}/reports.db?mode=rwc",
        temp_dir.path().to_string_lossy()
    );
    let report_store = Arc::new(ReportStore::new(&db_url).await?);

    let config: ServerConfig = toml::from_str("").expect("default config should parse");
    let completion = MockCompletionClient::respond_with("Solid idea. Rating: 8/10.");

    let state = AppState {
        report_store,
        completion: completion.clone(),
        start_time: Utc::now(),
        config: Arc::new(config),
    };

    let app = app::build_http_app(state.clone());

    Ok(TestContext {
        temp_dir,
        state,
        app,
        completion,
    })
}

pub async fn request_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value, Option<String>) {
    let req_body = body.unwrap_or(Value::Null).to_string();
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(req_body))
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");

    let status = resp.status();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json, trace_id)
}

pub async fn request_no_body(
    app: &axum::Router,
    method: &str,
    uri: &str,
) -> (StatusCode, Value, Option<String>) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("request should be handled");
    let status = resp.status();
    let trace_id = resp
        .headers()
        .get("x-trace-id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };

    (status, json, trace_id)
}
