#![allow(dead_code)]

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use ai_llm_service::{
    LlmService,
    config::{default_config::persona_chat, speech_config::SpeechConfig},
};
use api::{AppState, build_router};
use axum::{
    Json, Router,
    body::Body,
    extract::{Path as UrlPath, State},
    http::{Method, Request, StatusCode},
    routing::{get, post},
};
use http_body_util::BodyExt;
use persona::{PersonaConfig, build_pipeline};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>Barbarossa</title>";

/// Recorded traffic and canned answers of the fake upstreams.
#[derive(Clone, Default)]
pub struct Upstreams {
    pub wiki_topics: Arc<Mutex<Vec<String>>>,
    pub wiki_extract: Arc<Mutex<Option<String>>>,
    pub chat_bodies: Arc<Mutex<Vec<Value>>>,
    pub chat_answer: Arc<Mutex<Option<String>>>,
    pub tts_bodies: Arc<Mutex<Vec<Value>>>,
    pub tts_reply: Arc<Mutex<Option<Value>>>,
}

impl Upstreams {
    pub fn with_answer(answer: &str) -> Self {
        let u = Self::default();
        *u.chat_answer.lock().unwrap() = Some(answer.to_string());
        u
    }

    pub fn set_extract(&self, extract: &str) {
        *self.wiki_extract.lock().unwrap() = Some(extract.to_string());
    }

    pub fn set_tts_reply(&self, reply: Value) {
        *self.tts_reply.lock().unwrap() = Some(reply);
    }

    pub fn wiki_calls(&self) -> usize {
        self.wiki_topics.lock().unwrap().len()
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_bodies.lock().unwrap().len()
    }

    pub fn user_turn(&self, call: usize) -> String {
        let bodies = self.chat_bodies.lock().unwrap();
        bodies[call]["messages"][1]["content"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

async fn summary(
    State(u): State<Upstreams>,
    UrlPath(topic): UrlPath<String>,
) -> Result<Json<Value>, StatusCode> {
    u.wiki_topics.lock().unwrap().push(topic);
    match u.wiki_extract.lock().unwrap().clone() {
        Some(extract) => Ok(Json(json!({ "extract": extract }))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn chat(
    State(u): State<Upstreams>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, &'static str)> {
    u.chat_bodies.lock().unwrap().push(body);
    match u.chat_answer.lock().unwrap().clone() {
        Some(answer) => Ok(Json(json!({
            "choices": [{ "message": { "role": "assistant", "content": answer } }]
        }))),
        None => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error":{"message":"quota exceeded"}}"#,
        )),
    }
}

async fn speech(
    State(u): State<Upstreams>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    u.tts_bodies.lock().unwrap().push(body);
    u.tts_reply
        .lock()
        .unwrap()
        .clone()
        .map(Json)
        .ok_or(StatusCode::BAD_GATEWAY)
}

/// Serves summary, chat, and speech mocks; returns the base URL.
pub async fn spawn_upstreams(u: Upstreams) -> String {
    let app = Router::new()
        .route("/summary/{topic}", get(summary))
        .route("/v1/chat/completions", post(chat))
        .route("/tts", post(speech))
        .with_state(u);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Front-end directory with an `index.html` and one asset.
pub fn frontend_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("service-worker.js"), "self.x = 1;").unwrap();
    dir
}

pub fn build_test_app(upstream: &str, frontend: &Path) -> Router {
    let llm = Arc::new(LlmService::new(
        persona_chat(upstream, Some("sk-test".into())),
        SpeechConfig {
            endpoint: Some(format!("{upstream}/tts")),
            api_key: Some("tts-test".into()),
            voice: "onyx".into(),
            timeout_secs: Some(5),
        },
    ));
    let pipeline = build_pipeline(
        &PersonaConfig {
            enrichment_url: format!("{upstream}/summary"),
        },
        llm.clone(),
    )
    .unwrap();

    build_router(Arc::new(AppState::new(
        pipeline,
        llm,
        frontend.to_path_buf(),
    )))
}

pub fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// POST without a `content-type` header.
pub fn untyped_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
