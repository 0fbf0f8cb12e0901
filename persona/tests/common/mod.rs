#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

/// What the fake upstreams saw and should answer.
#[derive(Clone, Default)]
pub struct Upstreams {
    pub wiki_topics: Arc<Mutex<Vec<String>>>,
    pub wiki_extract: Arc<Mutex<Option<String>>>,
    pub chat_bodies: Arc<Mutex<Vec<Value>>>,
    pub chat_answer: Arc<Mutex<Option<String>>>,
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

    pub fn wiki_calls(&self) -> usize {
        self.wiki_topics.lock().unwrap().len()
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_bodies.lock().unwrap().len()
    }

    pub fn last_user_turn(&self) -> String {
        let bodies = self.chat_bodies.lock().unwrap();
        let last = bodies.last().expect("no chat call recorded");
        last["messages"][1]["content"].as_str().unwrap().to_string()
    }
}

async fn summary(
    State(u): State<Upstreams>,
    Path(topic): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    u.wiki_topics.lock().unwrap().push(topic);
    match u.wiki_extract.lock().unwrap().clone() {
        Some(extract) => Ok(Json(json!({ "extract": extract }))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn chat(State(u): State<Upstreams>, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    u.chat_bodies.lock().unwrap().push(body);
    match u.chat_answer.lock().unwrap().clone() {
        Some(answer) => Ok(Json(json!({
            "choices": [{ "message": { "content": answer } }]
        }))),
        None => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// Serves `/summary/{topic}` and `/v1/chat/completions`; returns the base URL.
pub async fn spawn_upstreams(u: Upstreams) -> String {
    let app = Router::new()
        .route("/summary/{topic}", get(summary))
        .route("/v1/chat/completions", post(chat))
        .with_state(u);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
