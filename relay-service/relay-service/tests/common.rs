#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use relay_configuration::AppConfig;
use relay_setup::Application;

#[derive(Clone)]
pub enum StubReply {
    Json(StatusCode, Value),
    Text(StatusCode, &'static str),
    /// Answers `{ "transcription": <received file name> }`.
    EchoFileName,
}

#[derive(Debug, Clone)]
pub struct ReceivedFile {
    pub file_name: Option<String>,
    pub content: Vec<u8>,
}

#[derive(Clone)]
struct StubShared {
    reply: StubReply,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<ReceivedFile>>>,
}

pub struct StubBackend {
    pub url: String,
    calls: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<ReceivedFile>>>,
}

impl StubBackend {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ReceivedFile> {
        self.received.lock().expect("lock").clone()
    }
}

async fn stub_predict(State(stub): State<StubShared>, mut multipart: Multipart) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    let mut received_name = None;
    while let Some(field) = multipart.next_field().await.expect("stub multipart field") {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content = field.bytes().await.expect("stub field bytes").to_vec();
        received_name = file_name.clone();
        stub.received
            .lock()
            .expect("lock")
            .push(ReceivedFile { file_name, content });
    }

    match stub.reply {
        StubReply::Json(status, body) => (status, Json(body)).into_response(),
        StubReply::Text(status, body) => (status, body).into_response(),
        StubReply::EchoFileName => {
            Json(json!({ "transcription": received_name.unwrap_or_default() })).into_response()
        }
    }
}

async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server runs");
    });
    addr
}

pub async fn spawn_stub_backend(reply: StubReply) -> StubBackend {
    let calls = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(Vec::new()));
    let shared = StubShared {
        reply,
        calls: calls.clone(),
        received: received.clone(),
    };
    let addr = spawn_router(
        Router::new()
            .route("/predict", post(stub_predict))
            .with_state(shared),
    )
    .await;
    StubBackend {
        url: format!("http://{addr}/predict"),
        calls,
        received,
    }
}

pub async fn spawn_relay(backend_url: &str) -> String {
    let mut config = AppConfig::default();
    config.service.backend.url = backend_url.to_string();
    spawn_relay_with(config).await
}

pub async fn spawn_relay_with(config: AppConfig) -> String {
    let app = Application::new(config).await.expect("relay builds");
    let addr = spawn_router(app.router()).await;
    format!("http://{addr}")
}

pub fn audio_form(file_name: &str, content: Vec<u8>) -> Form {
    let part = Part::bytes(content)
        .file_name(file_name.to_string())
        .mime_str("audio/wav")
        .expect("valid mime");
    Form::new().part("file", part)
}

pub async fn post_form(base_url: &str, form: Form) -> (StatusCode, Value) {
    let response = reqwest::Client::new()
        .post(format!("{base_url}/api/transcribe"))
        .multipart(form)
        .send()
        .await
        .expect("relay reachable");
    let status = StatusCode::from_u16(response.status().as_u16()).expect("status");
    let body = response.json::<Value>().await.expect("json body");
    (status, body)
}
