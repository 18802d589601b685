use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;
use upload_client::{
    ClientError, HttpTransport, RequestState, TranscriptionClient, UploadSelection, UploadTransport,
};

const OVERLOADED_MESSAGE: &str =
    "Error from transcription service: Service Unavailable - model overloaded";

type Received = Arc<Mutex<Vec<(String, Option<String>, Option<String>, Vec<u8>)>>>;

async fn relay_stub(State(received): State<Received>, mut multipart: Multipart) -> Response {
    while let Some(field) = multipart.next_field().await.expect("field") {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let content = field.bytes().await.expect("bytes").to_vec();
        received
            .lock()
            .expect("lock")
            .push((name, file_name, content_type, content));
    }
    Json(json!({"transcription": "bonjour"})).into_response()
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub runs");
    });
    format!("http://{addr}/api/transcribe")
}

#[tokio::test]
async fn upload_is_sent_as_single_file_field() {
    let received: Received = Arc::default();
    let endpoint = spawn(
        Router::new()
            .route("/api/transcribe", post(relay_stub))
            .with_state(received.clone()),
    )
    .await;
    let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).expect("transport");
    let client = TranscriptionClient::new(Arc::new(transport));
    let content: Vec<u8> = (0..=255u8).collect();

    let state = client
        .upload(&UploadSelection::new("greeting.ogg", content.clone()))
        .await;

    assert_eq!(
        state,
        RequestState::Succeeded {
            transcription: "bonjour".to_string()
        }
    );
    let received = received.lock().expect("lock");
    assert_eq!(received.len(), 1);
    let (field, file_name, content_type, bytes) = &received[0];
    assert_eq!(field, "file");
    assert_eq!(file_name.as_deref(), Some("greeting.ogg"));
    assert_eq!(content_type.as_deref(), Some("audio/ogg"));
    assert_eq!(bytes, &content);
}

#[tokio::test]
async fn relay_error_body_becomes_failure_message() {
    let endpoint = spawn(Router::new().route(
        "/api/transcribe",
        post(|| async {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"message": OVERLOADED_MESSAGE})),
            )
        }),
    ))
    .await;
    let transport = HttpTransport::new(endpoint, Duration::from_secs(5)).expect("transport");
    let client = TranscriptionClient::new(Arc::new(transport));

    let state = client
        .upload(&UploadSelection::new("a.wav", vec![0; 4]))
        .await;

    match state {
        RequestState::Failed { message } => assert!(message.contains("model overloaded")),
        other => panic!("unexpected state: {other:?}"),
    }
}

#[tokio::test]
async fn slow_relay_times_out() {
    let endpoint = spawn(Router::new().route(
        "/api/transcribe",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            "late"
        }),
    ))
    .await;
    let transport = HttpTransport::new(endpoint, Duration::from_millis(100)).expect("transport");

    let error = transport
        .send(&UploadSelection::new("a.wav", vec![0; 4]))
        .await
        .expect_err("must time out");

    assert!(matches!(error, ClientError::Timeout));
}
