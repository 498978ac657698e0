#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
    Json, Router,
};
use prepnexus::aptitude::catalog::AptitudeCatalog;
use prepnexus::bank::loader::{load_dsa_bank, load_interview_bank};
use prepnexus::questions::validation::ParsedQuestionDraft;
use prepnexus::upstream::{QuestionSink, SubmitReceipt, UpstreamError};
use prepnexus::{build_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Sink that keeps every submitted draft in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub drafts: Mutex<Vec<ParsedQuestionDraft>>,
}

#[async_trait]
impl QuestionSink for RecordingSink {
    async fn submit(&self, draft: &ParsedQuestionDraft) -> Result<SubmitReceipt, UpstreamError> {
        let mut drafts = self.drafts.lock().expect("sink lock poisoned");
        drafts.push(draft.clone());
        Ok(SubmitReceipt {
            accepted: true,
            upstream_id: Some(format!("q{}", drafts.len())),
            message: "Question added successfully".to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}

pub fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

pub async fn app_with_sink(sink: Arc<dyn QuestionSink>) -> Router {
    let state = AppState {
        dsa: Arc::new(
            load_dsa_bank(&data_path("dsa_questions.csv"))
                .await
                .expect("load dsa bank"),
        ),
        interview: Arc::new(
            load_interview_bank(&data_path("interview_questions.csv"))
                .await
                .expect("load interview bank"),
        ),
        aptitude: Arc::new(
            AptitudeCatalog::load(&data_path("aptitude_tests.json"))
                .await
                .expect("load aptitude tests"),
        ),
        question_sink: sink,
    };
    build_router(state)
}

/// Stand-in question service that answers every add request the same way.
pub async fn spawn_question_service(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/aptitude/questions/add",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub service");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move { axum::serve(listener, app).await });
    format!("http://{addr}")
}

pub async fn app() -> Router {
    app_with_sink(Arc::new(RecordingSink::default())).await
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed")
}
