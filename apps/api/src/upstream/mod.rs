//! Question sink: where validated aptitude drafts are handed off.
//!
//! The question store lives in the external Prep Nexus backend. `HttpQuestionSink`
//! posts drafts to it; `NoopQuestionSink` is used when no backend is configured
//! and only acknowledges the draft.
//!
//! `AppState` holds an `Arc<dyn QuestionSink>`, chosen at startup from config.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::questions::validation::ParsedQuestionDraft;

const ADD_QUESTION_PATH: &str = "/aptitude/questions/add";
const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upstream unavailable after {retries} attempts")]
    Exhausted { retries: u32 },
}

/// Acknowledgement returned for an accepted draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub accepted: bool,
    /// Id assigned by the question service, if one was contacted.
    pub upstream_id: Option<String>,
    pub message: String,
}

#[async_trait]
pub trait QuestionSink: Send + Sync {
    async fn submit(&self, draft: &ParsedQuestionDraft) -> Result<SubmitReceipt, UpstreamError>;

    /// Short name for logs: "http" | "noop".
    fn backend(&self) -> &'static str;
}

pub struct NoopQuestionSink;

#[async_trait]
impl QuestionSink for NoopQuestionSink {
    async fn submit(&self, _draft: &ParsedQuestionDraft) -> Result<SubmitReceipt, UpstreamError> {
        Ok(SubmitReceipt {
            accepted: true,
            upstream_id: None,
            message: "Question validated; no upstream question service configured".to_string(),
        })
    }

    fn backend(&self) -> &'static str {
        "noop"
    }
}

#[derive(Debug, Deserialize)]
struct AddQuestionResponse {
    message: Option<String>,
    question_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    detail: String,
}

#[derive(Clone)]
pub struct HttpQuestionSink {
    client: Client,
    endpoint: String,
    base_backoff: Duration,
}

/// Outcome of a single POST to the question service.
enum Attempt {
    Accepted(SubmitReceipt),
    /// Transient failure (connection error, 429, 5xx); worth another try.
    Retryable(UpstreamError),
    Rejected(UpstreamError),
}

/// Delay before retry number `retry` (1-based): `base`, `2 * base`, `4 * base`, ...
fn backoff_delay(base: Duration, retry: u32) -> Duration {
    base.saturating_mul(1 << retry.saturating_sub(1).min(16))
}

impl HttpQuestionSink {
    pub fn new(base_url: &str) -> Result<Self, UpstreamError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(30)).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ADD_QUESTION_PATH),
            base_backoff: Duration::from_millis(BASE_BACKOFF_MS),
        })
    }

    pub fn with_base_backoff(mut self, base_backoff: Duration) -> Self {
        self.base_backoff = base_backoff;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post_once(&self, draft: &ParsedQuestionDraft) -> Attempt {
        let response = match self.client.post(&self.endpoint).json(draft).send().await {
            Ok(r) => r,
            Err(e) => return Attempt::Retryable(UpstreamError::Http(e)),
        };
        let status = response.status();

        if status.is_success() {
            return match response.json::<AddQuestionResponse>().await {
                Ok(added) => {
                    debug!("Question service accepted draft: {:?}", added.question_id);
                    Attempt::Accepted(SubmitReceipt {
                        accepted: true,
                        upstream_id: added.question_id,
                        message: added
                            .message
                            .unwrap_or_else(|| "Question added successfully".to_string()),
                    })
                }
                Err(e) => Attempt::Rejected(UpstreamError::Http(e)),
            };
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
            warn!("Question service answered {status}: {body}");
            return Attempt::Retryable(UpstreamError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let message = serde_json::from_str::<UpstreamErrorBody>(&body)
            .map(|e| e.detail)
            .unwrap_or(body);
        Attempt::Rejected(UpstreamError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl QuestionSink for HttpQuestionSink {
    /// Up to `MAX_RETRIES` attempts; only transient failures are retried.
    async fn submit(&self, draft: &ParsedQuestionDraft) -> Result<SubmitReceipt, UpstreamError> {
        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.post_once(draft).await {
                Attempt::Accepted(receipt) => return Ok(receipt),
                Attempt::Rejected(e) => return Err(e),
                Attempt::Retryable(e) if attempt < MAX_RETRIES => {
                    let delay = backoff_delay(self.base_backoff, attempt);
                    warn!(
                        "Submit to {} failed ({e}); attempt {attempt}/{MAX_RETRIES}, next in {}ms",
                        self.endpoint,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Attempt::Retryable(e) => last_error = Some(e),
            }
        }

        Err(last_error.unwrap_or(UpstreamError::Exhausted {
            retries: MAX_RETRIES,
        }))
    }

    fn backend(&self) -> &'static str {
        "http"
    }
}
