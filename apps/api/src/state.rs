use std::sync::Arc;

use crate::aptitude::catalog::AptitudeCatalog;
use crate::bank::dsa::DsaBank;
use crate::bank::interview::InterviewBank;
use crate::upstream::QuestionSink;

/// Shared application state injected into all route handlers via Axum extractors.
/// Banks and the catalog are loaded once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub dsa: Arc<DsaBank>,
    pub interview: Arc<InterviewBank>,
    pub aptitude: Arc<AptitudeCatalog>,
    /// Pluggable draft destination. HTTP when UPSTREAM_API_URL is set, noop otherwise.
    pub question_sink: Arc<dyn QuestionSink>,
}
