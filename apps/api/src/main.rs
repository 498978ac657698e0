use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use prepnexus::aptitude::catalog::AptitudeCatalog;
use prepnexus::bank::loader::{load_dsa_bank, load_interview_bank};
use prepnexus::config::Config;
use prepnexus::upstream::{HttpQuestionSink, NoopQuestionSink, QuestionSink};
use prepnexus::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Prep Nexus API v{}", env!("CARGO_PKG_VERSION"));

    // Static question assets
    let dsa = load_dsa_bank(&config.dsa_bank_path).await?;
    let interview = load_interview_bank(&config.interview_csv_path).await?;
    let aptitude = AptitudeCatalog::load(&config.aptitude_tests_path).await?;

    // Question sink (HTTP when an upstream is configured)
    let question_sink: Arc<dyn QuestionSink> = match &config.upstream_api_url {
        Some(url) => {
            let sink = HttpQuestionSink::new(url)?;
            info!("Forwarding aptitude questions to {}", sink.endpoint());
            Arc::new(sink)
        }
        None => {
            info!("UPSTREAM_API_URL not set; aptitude questions are validated only");
            Arc::new(NoopQuestionSink)
        }
    };

    let state = AppState {
        dsa: Arc::new(dsa),
        interview: Arc::new(interview),
        aptitude: Arc::new(aptitude),
        question_sink,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
