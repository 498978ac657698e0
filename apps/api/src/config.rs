use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default except `UPSTREAM_API_URL`, which is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file, or directory of CSV files, holding the DSA bank.
    pub dsa_bank_path: PathBuf,
    pub interview_csv_path: PathBuf,
    pub aptitude_tests_path: PathBuf,
    /// Base URL of the external question service. `None` validates drafts without forwarding.
    pub upstream_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            dsa_bank_path: env_path("DSA_BANK_PATH", "data/dsa_questions.csv"),
            interview_csv_path: env_path("INTERVIEW_CSV_PATH", "data/interview_questions.csv"),
            aptitude_tests_path: env_path("APTITUDE_TESTS_PATH", "data/aptitude_tests.json"),
            upstream_api_url: std::env::var("UPSTREAM_API_URL")
                .ok()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
