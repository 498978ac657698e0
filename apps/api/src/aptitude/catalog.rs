use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::questions::validation::{ParsedQuestionDraft, QuestionValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptitudeQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<TestOption>,
    /// Id of the correct option. Never sent to test takers.
    #[serde(skip_serializing)]
    pub correct_answer: String,
}

impl AptitudeQuestion {
    /// Builds a test question from a validated draft. The draft must carry
    /// exactly one correct option; its id becomes `correct_answer`.
    pub fn from_draft(
        id: impl Into<String>,
        draft: &ParsedQuestionDraft,
    ) -> Result<Self, QuestionValidationError> {
        let correct = draft.options.iter().filter(|o| o.is_correct).count();
        let correct_answer = match draft.correct_option() {
            Some(option) if correct == 1 => option.id.clone(),
            _ => {
                return Err(QuestionValidationError::AmbiguousOrMissingCorrectAnswer { correct })
            }
        };

        Ok(Self {
            id: id.into(),
            question: draft.question_text.clone(),
            options: draft
                .options
                .iter()
                .map(|o| TestOption {
                    id: o.id.clone(),
                    text: o.text.clone(),
                })
                .collect(),
            correct_answer,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AptitudeTest {
    pub id: String,
    pub title: String,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub questions: Vec<AptitudeQuestion>,
}

/// Aptitude tests keyed by id, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct AptitudeCatalog {
    tests: HashMap<String, AptitudeTest>,
}

impl AptitudeCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let tests: HashMap<String, AptitudeTest> =
            serde_json::from_str(json).context("Aptitude tests file is not valid JSON")?;
        Ok(Self { tests })
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let json = match tokio::fs::read_to_string(path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!("Aptitude tests not found at {}; no tests available", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read aptitude tests {}", path.display()))
            }
        };

        let catalog = Self::from_json(&json)?;
        info!("Loaded {} aptitude tests from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&AptitudeTest> {
        self.tests.get(id)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
