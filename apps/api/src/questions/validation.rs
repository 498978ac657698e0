use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::questions::options::{
    extract_options_detailed, AnswerOption, CorrectSource, OptionExtraction,
};

/// Number of answer choices an aptitude question must carry.
pub const EXPECTED_OPTION_COUNT: usize = 4;

/// Why a question form cannot be submitted. Checked in declaration order;
/// the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionValidationError {
    #[error("Please enter the question text")]
    EmptyQuestionText,

    #[error("Please enter the answer options")]
    EmptyOptionsText,

    #[error("No options detected. Use the format: (A) option1 (B) option2 (C) option3 (D) option4")]
    NoOptionsDetected,

    #[error("Expected exactly 4 options, found {found}")]
    WrongOptionCount { found: usize },

    #[error("Option(s) {} have no text after removing the correct marker", .ids.join(", "))]
    EmptyOptionBody { ids: Vec<String> },

    #[error("Exactly one option must be marked correct, found {correct}")]
    AmbiguousOrMissingCorrectAnswer { correct: usize },
}

impl QuestionValidationError {
    /// Stable machine-readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyQuestionText => "EMPTY_QUESTION_TEXT",
            Self::EmptyOptionsText => "EMPTY_OPTIONS_TEXT",
            Self::NoOptionsDetected => "NO_OPTIONS_DETECTED",
            Self::WrongOptionCount { .. } => "WRONG_OPTION_COUNT",
            Self::EmptyOptionBody { .. } => "EMPTY_OPTION_BODY",
            Self::AmbiguousOrMissingCorrectAnswer { .. } => "AMBIGUOUS_CORRECT_ANSWER",
        }
    }
}

fn default_category() -> String {
    "Numerical".to_string()
}

fn default_difficulty() -> String {
    "Medium".to_string()
}

fn default_time_limit() -> u32 {
    90
}

fn default_points() -> u32 {
    5
}

/// Raw question form as submitted by the admin editor.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question_text: String,
    #[serde(default)]
    pub options_text: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    /// Seconds allowed for the question.
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,
    #[serde(default = "default_points")]
    pub points: u32,
}

/// A validated question ready to hand to the question service. Has no id
/// until the service assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestionDraft {
    pub question_text: String,
    pub category: String,
    pub difficulty: String,
    pub time_limit: u32,
    pub points: u32,
    pub options: Vec<AnswerOption>,
}

impl ParsedQuestionDraft {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|o| o.is_correct)
    }
}

/// Checks extracted options against the four-choice, single-answer format.
pub fn validate_options(options: &[AnswerOption]) -> Result<(), QuestionValidationError> {
    if options.is_empty() {
        return Err(QuestionValidationError::NoOptionsDetected);
    }
    if options.len() != EXPECTED_OPTION_COUNT {
        return Err(QuestionValidationError::WrongOptionCount {
            found: options.len(),
        });
    }

    let empty: Vec<String> = options
        .iter()
        .filter(|o| o.text.is_empty())
        .map(|o| o.id.clone())
        .collect();
    if !empty.is_empty() {
        return Err(QuestionValidationError::EmptyOptionBody { ids: empty });
    }

    let correct = options.iter().filter(|o| o.is_correct).count();
    if correct != 1 {
        return Err(QuestionValidationError::AmbiguousOrMissingCorrectAnswer { correct });
    }
    Ok(())
}

/// Validates a submitted form and assembles the draft.
pub fn validate_question(form: &QuestionForm) -> Result<ParsedQuestionDraft, QuestionValidationError> {
    let question_text = form.question_text.trim();
    if question_text.is_empty() {
        return Err(QuestionValidationError::EmptyQuestionText);
    }
    if form.options_text.trim().is_empty() {
        return Err(QuestionValidationError::EmptyOptionsText);
    }

    let extraction = extract_options_detailed(&form.options_text);
    validate_options(&extraction.options)?;

    Ok(ParsedQuestionDraft {
        question_text: question_text.to_string(),
        category: form.category.trim().to_string(),
        difficulty: form.difficulty.trim().to_string(),
        time_limit: form.time_limit,
        points: form.points,
        options: extraction.options,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationProblem {
    pub code: &'static str,
    pub message: String,
}

impl From<&QuestionValidationError> for ValidationProblem {
    fn from(err: &QuestionValidationError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Live preview of an options blob while it is being typed.
#[derive(Debug, Clone, Serialize)]
pub struct OptionPreview {
    #[serde(flatten)]
    pub extraction: OptionExtraction,
    pub problem: Option<ValidationProblem>,
    pub notices: Vec<String>,
}

pub fn preview_options(raw: &str) -> OptionPreview {
    let extraction = extract_options_detailed(raw);

    let problem = if raw.trim().is_empty() {
        Some(ValidationProblem::from(&QuestionValidationError::EmptyOptionsText))
    } else {
        validate_options(&extraction.options)
            .err()
            .as_ref()
            .map(ValidationProblem::from)
    };

    let mut notices = Vec::new();
    if extraction.correct_source == CorrectSource::Defaulted {
        if let Some(first) = extraction.options.first() {
            notices.push(format!(
                "No correct marker found; option ({}) is assumed correct. Add (correct) to the right option.",
                first.id.to_uppercase()
            ));
        }
    }
    if extraction.marker_count > 1 {
        let correct = extraction
            .options
            .iter()
            .find(|o| o.is_correct)
            .map(|o| o.id.to_uppercase())
            .unwrap_or_default();
        notices.push(format!(
            "{} options are marked correct; using the last one ({correct}).",
            extraction.marker_count
        ));
    }

    OptionPreview {
        extraction,
        problem,
        notices,
    }
}
