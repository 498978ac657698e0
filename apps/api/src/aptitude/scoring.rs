use std::collections::HashMap;

use serde::Serialize;

use crate::aptitude::catalog::AptitudeTest;

/// Minimum percentage needed to pass a test.
pub const PASS_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub test_id: String,
    /// Percentage, rounded to two decimals.
    pub score: f64,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub passed: bool,
}

/// Scores `answers` (question id → chosen option id) against `test`.
/// Unanswered questions count as wrong; a test with no questions scores 0.
pub fn score_submission(test: &AptitudeTest, answers: &HashMap<String, String>) -> TestResult {
    let total_questions = test.questions.len();
    let correct_answers = test
        .questions
        .iter()
        .filter(|q| {
            answers
                .get(&q.id)
                .is_some_and(|a| a.trim().eq_ignore_ascii_case(q.correct_answer.trim()))
        })
        .count();

    let score = if total_questions > 0 {
        let raw = correct_answers as f64 / total_questions as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    };

    TestResult {
        test_id: test.id.clone(),
        score,
        correct_answers,
        total_questions,
        passed: score >= PASS_THRESHOLD,
    }
}
