//! Option extractor. Turns a pasted block of answer choices into structured options.
//!
//! Accepted option markers at the start of a line: `(A)`, `(A`, `(A.`, `A)`, `A.`
//! (letters A–D, any case), followed by whitespace and the option body. Further
//! options may follow on the same line when introduced by a parenthesised
//! marker surrounded by whitespace, e.g. `(a) 10 (B) 20 (c) 30`.
//!
//! A body containing `(correct)`, `[correct]` or `*correct*` (any case) marks
//! that option as the answer. When several options carry a marker the last one
//! wins; when none does, the first option is taken as correct.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static LEADING_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:\(([a-d])[).]?|([a-d])[).])\s+(.*)$").expect("Hardcode regex pattern")
});

static CORRECT_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(correct\)|\[correct\]|\*correct\*").expect("Hardcode regex pattern")
});

/// A single extracted answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Lowercase option letter, `a`–`d`.
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

/// Result of matching one line against the leading option marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch<'a> {
    Matched { id: char, body: &'a str },
    Unmatched,
}

/// How the correct answer was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectSource {
    /// A correctness marker named the answer.
    Marked,
    /// No marker was present; the first option was chosen.
    Defaulted,
    /// Nothing was extracted.
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionExtraction {
    pub options: Vec<AnswerOption>,
    pub correct_source: CorrectSource,
    /// Number of options that carried a correctness marker.
    pub marker_count: usize,
}

/// Matches the leading option marker of an already-trimmed line.
pub fn match_option_line(line: &str) -> LineMatch<'_> {
    let Some(caps) = LEADING_MARKER.captures(line) else {
        return LineMatch::Unmatched;
    };
    let letter = caps.get(1).or_else(|| caps.get(2));
    match (letter, caps.get(3)) {
        (Some(letter), Some(body)) => match letter.as_str().chars().next() {
            Some(id) => LineMatch::Matched {
                id: id.to_ascii_lowercase(),
                body: body.as_str(),
            },
            None => LineMatch::Unmatched,
        },
        _ => LineMatch::Unmatched,
    }
}

/// Splits a line body at embedded ` (X) ` markers into `(id, body)` segments.
fn split_inline_options(id: char, body: &str) -> Vec<(char, &str)> {
    let bytes = body.as_bytes();
    let mut segments = Vec::new();
    let mut current_id = id;
    let mut start = 0;
    let mut i = 1;

    while i + 2 < bytes.len() {
        let is_marker = bytes[i] == b'('
            && bytes[i - 1].is_ascii_whitespace()
            && matches!(bytes[i + 1].to_ascii_lowercase(), b'a'..=b'd')
            && bytes[i + 2] == b')'
            && bytes.get(i + 3).is_some_and(u8::is_ascii_whitespace);
        if is_marker {
            segments.push((current_id, &body[start..i]));
            current_id = (bytes[i + 1] as char).to_ascii_lowercase();
            start = i + 3;
            i += 4;
        } else {
            i += 1;
        }
    }
    segments.push((current_id, &body[start..]));
    segments
}

pub fn has_correct_marker(body: &str) -> bool {
    CORRECT_MARKER.is_match(body)
}

/// Removes every correctness marker and trims what is left.
pub fn strip_correct_markers(body: &str) -> String {
    CORRECT_MARKER.replace_all(body, "").trim().to_string()
}

/// Extracts options plus how the correct answer was decided.
pub fn extract_options_detailed(raw: &str) -> OptionExtraction {
    let mut options: Vec<AnswerOption> = Vec::new();
    let mut marked_id: Option<String> = None;
    let mut marker_count = 0;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let LineMatch::Matched { id, body } = match_option_line(line) else {
            continue;
        };
        for (id, body) in split_inline_options(id, body) {
            let id = id.to_string();
            if has_correct_marker(body) {
                marker_count += 1;
                marked_id = Some(id.clone());
            }
            options.push(AnswerOption {
                id,
                text: strip_correct_markers(body),
                is_correct: false,
            });
        }
    }

    let correct_source = match (&marked_id, options.is_empty()) {
        (Some(_), _) => CorrectSource::Marked,
        (None, false) => CorrectSource::Defaulted,
        (None, true) => CorrectSource::Absent,
    };

    if let Some(correct_id) = marked_id.or_else(|| options.first().map(|o| o.id.clone())) {
        for option in &mut options {
            option.is_correct = option.id == correct_id;
        }
    }

    OptionExtraction {
        options,
        correct_source,
        marker_count,
    }
}

/// Extracts options in line order. Never fails; unmatched lines are skipped.
pub fn extract_options(raw: &str) -> Vec<AnswerOption> {
    extract_options_detailed(raw).options
}
