use serde::{Deserialize, Serialize};

use crate::csv::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub role: String,
    /// Position within the role's flow. `None` when the row's order is not numeric.
    pub order: Option<u32>,
    pub question: String,
}

impl InterviewQuestion {
    pub fn from_record(record: &Record) -> Option<Self> {
        let role = record.get("role")?.trim();
        let question = record.get("question")?.trim();
        if role.is_empty() || question.is_empty() {
            return None;
        }
        Some(Self {
            role: role.to_string(),
            order: record.get("order").and_then(|o| o.trim().parse().ok()),
            question: question.to_string(),
        })
    }
}

/// Interview question flows keyed by role.
#[derive(Debug, Clone, Default)]
pub struct InterviewBank {
    questions: Vec<InterviewQuestion>,
}

impl InterviewBank {
    pub fn from_records(records: &[Record]) -> Self {
        Self {
            questions: records
                .iter()
                .filter_map(InterviewQuestion::from_record)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct roles in first-seen order.
    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = Vec::new();
        for q in &self.questions {
            if !roles.iter().any(|r| r.eq_ignore_ascii_case(&q.role)) {
                roles.push(q.role.clone());
            }
        }
        roles
    }

    /// Questions for `role` in ascending order. Rows with no numeric order go
    /// last, keeping their file order.
    pub fn for_role(&self, role: &str) -> Vec<InterviewQuestion> {
        let role = role.trim();
        let mut flow: Vec<InterviewQuestion> = self
            .questions
            .iter()
            .filter(|q| q.role.eq_ignore_ascii_case(role))
            .cloned()
            .collect();
        // Stable sort; None sorts after every Some.
        flow.sort_by_key(|q| (q.order.is_none(), q.order));
        flow
    }
}
