//! DSA question bank: filtering, search and pagination over CSV-loaded questions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::csv::Record;

pub const DEFAULT_PER_PAGE: usize = 20;
pub const MAX_PER_PAGE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsaQuestion {
    pub id: String,
    pub title: String,
    pub category: String,
    pub difficulty: String,
    pub status: String,
    pub brief: String,
    pub link: String,
}

/// Reads a field, treating an empty value as absent.
fn field<'a>(record: &'a Record, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| record.get(*name))
        .map(String::as_str)
        .find(|v| !v.is_empty())
}

impl DsaQuestion {
    /// Builds a question from a bank row. `fallback_category` is used when the
    /// row has none. A row without an id gets `{id_prefix}-{index + 1}`.
    /// Rows without a title yield `None`.
    pub fn from_record(
        record: &Record,
        fallback_category: &str,
        id_prefix: &str,
        index: usize,
    ) -> Option<Self> {
        let title = field(record, &["title", "question", "problem"])?.to_string();
        let category = field(record, &["category"]).unwrap_or(fallback_category);
        let id = match field(record, &["id"]) {
            Some(id) => id.to_string(),
            None => format!("{}-{}", id_prefix, index + 1),
        };

        Some(Self {
            id,
            title,
            category: category.to_string(),
            difficulty: field(record, &["difficulty"])
                .unwrap_or("medium")
                .to_lowercase(),
            status: field(record, &["status"])
                .unwrap_or("unsolved")
                .to_lowercase(),
            brief: field(record, &["brief", "notes", "description"])
                .unwrap_or_default()
                .to_string(),
            link: field(record, &["link", "url"]).unwrap_or_default().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DsaQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// `all` disables the filter.
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl DsaQuery {
    fn matches(&self, q: &DsaQuestion) -> bool {
        let eq = |filter: &Option<String>, value: &str| match filter.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(f) => f.eq_ignore_ascii_case(value),
        };
        let status_ok = match self.status.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(s) if s.eq_ignore_ascii_case("all") => true,
            Some(s) => s.eq_ignore_ascii_case(&q.status),
        };
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(s) => q.title.to_lowercase().contains(&s.to_lowercase()),
        };

        eq(&self.category, &q.category) && eq(&self.difficulty, &q.difficulty) && status_ok && search_ok
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BankStats {
    pub total: usize,
    pub by_difficulty: IndexMap<String, usize>,
    pub by_category: IndexMap<String, usize>,
}

#[derive(Debug, Clone, Default)]
pub struct DsaBank {
    questions: Vec<DsaQuestion>,
}

impl DsaBank {
    pub fn new(questions: Vec<DsaQuestion>) -> Self {
        Self { questions }
    }

    /// Builds a bank from parsed rows; rows without a title are skipped.
    /// Synthesized ids are prefixed with `id_prefix` so that banks loaded from
    /// different files can be merged without collisions.
    pub fn from_records(records: &[Record], fallback_category: &str, id_prefix: &str) -> Self {
        Self::new(
            records
                .iter()
                .enumerate()
                .filter_map(|(i, r)| DsaQuestion::from_record(r, fallback_category, id_prefix, i))
                .collect(),
        )
    }

    pub fn extend(&mut self, other: DsaBank) {
        self.questions.extend(other.questions);
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for q in &self.questions {
            if !seen.contains(&q.category) {
                seen.push(q.category.clone());
            }
        }
        seen
    }

    pub fn stats(&self) -> BankStats {
        let mut by_difficulty = IndexMap::new();
        let mut by_category = IndexMap::new();
        for q in &self.questions {
            *by_difficulty.entry(q.difficulty.clone()).or_insert(0) += 1;
            *by_category.entry(q.category.clone()).or_insert(0) += 1;
        }
        BankStats {
            total: self.questions.len(),
            by_difficulty,
            by_category,
        }
    }

    pub fn query(&self, query: &DsaQuery) -> Page<DsaQuestion> {
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let page = query.page.unwrap_or(1).max(1);

        let matching: Vec<&DsaQuestion> =
            self.questions.iter().filter(|q| query.matches(q)).collect();
        let total = matching.len();

        Page {
            items: matching
                .into_iter()
                .skip((page - 1).saturating_mul(per_page))
                .take(per_page)
                .cloned()
                .collect(),
            total,
            page,
            per_page,
            total_pages: total.div_ceil(per_page),
        }
    }
}
