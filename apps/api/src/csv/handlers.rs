use axum::Json;
use serde::{Deserialize, Serialize};

use crate::csv::parser::{CsvParser, Record};
use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ParseCsvRequest {
    pub raw_text: String,
    pub delimiter: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ParseCsvResponse {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
    pub total: usize,
}

/// POST /api/v1/csv/parse
pub async fn handle_parse_csv(
    Json(req): Json<ParseCsvRequest>,
) -> Result<Json<ParseCsvResponse>, AppError> {
    let parser = match req.delimiter.as_deref() {
        None => CsvParser::default(),
        Some(d) => {
            let mut chars = d.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => CsvParser::new(c),
                _ => {
                    return Err(AppError::Validation(format!(
                        "delimiter must be a single character, got {d:?}"
                    )))
                }
            }
        }
    };

    let records = parser.parse(&req.raw_text);
    Ok(Json(ParseCsvResponse {
        headers: parser.headers(&req.raw_text),
        total: records.len(),
        records,
    }))
}
