//! Writes parsed records back out as unquoted CSV.

use crate::csv::parser::{CsvParser, Record};

impl CsvParser {
    /// Serializes `records` under `headers`, one line per record.
    /// Keys absent from a record are written as empty cells.
    pub fn encode(&self, headers: &[String], records: &[Record]) -> String {
        let delimiter = self.delimiter().to_string();
        let mut out = headers.join(&delimiter);
        out.push('\n');
        for record in records {
            let row: Vec<&str> = headers
                .iter()
                .map(|name| record.get(name).map(String::as_str).unwrap_or(""))
                .collect();
            out.push_str(&row.join(&delimiter));
            out.push('\n');
        }
        out
    }
}

/// Serializes with the default comma delimiter.
pub fn to_csv(headers: &[String], records: &[Record]) -> String {
    CsvParser::default().encode(headers, records)
}
