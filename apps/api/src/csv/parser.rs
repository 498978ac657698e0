//! Minimal CSV record parser for the static question-bank assets.
//!
//! The asset format is plain unquoted CSV: no quoted fields, no embedded
//! delimiters. Rows whose cell count differs from the header are normalised:
//! short rows are padded with empty strings, long rows lose their excess cells.
//! A row left with nothing but empty cells is skipped like a blank line.

use indexmap::IndexMap;

/// One parsed data row, header name → trimmed cell value, in header order.
pub type Record = IndexMap<String, String>;

/// Parses delimited text into ordered records keyed by the first line's header.
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    delimiter: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Splits one line on the delimiter and trims every cell.
    pub fn parse_line(&self, line: &str) -> Vec<String> {
        line.split(self.delimiter)
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    /// Header of `raw`: the first non-empty line, split and trimmed.
    pub fn headers(&self, raw: &str) -> Vec<String> {
        non_empty_lines(raw)
            .next()
            .map(|line| self.parse_line(line))
            .unwrap_or_default()
    }

    /// Parses `raw` into records. Never fails: empty and header-only input
    /// yield an empty vector, blank lines and all-empty rows are skipped.
    pub fn parse(&self, raw: &str) -> Vec<Record> {
        let mut lines = non_empty_lines(raw);
        let Some(header_line) = lines.next() else {
            return Vec::new();
        };
        let headers = self.parse_line(header_line);

        lines
            .map(|line| {
                let mut cells = self.parse_line(line).into_iter();
                let mut record = Record::with_capacity(headers.len());
                for name in &headers {
                    // Missing trailing cells pad to ""; excess cells are never pulled.
                    let value = cells.next().unwrap_or_default();
                    record.insert(name.clone(), value);
                }
                record
            })
            // Such a row would encode as a bare run of delimiters or an empty line.
            .filter(|record| record.values().any(|v| !v.is_empty()))
            .collect()
    }
}

/// Parses `raw` with the default comma delimiter.
pub fn parse_records(raw: &str) -> Vec<Record> {
    CsvParser::default().parse(raw)
}

fn non_empty_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').filter(|line| !line.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(record: &Record) -> Vec<&str> {
        record.values().map(String::as_str).collect()
    }

    #[test]
    fn test_simple_records() {
        let records = parse_records("title,category\nTwo Sum,Arrays\nLRU Cache,Design");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["title"], "Two Sum");
        assert_eq!(records[1]["category"], "Design");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_records("").is_empty());
        assert!(parse_records("\n\n   \n").is_empty());
    }

    #[test]
    fn test_header_only() {
        assert!(parse_records("title,category").is_empty());
        assert!(parse_records("title,category\n").is_empty());
    }

    #[test]
    fn test_trims_names_and_values() {
        let records = parse_records("  title , category \n  Two Sum ,  Arrays  ");
        assert_eq!(records[0]["title"], "Two Sum");
        assert_eq!(records[0]["category"], "Arrays");
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records("a,b\r\n1,2\r\n3,4\r\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["b"], "4");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let records = parse_records("\n\na,b\n\n1,2\n   \n3,4\n");
        assert_eq!(records.len(), 2);
        assert_eq!(values(&records[0]), vec!["1", "2"]);
        assert_eq!(values(&records[1]), vec!["3", "4"]);
    }

    #[test]
    fn test_short_row_is_padded() {
        let records = parse_records("a,b,c\n1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 3);
        assert_eq!(values(&records[0]), vec!["1", "", ""]);
    }

    #[test]
    fn test_long_row_is_truncated() {
        let records = parse_records("a,b\n1,2,3,4");
        assert_eq!(records[0].len(), 2);
        assert_eq!(values(&records[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_every_record_has_header_keys_in_order() {
        let records = parse_records("x,y,z\n1,2\n1,2,3\n1,2,3,4");
        for record in &records {
            let keys: Vec<&str> = record.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["x", "y", "z"]);
        }
    }

    #[test]
    fn test_row_order_preserved() {
        let records = parse_records("n\n3\n1\n2");
        let ns: Vec<&str> = records.iter().map(|r| r["n"].as_str()).collect();
        assert_eq!(ns, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_empty_cells() {
        let records = parse_records("a,b,c\n,2,");
        assert_eq!(values(&records[0]), vec!["", "2", ""]);
    }

    #[test]
    fn test_all_empty_rows_skipped() {
        assert!(parse_records("a,b,c\n,,").is_empty());
        assert!(parse_records("a\n,x\n").is_empty());
        let records = parse_records("a,b\n , \n1,2");
        assert_eq!(records.len(), 1);
        assert_eq!(values(&records[0]), vec!["1", "2"]);
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = CsvParser::new(';');
        let records = parser.parse("a;b\n1;2");
        assert_eq!(records[0]["b"], "2");
    }

    #[test]
    fn test_quotes_are_literal() {
        let records = parse_records("a,b\n\"x,y\",z");
        assert_eq!(records[0]["a"], "\"x");
        assert_eq!(records[0]["b"], "y\"");
    }

    #[test]
    fn test_headers() {
        let parser = CsvParser::default();
        assert_eq!(parser.headers("\n a , b \n1,2"), vec!["a", "b"]);
        assert!(parser.headers("").is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "a,b\n1,2\n3";
        assert_eq!(parse_records(raw), parse_records(raw));
    }
}
