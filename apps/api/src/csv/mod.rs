//! CSV utilities for the static question-bank assets.

mod encoder;
mod handlers;
mod parser;

pub use encoder::to_csv;
pub use handlers::handle_parse_csv;
pub use parser::{parse_records, CsvParser, Record};
