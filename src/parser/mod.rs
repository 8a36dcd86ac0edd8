//! Delimited-text row reading.
//!
//! Reads a header-first delimited file into raw rows: one JSON object per
//! row, column header mapped to the unmodified string value. No coercion
//! happens here; normalization is the transformer's job.

use serde_json::{Map, Value};
use std::path::Path;

use crate::error::{CsvError, CsvResult};

/// Result of reading one input file.
#[derive(Debug, Clone)]
pub struct ReadResult {
    /// Raw rows as JSON objects (header -> string value).
    pub rows: Vec<Value>,
    /// Column headers from the first line.
    pub headers: Vec<String>,
    /// Delimiter used.
    pub delimiter: char,
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Considers `,`, `;`, tab and `|`; falls back to comma.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a delimited file with delimiter auto-detection.
///
/// # Example
/// ```ignore
/// let result = read_csv_file("CSV_data_files/pilot_roster.csv")?;
/// println!("{} rows, delimiter '{}'", result.rows.len(), result.delimiter);
/// ```
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ReadResult> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let delimiter = detect_delimiter(&content);
    parse_rows(&content, delimiter)
}

/// Parse delimited text into raw rows with an explicit delimiter.
///
/// The first line provides column headers. A row whose values are all
/// empty is suppressed. Ragged rows are tolerated: missing trailing
/// fields are filled with empty strings, extra values are ignored.
pub fn parse_rows(content: &str, delimiter: char) -> CsvResult<ReadResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CsvError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| CsvError::Parse(e.to_string()))?;

        let values: Vec<&str> = (0..headers.len())
            .map(|i| record.get(i).unwrap_or(""))
            .collect();

        // A fully empty row carries no record
        if values.iter().all(|v| v.is_empty()) {
            continue;
        }

        let mut obj = Map::new();
        for (header, value) in headers.iter().zip(&values) {
            obj.insert(header.clone(), Value::String((*value).to_string()));
        }

        rows.push(Value::Object(obj));
    }

    Ok(ReadResult {
        rows,
        headers,
        delimiter,
    })
}
