use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use tracing::debug;

use crate::error::IngestError;

/// How to read a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte. Defaults to `,`.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Raw rows of a delimited file with its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    /// One entry per data row, padded to the header width; `None` marks an
    /// empty or absent cell.
    pub rows: Vec<Vec<Option<String>>>,
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read a delimited file into raw text rows.
///
/// The first record is the header. Rows shorter than the header are padded
/// with missing cells; longer rows are rejected.
pub fn read_csv_table(path: &Path, options: &IngestOptions) -> Result<CsvTable, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(file);

    let mut records = reader.records();
    let header_record = match records.next() {
        Some(record) => record.map_err(|source| IngestError::csv(path, source))?,
        None => {
            return Err(IngestError::Empty {
                path: path.to_path_buf(),
            });
        }
    };
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();

    let mut seen = BTreeSet::new();
    for header in &headers {
        if !seen.insert(header.as_str()) {
            return Err(IngestError::DuplicateHeader {
                path: path.to_path_buf(),
                column: header.clone(),
            });
        }
    }

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        if record.len() > headers.len() {
            return Err(IngestError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut row: Vec<Option<String>> = record.iter().map(normalize_cell).collect();
        row.resize(headers.len(), None);
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

/// Convert raw rows into a `DataFrame` of nullable text columns.
pub fn csv_table_to_frame(table: &CsvTable) -> polars::prelude::PolarsResult<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len());
    for (idx, header) in table.headers.iter().enumerate() {
        let values: Vec<Option<String>> = table
            .rows
            .iter()
            .map(|row| row.get(idx).cloned().flatten())
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into());
    }
    DataFrame::new(columns)
}

/// Read a delimited file straight into a `DataFrame`.
///
/// Every column is text; typing is left to schema validation.
pub fn read_frame(path: &Path, options: &IngestOptions) -> Result<DataFrame, IngestError> {
    let table = read_csv_table(path, options)?;
    let frame = csv_table_to_frame(&table).map_err(|source| IngestError::Frame {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        rows = frame.height(),
        columns = frame.width(),
        "read delimited file"
    );
    Ok(frame)
}
