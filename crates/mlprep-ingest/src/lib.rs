//! Delimited-file ingestion.
//!
//! Reads a header-first delimited file into a polars `DataFrame` whose
//! columns are all nullable text. Failures are reported as [`IngestError`]
//! and are passed through unchanged by the pipeline.

pub mod csv_frame;
pub mod error;
pub mod polars_utils;

pub use csv_frame::{CsvTable, IngestOptions, csv_table_to_frame, read_csv_table, read_frame};
pub use error::IngestError;
pub use polars_utils::{any_to_string, is_missing_value};
