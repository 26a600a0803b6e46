//! Training-data preparation pipeline.
//!
//! [`prepare`] reads a CSV file, validates it against the training schema
//! and derives model features. [`PipelineContext`] substitutes the schema,
//! ingest options, feature plan or event sink.

pub mod error;
pub mod pipeline;

pub use error::PrepareError;
pub use pipeline::{PipelineContext, prepare};
