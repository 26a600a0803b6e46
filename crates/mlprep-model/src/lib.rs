#![deny(unsafe_code)]

pub mod events;
pub mod schema;

pub use events::{EventSink, NoopSink, PipelineEvent, RecordingSink, TracingSink};
pub use schema::{ColumnSpec, ColumnType, Constraint, Scalar, Schema};
