//! Validation check modules.
//!
//! Each module performs a specific type of validation check.

pub mod cells;
pub mod columns;

pub use cells::ColumnValues;
