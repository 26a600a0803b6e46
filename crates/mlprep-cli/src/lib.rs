//! CLI library components for mlprep.

pub mod cli;
pub mod export;
pub mod logging;
pub mod summary;
