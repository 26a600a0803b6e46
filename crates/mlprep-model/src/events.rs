//! Pipeline observability events.
//!
//! Stages never log through ambient state directly. Each one receives an
//! [`EventSink`] and reports what happened; [`TracingSink`] forwards events to
//! `tracing`, and tests can pass their own sink to capture them.

use std::cell::RefCell;

use tracing::{error, info, warn};

/// Something a pipeline stage reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// A pipeline run began for the given source.
    Started { source: String },
    /// Raw table was read.
    Loaded { rows: usize, columns: usize },
    /// Advisory data quality findings on the raw table.
    QualityWarning { issues: Vec<String> },
    ValidationPassed { rows: usize, columns: usize },
    ValidationFailed { violations: usize, summary: String },
    TransformCompleted { rows: usize, columns: usize },
}

impl PipelineEvent {
    /// Short stable name, used as the `event` field in structured logs.
    pub fn name(&self) -> &'static str {
        match self {
            PipelineEvent::Started { .. } => "started",
            PipelineEvent::Loaded { .. } => "loaded",
            PipelineEvent::QualityWarning { .. } => "quality_warning",
            PipelineEvent::ValidationPassed { .. } => "validation_passed",
            PipelineEvent::ValidationFailed { .. } => "validation_failed",
            PipelineEvent::TransformCompleted { .. } => "transform_completed",
        }
    }
}

/// Receiver for pipeline events.
pub trait EventSink {
    fn record(&self, event: &PipelineEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn record(&self, event: &PipelineEvent) {
        (**self).record(event);
    }
}

/// Forwards events to the `tracing` subscriber installed by the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &PipelineEvent) {
        let name = event.name();
        match event {
            PipelineEvent::Started { source } => {
                info!(event = name, source = %source, "pipeline started");
            }
            PipelineEvent::Loaded { rows, columns } => {
                info!(event = name, rows, columns, "loaded table");
            }
            PipelineEvent::QualityWarning { issues } => {
                warn!(event = name, issues = %issues.join("; "), "data quality issues");
            }
            PipelineEvent::ValidationPassed { rows, columns } => {
                info!(event = name, rows, columns, "schema validation passed");
            }
            PipelineEvent::ValidationFailed {
                violations,
                summary,
            } => {
                error!(event = name, violations, summary = %summary, "schema validation failed");
            }
            PipelineEvent::TransformCompleted { rows, columns } => {
                info!(event = name, rows, columns, "feature transform completed");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: &PipelineEvent) {}
}

/// Keeps events in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<PipelineEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(PipelineEvent::name).collect()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &PipelineEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.record(&PipelineEvent::Started {
            source: "train.csv".to_string(),
        });
        sink.record(&PipelineEvent::TransformCompleted {
            rows: 2,
            columns: 3,
        });
        assert_eq!(sink.names(), vec!["started", "transform_completed"]);
    }

    #[test]
    fn sink_by_reference() {
        fn emit(sink: impl EventSink) {
            sink.record(&PipelineEvent::Loaded {
                rows: 1,
                columns: 1,
            });
        }
        let sink = RecordingSink::new();
        emit(&sink);
        assert_eq!(sink.events().len(), 1);
    }
}
