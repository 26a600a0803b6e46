//! Pipeline context and the `prepare` entry point.
//!
//! [`PipelineContext`] bundles what a run needs:
//!
//! - **Schema**: the contract the raw table must satisfy
//! - **Ingest options**: how the CSV file is read
//! - **Feature plan**: which features are derived
//! - **Sink**: where pipeline events go
//!
//! Stages run in order: ingest, quality checks, validation, transformation.
//! The first failing stage ends the run.

use std::fmt;
use std::path::Path;

use mlprep_ingest::{IngestOptions, read_frame};
use mlprep_model::{EventSink, PipelineEvent, Schema, TracingSink};
use mlprep_standards::training_schema;
use mlprep_transform::{FeaturePlan, transform_frame};
use mlprep_validate::{Validator, check_quality};
use polars::prelude::DataFrame;
use tracing::info_span;

use crate::error::PrepareError;

/// Configuration for one or more pipeline runs.
pub struct PipelineContext<'a> {
    pub schema: Schema,
    pub ingest: IngestOptions,
    pub plan: FeaturePlan,
    sink: &'a dyn EventSink,
}

impl PipelineContext<'static> {
    /// Training schema, default ingest options, standard features, tracing sink.
    pub fn new() -> Self {
        Self {
            schema: training_schema(),
            ingest: IngestOptions::default(),
            plan: FeaturePlan::standard(),
            sink: &TracingSink,
        }
    }
}

impl Default for PipelineContext<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PipelineContext<'a> {
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_ingest_options(mut self, ingest: IngestOptions) -> Self {
        self.ingest = ingest;
        self
    }

    pub fn with_plan(mut self, plan: FeaturePlan) -> Self {
        self.plan = plan;
        self
    }

    /// Route pipeline events to `sink`.
    pub fn with_sink<'b>(self, sink: &'b dyn EventSink) -> PipelineContext<'b> {
        PipelineContext {
            schema: self.schema,
            ingest: self.ingest,
            plan: self.plan,
            sink,
        }
    }

    /// Read the CSV file at `path` and run it through the pipeline.
    pub fn run(&self, path: &Path) -> Result<DataFrame, PrepareError> {
        let _span = info_span!("prepare", path = %path.display()).entered();
        self.sink.record(&PipelineEvent::Started {
            source: path.display().to_string(),
        });

        let raw = read_frame(path, &self.ingest)?;
        self.sink.record(&PipelineEvent::Loaded {
            rows: raw.height(),
            columns: raw.width(),
        });

        self.process(&raw)
    }

    /// Run an in-memory table through validation and transformation.
    pub fn run_frame(&self, df: &DataFrame) -> Result<DataFrame, PrepareError> {
        let _span = info_span!("prepare", source = "frame").entered();
        self.sink.record(&PipelineEvent::Started {
            source: "<frame>".to_string(),
        });
        self.process(df)
    }

    fn process(&self, raw: &DataFrame) -> Result<DataFrame, PrepareError> {
        let quality = check_quality(raw);
        if !quality.is_clean() {
            self.sink.record(&PipelineEvent::QualityWarning {
                issues: quality.messages(),
            });
        }

        let validated = Validator::new(&self.schema).validate(raw, self.sink)?;
        let features = transform_frame(&validated, &self.plan, self.sink)?;
        Ok(features)
    }
}

impl fmt::Debug for PipelineContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineContext")
            .field("schema", &self.schema)
            .field("ingest", &self.ingest)
            .field("plan", &self.plan)
            .finish_non_exhaustive()
    }
}

/// Prepare the CSV file at `path` with the training schema.
pub fn prepare(path: &Path) -> Result<DataFrame, PrepareError> {
    PipelineContext::new().run(path)
}
