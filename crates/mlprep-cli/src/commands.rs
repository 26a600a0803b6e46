use anyhow::{Context, Result, bail};
use tracing::info;

use mlprep_core::PipelineContext;
use mlprep_ingest::{IngestOptions, read_frame};
use mlprep_model::Schema;
use mlprep_standards::resolve_schema;
use mlprep_validate::{Validator, check_quality};

use mlprep_cli::cli::{CheckArgs, PrepareArgs, SchemaArgs, SourceArgs};
use mlprep_cli::export::write_csv;
use mlprep_cli::summary::{preview_table, schema_table, violation_table};

pub fn run_prepare(args: &PrepareArgs) -> Result<()> {
    let (schema, ingest) = load_source(&args.source)?;
    let context = PipelineContext::new()
        .with_schema(schema)
        .with_ingest_options(ingest);

    let features = match context.run(&args.input) {
        Ok(features) => features,
        Err(error) => {
            if let Some(report) = error.report() {
                println!("{}", violation_table(report));
            }
            return Err(error).with_context(|| format!("prepare {}", args.input.display()));
        }
    };
    info!(
        rows = features.height(),
        columns = features.width(),
        "prepared features"
    );

    if args.preview > 0 {
        println!("{}", preview_table(&features, args.preview)?);
    }
    if let Some(path) = &args.output {
        write_csv(&features, path)?;
        println!("Features: {} ({} rows)", path.display(), features.height());
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let (schema, ingest) = load_source(&args.source)?;
    let df = read_frame(&args.input, &ingest)
        .with_context(|| format!("read {}", args.input.display()))?;

    for issue in check_quality(&df).messages() {
        println!("warning: {issue}");
    }
    let report = Validator::new(&schema).check(&df)?;
    if !report.is_empty() {
        println!("{}", violation_table(&report));
        bail!("{}", report.summary());
    }
    println!(
        "{}: {} rows, {} columns conform to the schema",
        args.input.display(),
        df.height(),
        df.width()
    );
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = resolve_schema(args.schema.as_deref()).context("load schema")?;
    println!("{}", schema_table(&schema));
    println!(
        "strict: {}, coerce: {}",
        yes_no(schema.strict),
        yes_no(schema.coerce)
    );
    Ok(())
}

fn load_source(source: &SourceArgs) -> Result<(Schema, IngestOptions)> {
    let schema = resolve_schema(source.schema.as_deref()).context("load schema")?;
    let ingest = IngestOptions::default().with_delimiter(source.delimiter);
    Ok((schema, ingest))
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
