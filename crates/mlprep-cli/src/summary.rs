//! Terminal tables for schemas, violation reports and feature previews.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use mlprep_ingest::any_to_string;
use mlprep_model::Schema;
use mlprep_validate::{ValidationReport, ViolationKind};
use polars::prelude::{DataFrame, PolarsResult};

pub fn schema_table(schema: &Schema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Nullable"),
        header_cell("Constraint"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for column in &schema.columns {
        let nullable = if column.nullable {
            Cell::new("yes")
        } else {
            dim_cell("no")
        };
        let constraint = match &column.constraint {
            Some(constraint) => Cell::new(constraint),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&column.name).add_attribute(Attribute::Bold),
            Cell::new(column.column_type),
            nullable,
            constraint,
        ]);
    }
    table
}

/// One row per violation, structural problems first.
pub fn violation_table(report: &ValidationReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Row"),
        header_cell("Value"),
        header_cell("Check"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut violations: Vec<_> = report.violations.iter().collect();
    violations.sort_by_key(|violation| !violation.kind.is_structural());
    for violation in violations {
        let row = match violation.row {
            Some(row) => Cell::new(row),
            None => dim_cell("-"),
        };
        let value = match violation.value.as_deref() {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&violation.column).add_attribute(Attribute::Bold),
            row,
            value,
            kind_cell(&violation.kind),
            Cell::new(violation),
        ]);
    }
    table
}

/// First `rows` rows of `df`.
pub fn preview_table(df: &DataFrame, rows: usize) -> PolarsResult<Table> {
    let mut table = Table::new();
    table.set_header(
        df.get_column_names()
            .into_iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    for (idx, column) in df.get_columns().iter().enumerate() {
        let dtype = column.dtype();
        if dtype.is_integer() || dtype.is_float() {
            align_column(&mut table, idx, CellAlignment::Right);
        }
    }

    for row in 0..df.height().min(rows) {
        let mut cells = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            let value = column.get(row)?;
            if value.is_null() {
                cells.push(dim_cell("null"));
            } else {
                cells.push(Cell::new(any_to_string(value)));
            }
        }
        table.add_row(cells);
    }
    Ok(table)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn kind_cell(kind: &ViolationKind) -> Cell {
    let color = if kind.is_structural() {
        Color::Red
    } else {
        Color::Yellow
    };
    Cell::new(kind.code()).fg(color)
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
