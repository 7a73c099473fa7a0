use std::path::PathBuf;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use ids_cli::types::ConvertResult;
use ids_model::ConversionReport;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    if let Some(title) = &result.document_title {
        println!("Title: {title}");
    }
    println!("Mappings: {}", result.mapping_source.describe());
    if result.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    print_output_files(result);

    let conversion = &result.conversion;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Property set"),
        header_cell("Elements"),
        header_cell("Properties"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for set in &conversion.sets {
        table.add_row(vec![
            Cell::new(&set.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(set.elements.join(", ")),
            Cell::new(set.props.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} shared parameters", conversion.parameters.len()))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(conversion.property_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_report_table(&conversion.report);
}

fn print_output_files(result: &ConvertResult) {
    let files: [(&str, Option<&PathBuf>); 2] = [
        ("Shared parameters", result.outputs.shared_parameters.as_ref()),
        ("Property sets", result.outputs.property_sets.as_ref()),
    ];
    for (label, path) in files {
        if let Some(path) = path {
            println!("{label}: {}", path.display());
        }
    }
}

fn print_report_table(report: &ConversionReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Counter"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let rows = [
        ("Specifications", report.specifications, None),
        ("Non-simple names", report.skipped_non_simple, Some(Color::Yellow)),
        ("Unmapped data types", report.skipped_unmapped_type, Some(Color::Yellow)),
        ("Unmapped export types", report.skipped_unmapped_export, Some(Color::Yellow)),
        ("Unmapped entities", report.skipped_unmapped_entity, Some(Color::Yellow)),
        ("Duplicate parameters", report.duplicate_parameters, None),
        (
            "Without applicability",
            report.specifications_without_applicability,
            Some(Color::Yellow),
        ),
        ("Ignored facets", report.ignored_facets, None),
    ];
    for (label, count, color) in rows {
        table.add_row(vec![Cell::new(label), count_cell(count, color)]);
    }
    println!();
    println!("Filtered:");
    println!("{table}");
}

fn count_cell(count: usize, color: Option<Color>) -> Cell {
    match color {
        Some(color) if count > 0 => Cell::new(count).fg(color).add_attribute(Attribute::Bold),
        _ if count == 0 => dim_cell(count),
        _ => Cell::new(count),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
    if table.column_count() >= 3 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
