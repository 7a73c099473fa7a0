use anyhow::Result;
use comfy_table::Table;

use ids_cli::pipeline::{convert_file, list_mappings};
use ids_cli::types::{ConvertOptions, ConvertResult};

use crate::cli::{ConvertArgs, MappingsArgs};
use crate::summary::apply_table_style;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let options = ConvertOptions {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        mappings: args.mappings.clone(),
        dry_run: args.dry_run,
        deterministic_guids: args.deterministic_guids,
    };
    convert_file(&options)
}

pub fn run_mappings(args: &MappingsArgs) -> Result<()> {
    let listing = list_mappings(args.mappings.as_deref())?;
    println!("Mappings: {}", listing.source.describe());

    let mut types = Table::new();
    types.set_header(vec!["IFC data type", "Parameter type", "Export type"]);
    apply_table_style(&mut types);
    for row in &listing.data_types {
        types.add_row(vec![
            row.ifc_type.as_str(),
            row.parameter_type.as_deref().unwrap_or("-"),
            row.export_type.as_deref().unwrap_or("-"),
        ]);
    }
    println!("{types}");

    let mut entities = Table::new();
    entities.set_header(vec!["IFC entity", "Revit class"]);
    apply_table_style(&mut entities);
    for (entity, class) in &listing.entities {
        entities.add_row(vec![entity.as_str(), class.as_str()]);
    }
    println!("{entities}");
    Ok(())
}
