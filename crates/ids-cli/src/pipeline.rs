//! Conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Mappings**: Resolve and load the IFC to Revit translation tables
//! 2. **Ingest**: Read and parse the IDS document
//! 3. **Map**: Derive shared parameters and property sets
//! 4. **Report**: Write `SharedParameters.txt` and `UserDefinedPsets.txt`
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ids_ingest::load_ids_file;
use ids_map::{MappingEngine, SequentialGuids};
use ids_model::{ConversionOutput, IdsDocument, MappingTables, OutputPaths};
use ids_report::write_outputs;
use ids_standards::{MappingSource, load_mappings_from_source, resolve_mapping_source};

use crate::types::{ConvertOptions, ConvertResult, DataTypeRow, MappingListing};

/// Run every stage for one IDS file.
pub fn convert_file(options: &ConvertOptions) -> Result<ConvertResult> {
    let convert_span = info_span!("convert", input = %options.input.display());
    let _convert_guard = convert_span.enter();

    let (mapping_source, tables) = mappings(options.mappings.as_deref())?;
    let document = ingest(&options.input)?;
    let conversion = map(&tables, &document, options.deterministic_guids);
    let outputs = if options.dry_run {
        info!("dry run, skipping output files");
        OutputPaths::default()
    } else {
        report(&options.output_dir, &conversion)?
    };

    Ok(ConvertResult {
        input: options.input.clone(),
        output_dir: options.output_dir.clone(),
        mapping_source,
        document_title: document.info.title.clone(),
        conversion,
        outputs,
        dry_run: options.dry_run,
    })
}

/// Stage 1: load the active mapping tables.
pub fn mappings(explicit: Option<&Path>) -> Result<(MappingSource, MappingTables)> {
    let source = resolve_mapping_source(explicit);
    let tables = load_mappings_from_source(&source)
        .with_context(|| format!("load mappings from {}", source.describe()))?;
    info!(
        source = %source.describe(),
        parameter_types = tables.parameter_types.len(),
        export_types = tables.export_types.len(),
        entity_classes = tables.entity_classes.len(),
        "mapping tables ready"
    );
    Ok((source, tables))
}

/// Load the active tables and flatten them for display.
pub fn list_mappings(explicit: Option<&Path>) -> Result<MappingListing> {
    let (source, tables) = mappings(explicit)?;
    let mut codes: Vec<&String> = tables
        .parameter_types
        .keys()
        .chain(tables.export_types.keys())
        .collect();
    codes.sort();
    codes.dedup();
    let data_types = codes
        .into_iter()
        .map(|code| DataTypeRow {
            ifc_type: code.clone(),
            parameter_type: tables.parameter_type(code).map(str::to_string),
            export_type: tables.export_type(code).map(str::to_string),
        })
        .collect();
    let entities = tables.entity_classes.into_iter().collect();
    Ok(MappingListing {
        source,
        data_types,
        entities,
    })
}

/// Stage 2: read the IDS document.
pub fn ingest(input: &Path) -> Result<IdsDocument> {
    info_span!("ingest")
        .in_scope(|| load_ids_file(input))
        .with_context(|| format!("read {}", input.display()))
}

/// Stage 3: run the mapping engine.
pub fn map(tables: &MappingTables, document: &IdsDocument, deterministic: bool) -> ConversionOutput {
    if deterministic {
        MappingEngine::with_guids(tables, SequentialGuids::new()).convert(document)
    } else {
        MappingEngine::new(tables).convert(document)
    }
}

/// Stage 4: write both Revit files.
pub fn report(output_dir: &Path, conversion: &ConversionOutput) -> Result<OutputPaths> {
    info_span!("report", output_dir = %output_dir.display())
        .in_scope(|| write_outputs(output_dir, conversion))
        .context("write Revit files")
}
