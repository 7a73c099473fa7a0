use std::path::PathBuf;

use ids_model::{ConversionOutput, OutputPaths};
use ids_standards::MappingSource;

/// Inputs for one `convert` run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mappings: Option<PathBuf>,
    pub dry_run: bool,
    pub deterministic_guids: bool,
}

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub mapping_source: MappingSource,
    pub document_title: Option<String>,
    pub conversion: ConversionOutput,
    /// Empty on a dry run.
    pub outputs: OutputPaths,
    pub dry_run: bool,
}

/// One line of the data type table printed by `mappings`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTypeRow {
    pub ifc_type: String,
    pub parameter_type: Option<String>,
    pub export_type: Option<String>,
}

/// Flattened view of the active mapping tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingListing {
    pub source: MappingSource,
    /// Every IFC data type named by either table, sorted.
    pub data_types: Vec<DataTypeRow>,
    /// `(IFC entity, Revit class)` pairs, sorted by entity.
    pub entities: Vec<(String, String)>,
}
