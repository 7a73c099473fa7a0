//! Revit output generation.
//!
//! This crate renders a [`ConversionOutput`] into the two text files the
//! Revit IFC exporter consumes:
//!
//! - **Shared parameters** (`SharedParameters.txt`): parameter definitions
//! - **User-defined property sets** (`UserDefinedPsets.txt`): set layout
//!   and element assignment

mod common;
mod property_sets;
mod shared_parameters;

use std::path::Path;

use anyhow::Result;
use ids_model::{ConversionOutput, OutputPaths};

pub use property_sets::{PROPERTY_SETS_FILE, render_property_sets, write_property_sets};
pub use shared_parameters::{
    PARAMETER_GROUP_NAME, SHARED_PARAMETERS_FILE, render_shared_parameters,
    write_shared_parameters,
};

/// Write both files into `output_dir`, shared parameters first.
pub fn write_outputs(output_dir: &Path, output: &ConversionOutput) -> Result<OutputPaths> {
    let shared_parameters = output_dir.join(SHARED_PARAMETERS_FILE);
    write_shared_parameters(&shared_parameters, &output.parameters)?;
    let property_sets = output_dir.join(PROPERTY_SETS_FILE);
    write_property_sets(&property_sets, &output.sets)?;
    Ok(OutputPaths {
        shared_parameters: Some(shared_parameters),
        property_sets: Some(property_sets),
    })
}
