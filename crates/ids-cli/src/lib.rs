//! CLI library components for the IDS to Revit converter.

pub mod logging;
pub mod pipeline;
pub mod types;
