#![deny(unsafe_code)]

pub mod error;
pub mod mappings;

pub use crate::error::StandardsError;
pub use crate::mappings::{
    DEFAULT_MAPPINGS, MAPPINGS_ENV_VAR, MappingSource, load_default_mappings, load_mappings,
    load_mappings_from_source, parse_mappings, resolve_mapping_source,
};
