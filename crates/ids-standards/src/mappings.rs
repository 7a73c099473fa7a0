//! Loading of the IFC → Revit translation tables.
//!
//! The defaults ship inside the binary via `include_str!()`. A TOML file
//! with the same layout replaces them entirely when supplied.

use std::path::{Path, PathBuf};

use ids_model::MappingTables;
use tracing::debug;

use crate::error::StandardsError;

/// Environment variable naming a mapping file to use instead of the defaults.
pub const MAPPINGS_ENV_VAR: &str = "IDS_REVIT_MAPPINGS";

/// Default mapping tables (`data/mappings.toml`).
pub const DEFAULT_MAPPINGS: &str = include_str!("../data/mappings.toml");

const EMBEDDED_SOURCE: &str = "<embedded>";

/// Where the active mapping tables were loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingSource {
    Embedded,
    File(PathBuf),
}

impl MappingSource {
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "built-in defaults".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

pub fn load_default_mappings() -> Result<MappingTables, StandardsError> {
    parse_mappings_from(DEFAULT_MAPPINGS, Path::new(EMBEDDED_SOURCE))
}

pub fn load_mappings(path: &Path) -> Result<MappingTables, StandardsError> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let tables = parse_mappings_from(&text, path)?;
    debug!(
        path = %path.display(),
        parameter_types = tables.parameter_types.len(),
        export_types = tables.export_types.len(),
        entity_classes = tables.entity_classes.len(),
        "loaded mapping file"
    );
    Ok(tables)
}

pub fn parse_mappings(text: &str) -> Result<MappingTables, StandardsError> {
    parse_mappings_from(text, Path::new(EMBEDDED_SOURCE))
}

/// Resolve the mapping source.
///
/// Resolution order:
/// 1. explicit path (CLI `--mappings`)
/// 2. `IDS_REVIT_MAPPINGS` environment variable
/// 3. embedded defaults
pub fn resolve_mapping_source(explicit: Option<&Path>) -> MappingSource {
    let from_env = std::env::var(MAPPINGS_ENV_VAR).ok();
    resolve_with_env(explicit, from_env.as_deref())
}

/// A blank environment value counts as unset.
fn resolve_with_env(explicit: Option<&Path>, from_env: Option<&str>) -> MappingSource {
    if let Some(path) = explicit {
        return MappingSource::File(path.to_path_buf());
    }
    match from_env.map(str::trim) {
        Some(value) if !value.is_empty() => MappingSource::File(PathBuf::from(value)),
        _ => MappingSource::Embedded,
    }
}

pub fn load_mappings_from_source(source: &MappingSource) -> Result<MappingTables, StandardsError> {
    match source {
        MappingSource::Embedded => load_default_mappings(),
        MappingSource::File(path) => load_mappings(path),
    }
}

fn parse_mappings_from(text: &str, path: &Path) -> Result<MappingTables, StandardsError> {
    let tables: MappingTables = toml::from_str(text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    tables
        .validate()
        .map_err(|source| StandardsError::InvalidMapping {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let source = resolve_mapping_source(Some(Path::new("custom.toml")));
        assert_eq!(source, MappingSource::File(PathBuf::from("custom.toml")));
        assert_eq!(source.describe(), "custom.toml");
    }

    #[test]
    fn explicit_path_beats_environment() {
        let source = resolve_with_env(Some(Path::new("flag.toml")), Some("env.toml"));
        assert_eq!(source, MappingSource::File(PathBuf::from("flag.toml")));
    }

    #[test]
    fn environment_path_is_used_without_flag() {
        let source = resolve_with_env(None, Some("/etc/ids/mappings.toml"));
        assert_eq!(
            source,
            MappingSource::File(PathBuf::from("/etc/ids/mappings.toml"))
        );
    }

    #[test]
    fn blank_environment_value_falls_back_to_embedded() {
        assert_eq!(resolve_with_env(None, Some("   ")), MappingSource::Embedded);
        assert_eq!(resolve_with_env(None, Some("")), MappingSource::Embedded);
    }

    #[test]
    fn no_flag_and_no_environment_is_embedded() {
        assert_eq!(resolve_with_env(None, None), MappingSource::Embedded);
    }

    #[test]
    fn embedded_source_is_described() {
        assert_eq!(MappingSource::Embedded.describe(), "built-in defaults");
    }
}
