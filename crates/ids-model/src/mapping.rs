//! Translation tables from IFC codes to Revit codes.
//!
//! These tables are static configuration: loaded once at startup and never
//! mutated while a conversion runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IdsError, Result};

/// The three lookup tables consumed by the mapping engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTables {
    /// IFC data type → Revit shared-parameter data type (e.g. `IFCLABEL` → `TEXT`).
    #[serde(default)]
    pub parameter_types: BTreeMap<String, String>,
    /// IFC data type → Revit IFC-export type (e.g. `IFCLABEL` → `Text`).
    #[serde(default)]
    pub export_types: BTreeMap<String, String>,
    /// IFC entity name → Revit IFC class name (e.g. `IFCWALL` → `IfcWall`).
    #[serde(default)]
    pub entity_classes: BTreeMap<String, String>,
}

impl MappingTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter_type(&self, ifc_type: &str) -> Option<&str> {
        self.parameter_types.get(ifc_type).map(String::as_str)
    }

    pub fn export_type(&self, ifc_type: &str) -> Option<&str> {
        self.export_types.get(ifc_type).map(String::as_str)
    }

    pub fn entity_class(&self, ifc_entity: &str) -> Option<&str> {
        self.entity_classes.get(ifc_entity).map(String::as_str)
    }

    /// Registers one IFC data type with both of its Revit targets.
    #[must_use]
    pub fn with_data_type(
        mut self,
        ifc_type: impl Into<String>,
        parameter_type: impl Into<String>,
        export_type: impl Into<String>,
    ) -> Self {
        let ifc_type = ifc_type.into();
        self.parameter_types
            .insert(ifc_type.clone(), parameter_type.into());
        self.export_types.insert(ifc_type, export_type.into());
        self
    }

    #[must_use]
    pub fn with_entity_class(
        mut self,
        ifc_entity: impl Into<String>,
        revit_class: impl Into<String>,
    ) -> Self {
        self.entity_classes
            .insert(ifc_entity.into(), revit_class.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parameter_types.is_empty()
            && self.export_types.is_empty()
            && self.entity_classes.is_empty()
    }

    /// Rejects blank keys or targets, which would never match or would
    /// produce empty columns in the output files.
    pub fn validate(&self) -> Result<()> {
        for (table, entries) in [
            ("parameter_types", &self.parameter_types),
            ("export_types", &self.export_types),
            ("entity_classes", &self.entity_classes),
        ] {
            for (key, value) in entries {
                if key.trim().is_empty() {
                    return Err(IdsError::EmptyMapping { table, field: "key" });
                }
                if value.trim().is_empty() {
                    return Err(IdsError::EmptyMapping {
                        table,
                        field: "value",
                    });
                }
            }
        }
        Ok(())
    }
}
