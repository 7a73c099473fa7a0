use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group id every generated parameter is filed under.
pub const PARAMETER_GROUP_ID: u32 = 1;

/// One row of a Revit shared parameter file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedParameter {
    pub guid: Uuid,
    pub name: String,
    /// Revit parameter type code (e.g. `TEXT`, `YESNO`).
    pub data_type: String,
    pub data_category: String,
    pub group: u32,
    pub visible: bool,
    pub description: String,
    pub user_modifiable: bool,
    pub hide_when_no_value: bool,
}

impl SharedParameter {
    /// Creates a parameter with the fixed defaults used for IDS exports.
    pub fn new(guid: Uuid, name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            data_type: data_type.into(),
            data_category: String::new(),
            group: PARAMETER_GROUP_ID,
            visible: true,
            description: String::new(),
            user_modifiable: true,
            hide_when_no_value: false,
        }
    }
}

/// A property inside a user-defined property set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMember {
    pub name_in_ifc: String,
    /// Revit IFC-export type (e.g. `Text`, `Real`).
    pub export_type: String,
    pub revit_name: String,
}

impl PropertyMember {
    /// Member whose Revit parameter name matches the IFC property name.
    pub fn same_name(name: impl Into<String>, export_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            revit_name: name.clone(),
            name_in_ifc: name,
            export_type: export_type.into(),
        }
    }
}

/// A user-defined property set for the Revit IFC exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    pub name: String,
    /// Revit IFC classes the set is assigned to. Fixed when the set is created.
    pub elements: Vec<String>,
    pub props: Vec<PropertyMember>,
}

impl PropertySet {
    pub fn new(name: impl Into<String>, elements: Vec<String>) -> Self {
        Self {
            name: name.into(),
            elements,
            props: Vec::new(),
        }
    }
}

/// Facets the mapping engine filtered out, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub specifications: usize,
    pub skipped_non_simple: usize,
    pub skipped_unmapped_type: usize,
    pub skipped_unmapped_export: usize,
    pub skipped_unmapped_entity: usize,
    pub duplicate_parameters: usize,
    pub specifications_without_applicability: usize,
    /// Facets of a kind the engine does not consume (attribute, material, ...).
    pub ignored_facets: usize,
}

impl ConversionReport {
    pub fn skipped_total(&self) -> usize {
        self.skipped_non_simple
            + self.skipped_unmapped_type
            + self.skipped_unmapped_export
            + self.skipped_unmapped_entity
            + self.duplicate_parameters
    }
}

/// Result of one engine pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    pub parameters: Vec<SharedParameter>,
    pub sets: Vec<PropertySet>,
    pub report: ConversionReport,
}

impl ConversionOutput {
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.sets.is_empty()
    }

    pub fn property_count(&self) -> usize {
        self.sets.iter().map(|set| set.props.len()).sum()
    }
}

/// Files written by the report stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputPaths {
    pub shared_parameters: Option<PathBuf>,
    pub property_sets: Option<PathBuf>,
}
