//! Revit shared parameter file output.

use std::path::Path;

use anyhow::Result;
use ids_model::SharedParameter;
use ids_model::revit::PARAMETER_GROUP_ID;
use tracing::info;

use crate::common::{FIELD_SEPARATOR, flag, write_text_file};

/// Default file name for the shared parameter file.
pub const SHARED_PARAMETERS_FILE: &str = "SharedParameters.txt";

/// Name of the single parameter group every parameter belongs to.
pub const PARAMETER_GROUP_NAME: &str = "IFC Parameters";

const META_VERSION: u32 = 2;
const META_MIN_VERSION: u32 = 1;

const PARAM_COLUMNS: [&str; 10] = [
    "*PARAM",
    "GUID",
    "NAME",
    "DATATYPE",
    "DATACATEGORY",
    "GROUP",
    "VISIBLE",
    "DESCRIPTION",
    "USERMODIFIABLE",
    "HIDEWHENNOVALUE",
];

/// Render the shared parameter file.
///
/// The header block is always present. Parameter rows follow in input
/// order, newline separated, with no trailing newline after the last row.
pub fn render_shared_parameters(parameters: &[SharedParameter]) -> String {
    let mut out = header();
    let rows: Vec<String> = parameters.iter().map(parameter_row).collect();
    out.push_str(&rows.join("\n"));
    out
}

fn header() -> String {
    let lines = [
        "# This is a Revit shared parameter file.".to_string(),
        "# Do not edit manually.".to_string(),
        ["*META", "VERSION", "MINVERSION"].join(FIELD_SEPARATOR),
        [
            "META".to_string(),
            META_VERSION.to_string(),
            META_MIN_VERSION.to_string(),
        ]
        .join(FIELD_SEPARATOR),
        ["*GROUP", "ID", "NAME"].join(FIELD_SEPARATOR),
        [
            "GROUP".to_string(),
            PARAMETER_GROUP_ID.to_string(),
            PARAMETER_GROUP_NAME.to_string(),
        ]
        .join(FIELD_SEPARATOR),
        PARAM_COLUMNS.join(FIELD_SEPARATOR),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn parameter_row(parameter: &SharedParameter) -> String {
    let group = parameter.group.to_string();
    let guid = parameter.guid.hyphenated().to_string();
    [
        "PARAM",
        guid.as_str(),
        parameter.name.as_str(),
        parameter.data_type.as_str(),
        parameter.data_category.as_str(),
        group.as_str(),
        flag(parameter.visible),
        parameter.description.as_str(),
        flag(parameter.user_modifiable),
        flag(parameter.hide_when_no_value),
    ]
    .join(FIELD_SEPARATOR)
}

/// Write the shared parameter file to `path`, replacing any existing file.
pub fn write_shared_parameters(path: &Path, parameters: &[SharedParameter]) -> Result<()> {
    write_text_file(path, &render_shared_parameters(parameters))?;
    info!(
        path = %path.display(),
        parameter_count = parameters.len(),
        "wrote shared parameter file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn empty_input_renders_header_only() {
        let text = render_shared_parameters(&[]);
        assert!(text.ends_with("HIDEWHENNOVALUE\n"));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn row_uses_default_flags() {
        let parameter = SharedParameter::new(Uuid::from_u128(1), "FireRating", "TEXT");
        assert_eq!(
            parameter_row(&parameter),
            "PARAM\t00000000-0000-0000-0000-000000000001\tFireRating\tTEXT\t\t1\t1\t\t1\t0"
        );
    }
}
