//! Revit user-defined property set file output.

use std::path::Path;

use anyhow::Result;
use ids_model::{PropertyMember, PropertySet};
use tracing::info;

use crate::common::{FIELD_SEPARATOR, write_text_file};

/// Default file name for the user-defined property set file.
pub const PROPERTY_SETS_FILE: &str = "UserDefinedPsets.txt";

/// Instance-level sets only; type-level sets are never produced.
const INSTANCE_MARKER: &str = "I";

/// Render the user-defined property set file.
///
/// Each set is a `PropertySet:` line followed by one indented line per
/// property. Blocks keep input order and are newline separated.
pub fn render_property_sets(sets: &[PropertySet]) -> String {
    let blocks: Vec<String> = sets.iter().map(set_block).collect();
    blocks.join("\n")
}

fn set_block(set: &PropertySet) -> String {
    let mut lines = Vec::with_capacity(set.props.len() + 1);
    lines.push(
        [
            "PropertySet:",
            set.name.as_str(),
            INSTANCE_MARKER,
            set.elements.join(",").as_str(),
        ]
        .join(FIELD_SEPARATOR),
    );
    lines.extend(set.props.iter().map(member_line));
    lines.join("\n")
}

fn member_line(member: &PropertyMember) -> String {
    let mut fields = vec![
        "",
        member.name_in_ifc.as_str(),
        member.export_type.as_str(),
    ];
    if !member.revit_name.is_empty() {
        fields.push(member.revit_name.as_str());
    }
    fields.join(FIELD_SEPARATOR)
}

/// Write the property set file to `path`, replacing any existing file.
pub fn write_property_sets(path: &Path, sets: &[PropertySet]) -> Result<()> {
    write_text_file(path, &render_property_sets(sets))?;
    info!(
        path = %path.display(),
        property_set_count = sets.len(),
        "wrote property set file"
    );
    Ok(())
}
