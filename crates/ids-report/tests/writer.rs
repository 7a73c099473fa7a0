//! Integration tests for Revit file rendering and writing.

use std::fs;

use ids_model::{ConversionOutput, PropertyMember, PropertySet, SharedParameter};
use ids_report::{
    PROPERTY_SETS_FILE, SHARED_PARAMETERS_FILE, render_property_sets, render_shared_parameters,
    write_outputs,
};
use uuid::Uuid;

fn test_parameters() -> Vec<SharedParameter> {
    vec![
        SharedParameter::new(Uuid::from_u128(1), "FireRating", "TEXT"),
        SharedParameter::new(Uuid::from_u128(2), "IsExternal", "YESNO"),
        SharedParameter::new(Uuid::from_u128(3), "FireResistance", "NUMBER"),
    ]
}

fn test_sets() -> Vec<PropertySet> {
    let mut walls = PropertySet::new("Pset_WallCommon", vec!["IfcWall".to_string()]);
    walls.props.push(PropertyMember::same_name("FireRating", "Text"));
    walls.props.push(PropertyMember::same_name("IsExternal", "Boolean"));

    let mut columns = PropertySet::new(
        "Pset_ColumnCommon",
        vec!["IfcColumn".to_string(), "IfcBeam".to_string()],
    );
    columns
        .props
        .push(PropertyMember::same_name("FireResistance", "Real"));

    vec![walls, columns]
}

fn test_output() -> ConversionOutput {
    ConversionOutput {
        parameters: test_parameters(),
        sets: test_sets(),
        ..ConversionOutput::default()
    }
}

#[test]
fn test_shared_parameters_snapshot() {
    let text = render_shared_parameters(&test_parameters());
    insta::assert_snapshot!("shared_parameters", text);
}

#[test]
fn test_property_sets_snapshot() {
    let text = render_property_sets(&test_sets());
    insta::assert_snapshot!("property_sets", text);
}

#[test]
fn test_shared_parameters_layout() {
    let text = render_shared_parameters(&test_parameters());
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(lines[2], "*META\tVERSION\tMINVERSION");
    assert_eq!(lines[5], "GROUP\t1\tIFC Parameters");
    assert_eq!(
        lines[7],
        "PARAM\t00000000-0000-0000-0000-000000000001\tFireRating\tTEXT\t\t1\t1\t\t1\t0"
    );
    assert!(!text.ends_with('\n'), "no newline after the last row");
}

#[test]
fn test_property_sets_layout() {
    let text = render_property_sets(&test_sets());
    assert_eq!(
        text,
        "PropertySet:\tPset_WallCommon\tI\tIfcWall\n\
         \tFireRating\tText\tFireRating\n\
         \tIsExternal\tBoolean\tIsExternal\n\
         PropertySet:\tPset_ColumnCommon\tI\tIfcColumn,IfcBeam\n\
         \tFireResistance\tReal\tFireResistance"
    );
}

#[test]
fn test_set_without_properties_keeps_header() {
    let set = PropertySet::new("Pset_Empty", vec!["IfcWall".to_string()]);
    assert_eq!(
        render_property_sets(&[set]),
        "PropertySet:\tPset_Empty\tI\tIfcWall"
    );
}

#[test]
fn test_write_outputs_creates_both_files() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out").join("revit");

    let paths = write_outputs(&target, &test_output()).unwrap();

    let shared = paths.shared_parameters.unwrap();
    let psets = paths.property_sets.unwrap();
    assert_eq!(shared, target.join(SHARED_PARAMETERS_FILE));
    assert_eq!(psets, target.join(PROPERTY_SETS_FILE));
    assert_eq!(
        fs::read_to_string(&shared).unwrap(),
        render_shared_parameters(&test_parameters())
    );
    assert_eq!(
        fs::read_to_string(&psets).unwrap(),
        render_property_sets(&test_sets())
    );
}

#[test]
fn test_write_outputs_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(SHARED_PARAMETERS_FILE), "stale content that is longer").unwrap();
    fs::write(dir.path().join(PROPERTY_SETS_FILE), "stale").unwrap();

    write_outputs(dir.path(), &ConversionOutput::default()).unwrap();

    let shared = fs::read_to_string(dir.path().join(SHARED_PARAMETERS_FILE)).unwrap();
    let psets = fs::read_to_string(dir.path().join(PROPERTY_SETS_FILE)).unwrap();
    assert!(shared.starts_with("# This is a Revit shared parameter file."));
    assert!(!shared.contains("stale"));
    assert_eq!(psets, "");
}

#[test]
fn test_write_outputs_reports_unwritable_target() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let error = write_outputs(&blocker, &test_output()).unwrap_err();
    assert!(format!("{error:#}").contains("blocker"));
}
