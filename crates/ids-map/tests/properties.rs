//! Property tests for the mapping engine invariants.

use std::collections::{HashMap, HashSet};

use ids_map::{MappingEngine, SequentialGuids};
use ids_model::{Facet, MappingTables, NameExpr, Specification};
use proptest::prelude::*;

const DATA_TYPES: &[&str] = &["IFCLABEL", "IFCBOOLEAN", "IFCDURATION", "IFCUNKNOWN"];
const ENTITIES: &[&str] = &["IFCWALL", "IFCCOLUMN", "IFCSLAB"];
const PROPERTY_SETS: &[&str] = &["PS1", "PS2", "PS3"];
const NAMES: &[&str] = &["FireRating", "IsExternal", "LoadBearing", "Reference"];

fn tables() -> MappingTables {
    MappingTables::new()
        .with_data_type("IFCLABEL", "TEXT", "Text")
        .with_data_type("IFCBOOLEAN", "YESNO", "Boolean")
        .with_data_type("IFCDURATION", "NUMBER", "Real")
        .with_entity_class("IFCWALL", "IfcWall")
        .with_entity_class("IFCCOLUMN", "IfcColumn")
}

fn name_expr(pool: &'static [&'static str]) -> impl Strategy<Value = NameExpr> {
    prop_oneof![
        4 => prop::sample::select(pool).prop_map(|value| NameExpr::simple(value)),
        1 => prop::sample::select(pool).prop_map(|value| NameExpr::Pattern(format!("{value}.*"))),
    ]
}

fn requirement() -> impl Strategy<Value = Facet> {
    prop_oneof![
        5 => (
            name_expr(PROPERTY_SETS),
            name_expr(NAMES),
            prop::sample::select(DATA_TYPES),
        )
            .prop_map(|(property_set, base_name, data_type)| Facet::Property {
                property_set,
                base_name,
                data_type: Some(data_type.to_string()),
                value: None,
            }),
        1 => Just(Facet::Material { value: None }),
    ]
}

fn applicability() -> impl Strategy<Value = Facet> {
    prop_oneof![
        5 => name_expr(ENTITIES).prop_map(|name| Facet::Entity {
            name,
            predefined_type: None,
        }),
        1 => Just(Facet::Classification {
            system: None,
            value: None,
        }),
    ]
}

fn specifications() -> impl Strategy<Value = Vec<Specification>> {
    prop::collection::vec(
        (
            prop::collection::vec(applicability(), 0..3),
            prop::collection::vec(requirement(), 0..5),
        ),
        0..6,
    )
    .prop_map(|groups| {
        groups
            .into_iter()
            .enumerate()
            .map(|(index, (applicability, requirements))| Specification {
                applicability,
                requirements,
                ..Specification::new(format!("spec-{}", index + 1), format!("Spec {index}"))
            })
            .collect()
    })
}

fn resolved_elements(tables: &MappingTables, spec: &Specification) -> Vec<String> {
    spec.applicability
        .iter()
        .filter_map(|facet| match facet {
            Facet::Entity { name, .. } => name.as_simple(),
            _ => None,
        })
        .filter_map(|entity| tables.entity_class(entity))
        .map(str::to_string)
        .collect()
}

proptest! {
    #[test]
    fn parameter_names_are_unique(specs in specifications()) {
        let tables = tables();
        let output = MappingEngine::with_guids(&tables, SequentialGuids::new()).convert(&specs);
        let mut seen = HashSet::new();
        for parameter in &output.parameters {
            prop_assert!(seen.insert(parameter.name.clone()), "duplicate {}", parameter.name);
        }
    }

    #[test]
    fn output_is_deterministic_modulo_guids(specs in specifications()) {
        let tables = tables();
        let first = MappingEngine::new(&tables).convert(&specs);
        let second = MappingEngine::new(&tables).convert(&specs);

        let strip = |output: &ids_model::ConversionOutput| -> Vec<(String, String)> {
            output
                .parameters
                .iter()
                .map(|p| (p.name.clone(), p.data_type.clone()))
                .collect()
        };
        prop_assert_eq!(strip(&first), strip(&second));
        prop_assert_eq!(&first.sets, &second.sets);
        prop_assert_eq!(first.report, second.report);
    }

    #[test]
    fn sets_keep_first_applicability(specs in specifications()) {
        let tables = tables();
        let output = MappingEngine::with_guids(&tables, SequentialGuids::new()).convert(&specs);

        // Elements of the first specification that used each set name.
        let mut expected: HashMap<String, Vec<String>> = HashMap::new();
        for spec in &specs {
            let elements = resolved_elements(&tables, spec);
            if elements.is_empty() {
                continue;
            }
            for facet in &spec.requirements {
                let Facet::Property { property_set, base_name, data_type, .. } = facet else {
                    continue;
                };
                let exported = data_type.as_deref().and_then(|code| tables.export_type(code));
                if let (Some(set), true, Some(_)) =
                    (property_set.as_simple(), base_name.is_simple(), exported)
                {
                    expected.entry(set.to_string()).or_insert_with(|| elements.clone());
                }
            }
        }

        prop_assert_eq!(output.sets.len(), expected.len());
        for set in &output.sets {
            prop_assert!(!set.elements.is_empty());
            prop_assert_eq!(Some(&set.elements), expected.get(&set.name));
        }
    }

    #[test]
    fn specifications_without_applicability_add_no_sets(specs in specifications()) {
        let tables = tables();
        let gated: Vec<Specification> = specs
            .into_iter()
            .filter(|spec| resolved_elements(&tables, spec).is_empty())
            .collect();
        let output = MappingEngine::with_guids(&tables, SequentialGuids::new()).convert(&gated);
        prop_assert!(output.sets.is_empty());
        prop_assert_eq!(output.report.specifications_without_applicability, gated.len());
    }
}
