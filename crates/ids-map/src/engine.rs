//! Mapping engine implementation.

use std::collections::{HashMap, HashSet};

use ids_model::{
    ConversionOutput, ConversionReport, Facet, MappingTables, NameExpr, PropertyMember,
    PropertySet, SharedParameter, Specification,
};
use tracing::{debug, info, info_span};

use crate::guid::{GuidSource, RandomGuids};

/// Engine for converting IDS specifications into Revit shared parameters
/// and user-defined property sets.
///
/// Output order follows input order: specifications as given, facets in
/// document order. Unmappable facets are filtered, never reported as errors.
///
/// # Example
///
/// ```ignore
/// use ids_map::{MappingEngine, SequentialGuids};
///
/// let engine = MappingEngine::with_guids(&tables, SequentialGuids::new());
/// let output = engine.convert(&document);
/// ```
pub struct MappingEngine<'a, G = RandomGuids> {
    tables: &'a MappingTables,
    guids: G,
}

impl<'a> MappingEngine<'a, RandomGuids> {
    pub fn new(tables: &'a MappingTables) -> Self {
        Self::with_guids(tables, RandomGuids)
    }
}

impl<'a, G: GuidSource> MappingEngine<'a, G> {
    pub fn with_guids(tables: &'a MappingTables, guids: G) -> Self {
        Self { tables, guids }
    }

    /// Runs one pass over `specifications`.
    pub fn convert<'s, I>(mut self, specifications: I) -> ConversionOutput
    where
        I: IntoIterator<Item = &'s Specification>,
    {
        let span = info_span!("map");
        let _guard = span.enter();

        let mut state = ConversionState::default();
        for specification in specifications {
            state.report.specifications += 1;
            self.harvest_parameters(specification, &mut state);
            let elements = self.resolve_applicability(specification, &mut state.report);
            if elements.is_empty() {
                debug!(
                    specification = %specification.name,
                    "no mappable applicability, skipping property sets"
                );
                state.report.specifications_without_applicability += 1;
                continue;
            }
            self.build_property_sets(specification, &elements, &mut state);
        }

        let output = state.finish();
        info!(
            specification_count = output.report.specifications,
            parameter_count = output.parameters.len(),
            property_set_count = output.sets.len(),
            skipped = output.report.skipped_total(),
            "mapping complete"
        );
        output
    }

    /// First pass: one shared parameter per distinct property name.
    fn harvest_parameters(&mut self, specification: &Specification, state: &mut ConversionState) {
        for facet in &specification.requirements {
            let Facet::Property {
                base_name,
                data_type,
                ..
            } = facet
            else {
                debug!(
                    specification = %specification.name,
                    kind = %facet.kind(),
                    "requirement does not produce a parameter"
                );
                state.report.ignored_facets += 1;
                continue;
            };
            let Some(name) = simple_name(base_name, specification, "baseName", &mut state.report)
            else {
                continue;
            };
            let Some(revit_type) = data_type
                .as_deref()
                .and_then(|code| self.tables.parameter_type(code))
            else {
                debug!(
                    specification = %specification.name,
                    property = name,
                    data_type = data_type.as_deref().unwrap_or(""),
                    "no Revit parameter type"
                );
                state.report.skipped_unmapped_type += 1;
                continue;
            };
            if state.parameter_names.contains(name) {
                debug!(
                    specification = %specification.name,
                    property = name,
                    "parameter already defined, keeping first"
                );
                state.report.duplicate_parameters += 1;
                continue;
            }
            state.parameter_names.insert(name.to_string());
            state.parameters.push(SharedParameter::new(
                self.guids.next_guid(),
                name,
                revit_type,
            ));
        }
    }

    /// Revit classes the specification applies to, in document order.
    fn resolve_applicability(
        &self,
        specification: &Specification,
        report: &mut ConversionReport,
    ) -> Vec<String> {
        let mut elements = Vec::new();
        for facet in &specification.applicability {
            let Facet::Entity { name, .. } = facet else {
                debug!(
                    specification = %specification.name,
                    kind = %facet.kind(),
                    "applicability facet is not an entity"
                );
                report.ignored_facets += 1;
                continue;
            };
            let Some(entity) = simple_name(name, specification, "entity", report) else {
                continue;
            };
            match self.tables.entity_class(entity) {
                Some(class) => elements.push(class.to_string()),
                None => {
                    debug!(
                        specification = %specification.name,
                        entity,
                        "no Revit class for entity"
                    );
                    report.skipped_unmapped_entity += 1;
                }
            }
        }
        elements
    }

    /// Second pass over the requirements, independent of the first: a
    /// property can land in a set even when it produced no parameter.
    fn build_property_sets(
        &self,
        specification: &Specification,
        elements: &[String],
        state: &mut ConversionState,
    ) {
        for facet in &specification.requirements {
            let Facet::Property {
                property_set,
                base_name,
                data_type,
                ..
            } = facet
            else {
                continue;
            };
            // Non-simple names were already counted by the first pass.
            let (Some(set_name), Some(name)) = (property_set.as_simple(), base_name.as_simple())
            else {
                if base_name.is_simple() {
                    debug!(
                        specification = %specification.name,
                        expression = property_set.kind_label(),
                        "propertySet is not a simple value"
                    );
                    state.report.skipped_non_simple += 1;
                }
                continue;
            };
            let Some(export_type) = data_type
                .as_deref()
                .and_then(|code| self.tables.export_type(code))
            else {
                debug!(
                    specification = %specification.name,
                    property = name,
                    data_type = data_type.as_deref().unwrap_or(""),
                    "no Revit export type"
                );
                state.report.skipped_unmapped_export += 1;
                continue;
            };
            state
                .property_set(set_name, elements)
                .props
                .push(PropertyMember::same_name(name, export_type));
        }
    }
}

/// Accumulators for a single engine pass.
#[derive(Default)]
struct ConversionState {
    parameters: Vec<SharedParameter>,
    parameter_names: HashSet<String>,
    sets: Vec<PropertySet>,
    set_index: HashMap<String, usize>,
    report: ConversionReport,
}

impl ConversionState {
    /// Existing set by name, or a new one whose elements are `elements`.
    fn property_set(&mut self, name: &str, elements: &[String]) -> &mut PropertySet {
        let index = match self.set_index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.sets.len();
                self.sets.push(PropertySet::new(name, elements.to_vec()));
                self.set_index.insert(name.to_string(), index);
                index
            }
        };
        &mut self.sets[index]
    }

    fn finish(self) -> ConversionOutput {
        ConversionOutput {
            parameters: self.parameters,
            sets: self.sets,
            report: self.report,
        }
    }
}

fn simple_name<'e>(
    expr: &'e NameExpr,
    specification: &Specification,
    field: &'static str,
    report: &mut ConversionReport,
) -> Option<&'e str> {
    let value = expr.as_simple();
    if value.is_none() {
        debug!(
            specification = %specification.name,
            field,
            expression = expr.kind_label(),
            "name is not a simple value"
        );
        report.skipped_non_simple += 1;
    }
    value
}

/// Converts with random GUIDs.
pub fn convert_specifications<'s, I>(tables: &MappingTables, specifications: I) -> ConversionOutput
where
    I: IntoIterator<Item = &'s Specification>,
{
    MappingEngine::new(tables).convert(specifications)
}
