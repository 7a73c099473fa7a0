//! IDS document loading.
//!
//! Turns an IDS 1.0 XML document into an [`IdsDocument`]. Facets and name
//! expressions are parsed into closed enums; interpreting them is left to
//! the mapping engine.

use std::collections::HashSet;
use std::path::Path;

use ids_model::{
    DocumentInfo, Facet, IdsDocument, LengthBounds, NameExpr, Specification, ValueBounds,
};
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};
use crate::xml::{Element, parse_tree};

/// Reads and parses an IDS file.
pub fn load_ids_file(path: &Path) -> Result<IdsDocument> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let document = parse_ids(&text)?;
    info!(
        path = %path.display(),
        specification_count = document.len(),
        title = document.info.title.as_deref().unwrap_or(""),
        "loaded IDS document"
    );
    Ok(document)
}

/// Parses IDS XML text.
pub fn parse_ids(text: &str) -> Result<IdsDocument> {
    let root = parse_tree(text)?;
    if root.name != "ids" {
        return Err(IngestError::MissingRoot);
    }

    let info = root.child("info").map(parse_info).unwrap_or_default();
    let container = root
        .child("specifications")
        .ok_or_else(|| IngestError::malformed("missing <specifications> element"))?;

    let mut used_identifiers = HashSet::new();
    let mut specifications = Vec::new();
    for (index, element) in container.children_named("specification").enumerate() {
        let specification = parse_specification(element, index + 1, &mut used_identifiers)?;
        debug!(
            identifier = %specification.identifier,
            name = %specification.name,
            applicability = specification.applicability.len(),
            requirements = specification.requirements.len(),
            "parsed specification"
        );
        specifications.push(specification);
    }

    Ok(IdsDocument {
        info,
        specifications,
    })
}

fn parse_info(element: &Element) -> DocumentInfo {
    let text_of = |name: &str| {
        element
            .child(name)
            .map(|child| child.text_trimmed().to_string())
            .filter(|value| !value.is_empty())
    };
    DocumentInfo {
        title: text_of("title"),
        version: text_of("version"),
        author: text_of("author"),
        date: text_of("date"),
        description: text_of("description"),
    }
}

fn parse_specification(
    element: &Element,
    position: usize,
    used_identifiers: &mut HashSet<String>,
) -> Result<Specification> {
    let identifier = assign_identifier(element.attr_trimmed("identifier"), position, used_identifiers);
    let name = element
        .attr_trimmed("name")
        .map_or_else(|| format!("Specification {position}"), str::to_string);
    let ifc_versions = element
        .attr("ifcVersion")
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();

    let applicability = match element.child("applicability") {
        Some(block) => parse_facets(block, &name)?,
        None => Vec::new(),
    };
    let requirements = match element.child("requirements") {
        Some(block) => parse_facets(block, &name)?,
        None => Vec::new(),
    };

    Ok(Specification {
        identifier,
        name,
        description: element.attr_trimmed("description").map(str::to_string),
        ifc_versions,
        applicability,
        requirements,
    })
}

/// Uses the document's `identifier` attribute when it is free, otherwise a
/// positional `spec-<n>` key.
fn assign_identifier(
    declared: Option<&str>,
    position: usize,
    used_identifiers: &mut HashSet<String>,
) -> String {
    if let Some(declared) = declared
        && used_identifiers.insert(declared.to_string())
    {
        return declared.to_string();
    }
    let mut candidate = format!("spec-{position}");
    let mut suffix = 1usize;
    while !used_identifiers.insert(candidate.clone()) {
        suffix += 1;
        candidate = format!("spec-{position}-{suffix}");
    }
    candidate
}

fn parse_facets(block: &Element, specification: &str) -> Result<Vec<Facet>> {
    let mut facets = Vec::with_capacity(block.children.len());
    for child in &block.children {
        let facet = match child.name.as_str() {
            "entity" => parse_entity(child)?,
            "property" => parse_property(child)?,
            "attribute" => Facet::Attribute {
                name: required_expr(child, "name")?,
                value: optional_expr(child, "value")?,
            },
            "classification" => Facet::Classification {
                system: optional_expr(child, "system")?,
                value: optional_expr(child, "value")?,
            },
            "material" => Facet::Material {
                value: optional_expr(child, "value")?,
            },
            "partOf" => Facet::PartOf {
                entity: match child.child("entity") {
                    Some(entity) => optional_expr(entity, "name")?,
                    None => None,
                },
                relation: child.attr_trimmed("relation").map(str::to_string),
            },
            other => {
                warn!(
                    specification,
                    section = %block.name,
                    element = other,
                    "skipping unknown facet element"
                );
                continue;
            }
        };
        facets.push(facet);
    }
    Ok(facets)
}

fn parse_entity(element: &Element) -> Result<Facet> {
    Ok(Facet::Entity {
        name: required_expr(element, "name")?,
        predefined_type: optional_expr(element, "predefinedType")?,
    })
}

fn parse_property(element: &Element) -> Result<Facet> {
    // IDS 0.9 documents name the property `<name>` instead of `<baseName>`.
    let base_name = element
        .child("baseName")
        .or_else(|| element.child("name"))
        .ok_or_else(|| IngestError::malformed("<property> is missing <baseName>"))?;
    Ok(Facet::Property {
        property_set: required_expr(element, "propertySet")?,
        base_name: parse_expr(base_name)?,
        data_type: element.attr_trimmed("dataType").map(str::to_string),
        value: optional_expr(element, "value")?,
    })
}

fn required_expr(parent: &Element, name: &str) -> Result<NameExpr> {
    let child = parent.child(name).ok_or_else(|| {
        IngestError::malformed(format!("<{}> is missing <{name}>", parent.name))
    })?;
    parse_expr(child)
}

fn optional_expr(parent: &Element, name: &str) -> Result<Option<NameExpr>> {
    parent.child(name).map(parse_expr).transpose()
}

fn parse_expr(element: &Element) -> Result<NameExpr> {
    if let Some(simple) = element.child("simpleValue") {
        let value = simple.text_trimmed();
        if value.is_empty() {
            return Err(IngestError::malformed(format!(
                "<{}> has an empty simpleValue",
                element.name
            )));
        }
        return Ok(NameExpr::Simple(value.to_string()));
    }
    if let Some(restriction) = element.child("restriction") {
        return parse_restriction(restriction, &element.name);
    }
    Err(IngestError::malformed(format!(
        "<{}> has neither simpleValue nor restriction",
        element.name
    )))
}

fn parse_restriction(restriction: &Element, owner: &str) -> Result<NameExpr> {
    let facet_value = |name: &str| {
        restriction
            .child(name)
            .and_then(|child| child.attr("value"))
            .map(str::to_string)
    };

    let enumeration: Vec<String> = restriction
        .children_named("enumeration")
        .filter_map(|child| child.attr("value"))
        .map(str::to_string)
        .collect();
    if !enumeration.is_empty() {
        return Ok(NameExpr::Enumeration(enumeration));
    }

    if let Some(pattern) = facet_value("pattern") {
        return Ok(NameExpr::Pattern(pattern));
    }

    let bounds = ValueBounds {
        min_inclusive: facet_value("minInclusive"),
        max_inclusive: facet_value("maxInclusive"),
        min_exclusive: facet_value("minExclusive"),
        max_exclusive: facet_value("maxExclusive"),
    };
    if !bounds.is_empty() {
        return Ok(NameExpr::Bounds(bounds));
    }

    let length_value = |name: &str| -> Result<Option<u32>> {
        facet_value(name)
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|_| {
                    IngestError::malformed(format!("invalid {name} '{raw}' in <{owner}>"))
                })
            })
            .transpose()
    };
    let length = LengthBounds {
        length: length_value("length")?,
        min_length: length_value("minLength")?,
        max_length: length_value("maxLength")?,
    };
    if !length.is_empty() {
        return Ok(NameExpr::Length(length));
    }

    Err(IngestError::malformed(format!(
        "<{owner}> has an empty restriction"
    )))
}
