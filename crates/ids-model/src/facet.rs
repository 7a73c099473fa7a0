//! Facets and name expressions as they appear in IDS applicability and
//! requirement blocks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value constraint inside a facet.
///
/// Only [`NameExpr::Simple`] carries a literal name. The restriction forms
/// are kept so callers can tell "not simple" apart from "missing".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "parameter", rename_all = "snake_case")]
pub enum NameExpr {
    /// `<simpleValue>` literal.
    Simple(String),
    /// `<xs:restriction>` with one or more `<xs:enumeration>` values.
    Enumeration(Vec<String>),
    /// `<xs:restriction>` with an `<xs:pattern>` regular expression.
    Pattern(String),
    /// `<xs:restriction>` with numeric or date bounds.
    Bounds(ValueBounds),
    /// `<xs:restriction>` with string length constraints.
    Length(LengthBounds),
}

impl NameExpr {
    pub fn simple(value: impl Into<String>) -> Self {
        Self::Simple(value.into())
    }

    /// Returns the literal value for simple expressions.
    pub fn as_simple(&self) -> Option<&str> {
        match self {
            Self::Simple(value) => Some(value.as_str()),
            Self::Enumeration(_) | Self::Pattern(_) | Self::Bounds(_) | Self::Length(_) => None,
        }
    }

    pub fn is_simple(&self) -> bool {
        self.as_simple().is_some()
    }

    /// Short label for logging.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Simple(_) => "simple",
            Self::Enumeration(_) => "enumeration",
            Self::Pattern(_) => "pattern",
            Self::Bounds(_) => "bounds",
            Self::Length(_) => "length",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min_inclusive: Option<String>,
    pub max_inclusive: Option<String>,
    pub min_exclusive: Option<String>,
    pub max_exclusive: Option<String>,
}

impl ValueBounds {
    pub fn is_empty(&self) -> bool {
        self.min_inclusive.is_none()
            && self.max_inclusive.is_none()
            && self.min_exclusive.is_none()
            && self.max_exclusive.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub length: Option<u32>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl LengthBounds {
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.min_length.is_none() && self.max_length.is_none()
    }
}

/// Facet tag, mirroring the IDS element names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetKind {
    Entity,
    Attribute,
    Classification,
    Property,
    Material,
    PartOf,
}

impl FacetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Attribute => "Attribute",
            Self::Classification => "Classification",
            Self::Property => "Property",
            Self::Material => "Material",
            Self::PartOf => "PartOf",
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One applicability or requirement rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facet {
    /// IFC entity class, e.g. `IFCWALL`.
    Entity {
        name: NameExpr,
        predefined_type: Option<NameExpr>,
    },
    /// Property inside a property set.
    Property {
        property_set: NameExpr,
        base_name: NameExpr,
        /// IFC measure type code such as `IFCLABEL`.
        data_type: Option<String>,
        value: Option<NameExpr>,
    },
    Attribute {
        name: NameExpr,
        value: Option<NameExpr>,
    },
    Classification {
        system: Option<NameExpr>,
        value: Option<NameExpr>,
    },
    Material {
        value: Option<NameExpr>,
    },
    PartOf {
        entity: Option<NameExpr>,
        relation: Option<String>,
    },
}

impl Facet {
    pub fn kind(&self) -> FacetKind {
        match self {
            Self::Entity { .. } => FacetKind::Entity,
            Self::Property { .. } => FacetKind::Property,
            Self::Attribute { .. } => FacetKind::Attribute,
            Self::Classification { .. } => FacetKind::Classification,
            Self::Material { .. } => FacetKind::Material,
            Self::PartOf { .. } => FacetKind::PartOf,
        }
    }

    /// Builds a property facet with simple set and property names.
    pub fn simple_property(
        property_set: impl Into<String>,
        base_name: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self::Property {
            property_set: NameExpr::Simple(property_set.into()),
            base_name: NameExpr::Simple(base_name.into()),
            data_type: Some(data_type.into()),
            value: None,
        }
    }

    /// Builds an entity facet with a simple class name.
    pub fn simple_entity(name: impl Into<String>) -> Self {
        Self::Entity {
            name: NameExpr::Simple(name.into()),
            predefined_type: None,
        }
    }
}
