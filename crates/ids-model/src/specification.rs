use serde::{Deserialize, Serialize};

use crate::facet::Facet;

/// Header block of an IDS document (`<ids:info>`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// One `<ids:specification>` group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    /// Document-order key, unique within an [`IdsDocument`].
    pub identifier: String,
    pub name: String,
    pub description: Option<String>,
    pub ifc_versions: Vec<String>,
    pub applicability: Vec<Facet>,
    pub requirements: Vec<Facet>,
}

impl Specification {
    pub fn new(identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            description: None,
            ifc_versions: Vec::new(),
            applicability: Vec::new(),
            requirements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_applicability(mut self, facet: Facet) -> Self {
        self.applicability.push(facet);
        self
    }

    #[must_use]
    pub fn with_requirement(mut self, facet: Facet) -> Self {
        self.requirements.push(facet);
        self
    }
}

/// A loaded IDS document. Specifications keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdsDocument {
    pub info: DocumentInfo,
    pub specifications: Vec<Specification>,
}

impl IdsDocument {
    pub fn get(&self, identifier: &str) -> Option<&Specification> {
        self.specifications
            .iter()
            .find(|spec| spec.identifier == identifier)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Specification> {
        self.specifications.iter()
    }

    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }
}

impl<'a> IntoIterator for &'a IdsDocument {
    type Item = &'a Specification;
    type IntoIter = std::slice::Iter<'a, Specification>;

    fn into_iter(self) -> Self::IntoIter {
        self.specifications.iter()
    }
}
