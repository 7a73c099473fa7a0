pub mod error;
pub mod facet;
pub mod mapping;
pub mod revit;
pub mod specification;

pub use error::{IdsError, Result};
pub use facet::{Facet, FacetKind, LengthBounds, NameExpr, ValueBounds};
pub use mapping::MappingTables;
pub use revit::{
    ConversionOutput, ConversionReport, OutputPaths, PARAMETER_GROUP_ID, PropertyMember,
    PropertySet, SharedParameter,
};
pub use specification::{DocumentInfo, IdsDocument, Specification};
