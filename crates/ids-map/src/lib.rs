//! Conversion of IDS specifications into Revit shared parameters and
//! user-defined property sets.

#![deny(unsafe_code)]

pub mod engine;
pub mod guid;

pub use engine::{MappingEngine, convert_specifications};
pub use guid::{GuidSource, RandomGuids, SequentialGuids};
