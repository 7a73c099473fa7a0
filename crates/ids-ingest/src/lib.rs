pub mod error;
pub mod loader;
mod xml;

pub use error::{IngestError, Result};
pub use loader::{load_ids_file, parse_ids};
