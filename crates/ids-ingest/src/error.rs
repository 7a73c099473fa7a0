//! Error types for IDS ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an IDS document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read the IDS file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === XML Errors ===
    /// The document is not well-formed XML.
    #[error("invalid XML at byte {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// The document has no `<ids>` root element.
    #[error("document has no <ids> root element")]
    MissingRoot,

    // === IDS Structure Errors ===
    /// Well-formed XML that does not follow the IDS structure.
    #[error("malformed IDS: {message}")]
    Malformed { message: String },
}

impl IngestError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
