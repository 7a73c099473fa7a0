//! Shared utilities for report generation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Field separator used by both Revit text formats.
pub const FIELD_SEPARATOR: &str = "\t";

/// Boolean flag as written by Revit (`1`/`0`).
pub fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_text_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
