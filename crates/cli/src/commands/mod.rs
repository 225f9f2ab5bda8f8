//! Command implementations

pub mod beacon;
pub mod proof;
pub mod verification_key;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Serialize a document and write it in one shot
///
/// Serialization happens before the file is touched, so a failing transform
/// never leaves a partial output behind.
pub(crate) fn write_document<T: serde::Serialize>(path: &Path, document: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json).with_context(|| format!("Failed to write output file: {:?}", path))
}

/// Read a UTF-8 document with a path-bearing error
pub(crate) fn read_document(path: &Path, what: &str) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {} file: {:?}", what, path))
}
