//! Intermediate record file (a JSON array of records).

use std::fs;
use std::path::Path;

use tier_model::ProductRecord;
use tracing::debug;

use crate::error::{IngestError, Result};

pub fn read_records(path: &Path) -> Result<Vec<ProductRecord>> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ProductRecord> =
        serde_json::from_str(&content).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), records = records.len(), "loaded records");
    Ok(records)
}

/// Writes `records` as pretty-printed JSON, replacing any existing file.
pub fn write_records(path: &Path, records: &[ProductRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| IngestError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = records.len(), "wrote records");
    Ok(())
}
