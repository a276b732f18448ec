//! Reading version records from the working tree and from history

use crate::domain::VersionRecord;
use crate::error::{Result, VersionGateError};
use crate::git::Repository;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read and validate the version record in the working tree.
///
/// The current record must always exist; absence is a structural error.
pub fn read_current(root: &Path, version_path: &str) -> Result<VersionRecord> {
    let full_path = root.join(version_path);
    let bytes = std::fs::read(&full_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => VersionGateError::structure(format!("Missing {}", version_path)),
        _ => VersionGateError::structure(format!("Cannot read {}: {}", version_path, e)),
    })?;

    let value = decode(&bytes, version_path)?;
    debug!(path = %full_path.display(), "read current version record");
    VersionRecord::from_value(&value, version_path)
}

/// Read and validate the version record as it existed at `reference`.
///
/// `Ok(None)` means no record exists there, which is not an error. Content
/// that is present must still be valid JSON and a valid record.
pub fn read_at_ref<R: Repository>(
    repo: &R,
    reference: &str,
    version_path: &str,
) -> Result<Option<VersionRecord>> {
    let Some(bytes) = repo.read_file_at(reference, version_path)? else {
        return Ok(None);
    };

    let source = format!("{} at {}", version_path, reference);
    let value = decode(&bytes, &source)?;
    debug!(reference, path = version_path, "read baseline version record");
    VersionRecord::from_value(&value, &source).map(Some)
}

fn decode(bytes: &[u8], source: &str) -> Result<Value> {
    serde_json::from_slice(bytes)
        .map_err(|e| VersionGateError::structure(format!("Invalid JSON in {}: {}", source, e)))
}
