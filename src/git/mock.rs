use crate::error::{Result, VersionGateError};
use crate::git::Repository;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
///
/// References are plain names; each one holds a snapshot of file contents.
/// Changed paths are configured per baseline directly.
#[derive(Debug, Default)]
pub struct MockRepository {
    files: HashMap<String, HashMap<String, Vec<u8>>>,
    refs: HashSet<String>,
    changes: HashMap<String, Vec<String>>,
    failing_diffs: HashSet<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference with no files
    pub fn add_ref(&mut self, reference: impl Into<String>) {
        self.refs.insert(reference.into());
    }

    /// Store a file at a reference, registering the reference if needed
    pub fn add_file(
        &mut self,
        reference: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<Vec<u8>>,
    ) {
        let reference = reference.into();
        self.refs.insert(reference.clone());
        self.files
            .entry(reference)
            .or_default()
            .insert(path.into(), content.into());
    }

    /// Mark a path as changed between `base` and `HEAD`
    pub fn mark_changed(&mut self, base: impl Into<String>, path: impl Into<String>) {
        self.changes.entry(base.into()).or_default().push(path.into());
    }

    /// Make diff queries against `base` fail
    pub fn fail_diff(&mut self, base: impl Into<String>) {
        self.failing_diffs.insert(base.into());
    }
}

impl Repository for MockRepository {
    fn read_file_at(&self, reference: &str, path: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .files
            .get(reference)
            .and_then(|files| files.get(path))
            .cloned())
    }

    fn diff_paths(&self, base: &str, path: &str) -> Result<Vec<String>> {
        if self.failing_diffs.contains(base) || !self.refs.contains(base) {
            return Err(VersionGateError::Git(git2::Error::from_str(&format!(
                "invalid revision range {}...HEAD",
                base
            ))));
        }
        Ok(self
            .changes
            .get(base)
            .map(|paths| paths.iter().filter(|p| *p == path).cloned().collect())
            .unwrap_or_default())
    }

    fn ref_exists(&self, reference: &str) -> bool {
        self.refs.contains(reference)
    }
}
