use crate::error::{Result, VersionGateError};
use crate::git::Repository;

/// Stands in when no repository could be opened at the root
///
/// No reference exists and nothing can be read, so an explicit target branch
/// still resolves but its diff fails and its record is absent.
#[derive(Debug, Clone)]
pub struct UnavailableRepository {
    reason: String,
}

impl UnavailableRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableRepository {
            reason: reason.into(),
        }
    }
}

impl Repository for UnavailableRepository {
    fn read_file_at(&self, _reference: &str, _path: &str) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    fn diff_paths(&self, base: &str, _path: &str) -> Result<Vec<String>> {
        Err(VersionGateError::Git(git2::Error::from_str(&format!(
            "cannot diff {}...HEAD: {}",
            base, self.reason
        ))))
    }

    fn ref_exists(&self, _reference: &str) -> bool {
        false
    }
}
