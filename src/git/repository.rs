use crate::error::Result;
use git2::{Commit, DiffOptions, ErrorCode, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository whose working tree is exactly `path`
    ///
    /// Parent directories are not searched: version paths are resolved
    /// against `path` on disk and against the tree root in history, so the
    /// two must be the same directory.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::open(path)?;

        Ok(Git2Repository { repo })
    }

    /// Resolve a reference to a commit, `None` if it does not resolve
    fn resolve_commit(&self, reference: &str) -> Result<Option<Commit<'_>>> {
        match self
            .repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
        {
            Ok(commit) => Ok(Some(commit)),
            Err(e) if is_unresolved(&e) => {
                debug!(reference, error = %e, "reference does not resolve");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Errors that mean "no such reference or path" rather than a broken lookup
fn is_unresolved(error: &git2::Error) -> bool {
    matches!(
        error.code(),
        ErrorCode::NotFound | ErrorCode::InvalidSpec | ErrorCode::Ambiguous | ErrorCode::Peel
    )
}

impl super::Repository for Git2Repository {
    fn read_file_at(&self, reference: &str, path: &str) -> Result<Option<Vec<u8>>> {
        let commit = match self.resolve_commit(reference)? {
            Some(commit) => commit,
            None => return Ok(None),
        };

        let tree = commit.tree()?;
        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(reference, path, "path absent at reference");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        Ok(Some(blob.content().to_vec()))
    }

    fn diff_paths(&self, base: &str, path: &str) -> Result<Vec<String>> {
        let base_commit = self.repo.revparse_single(base)?.peel_to_commit()?;
        let head_commit = self.repo.head()?.peel_to_commit()?;
        let merge_base = self.repo.merge_base(base_commit.id(), head_commit.id())?;

        let old_tree = self.repo.find_commit(merge_base)?.tree()?;
        let new_tree = head_commit.tree()?;

        let mut options = DiffOptions::new();
        options.pathspec(path).disable_pathspec_match(true);

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), Some(&mut options))?;

        let paths = diff
            .deltas()
            .filter_map(|delta| delta.new_file().path().or_else(|| delta.old_file().path()))
            .map(|p| p.to_string_lossy().replace('\\', "/"))
            .collect();

        Ok(paths)
    }

    fn ref_exists(&self, reference: &str) -> bool {
        self.repo
            .revparse_single(reference)
            .and_then(|object| object.peel_to_commit())
            .is_ok()
    }
}
