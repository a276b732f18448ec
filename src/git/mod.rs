//! Version-control queries behind a narrow trait
//!
//! The comparison engine only ever needs three things from version control:
//! the content of a file at a reference, the paths that changed since a
//! baseline, and whether a reference exists. The [Repository] trait captures
//! exactly that so the engine can run against any of its implementations:
//!
//! - [repository::Git2Repository]: a real repository through the `git2` crate
//! - [mock::MockRepository]: an in-memory repository for tests
//! - [unavailable::UnavailableRepository]: used when no repository opens at the root
//!
//! ```rust
//! # use version_gate::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> version_gate::Result<()> {
//! if repo.ref_exists("origin/main") {
//!     let changed = repo.diff_paths("origin/main", "Docs/version.json")?;
//!     let content = repo.read_file_at("origin/main", "Docs/version.json")?;
//!     println!("{} changed paths, baseline present: {}", changed.len(), content.is_some());
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod unavailable;

pub use mock::MockRepository;
pub use repository::Git2Repository;
pub use unavailable::UnavailableRepository;

use crate::error::Result;

/// Version-control operations needed by the gate
///
/// Paths are repository-relative and use `/` separators.
pub trait Repository {
    /// Read a file as it existed at `reference`
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` - The exact stored content
    /// * `Ok(None)` - The reference does not resolve, or the path is absent at it
    /// * `Err` - The lookup itself failed
    fn read_file_at(&self, reference: &str, path: &str) -> Result<Option<Vec<u8>>>;

    /// List paths matching `path` that differ between `base` and `HEAD`
    ///
    /// Compares the merge base of `base` and `HEAD` against `HEAD`, the
    /// same range as `git diff base...HEAD`.
    fn diff_paths(&self, base: &str, path: &str) -> Result<Vec<String>>;

    /// Whether `reference` resolves to a commit
    fn ref_exists(&self, reference: &str) -> bool;
}
