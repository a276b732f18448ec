use crate::error::Result;
use crate::git::Repository;
use crate::warning::GateWarning;
use tracing::debug;

/// Decides whether the version file differs between a baseline and `HEAD`
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeDetector {
    strict: bool,
}

impl ChangeDetector {
    /// `strict` makes a failed diff query fatal instead of "no change"
    pub fn new(strict: bool) -> Self {
        ChangeDetector { strict }
    }

    /// Whether `path` changed in `baseline...HEAD`.
    ///
    /// In the default lenient mode a failed query yields `false` and records
    /// a [`GateWarning::ChangeDetectionFailed`].
    pub fn has_changed<R: Repository>(
        &self,
        repo: &R,
        baseline: &str,
        path: &str,
        warnings: &mut Vec<GateWarning>,
    ) -> Result<bool> {
        match repo.diff_paths(baseline, path) {
            Ok(paths) => {
                debug!(baseline, path, changed = !paths.is_empty(), "diffed version file");
                Ok(!paths.is_empty())
            }
            Err(e) if self.strict => Err(e),
            Err(e) => {
                debug!(baseline, error = %e, "change detection failed");
                warnings.push(GateWarning::ChangeDetectionFailed {
                    baseline: baseline.to_string(),
                    reason: e.to_string(),
                });
                Ok(false)
            }
        }
    }
}
