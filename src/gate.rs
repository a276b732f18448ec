//! The comparison engine: one validation pass from baseline resolution to verdict

use crate::baseline::resolve_baseline;
use crate::changes::ChangeDetector;
use crate::config::{CiEnvironment, Config};
use crate::domain::rules::ensure_release_touched;
use crate::domain::ComparisonContext;
use crate::error::Result;
use crate::git::Repository;
use crate::intent::{extract_labels, release_requested};
use crate::source::{read_at_ref, read_current};
use crate::warning::GateWarning;
use std::fmt;
use std::path::Path;
use tracing::info;

/// How a passing run concluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No baseline resolved; only the current record was validated
    CurrentOnly,
    /// The baseline has no version file; the current record is the first one
    InitialVersion {
        version_path: String,
        baseline: String,
    },
    /// Every applicable rule held
    Passed,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::CurrentOnly => {
                write!(f, "No base ref detected; validated current version only.")
            }
            Verdict::InitialVersion {
                version_path,
                baseline,
            } => write!(
                f,
                "{} not found on {}; treating as initial version.",
                version_path, baseline
            ),
            Verdict::Passed => write!(f, "Versioning validation passed."),
        }
    }
}

/// Runs the versioning checks for one repository checkout
pub struct VersionGate<'a> {
    config: &'a Config,
    env: &'a CiEnvironment,
    root: &'a Path,
}

impl<'a> VersionGate<'a> {
    pub fn new(config: &'a Config, env: &'a CiEnvironment, root: &'a Path) -> Self {
        VersionGate { config, env, root }
    }

    /// Run the full check against `repo`.
    ///
    /// Stops at the first violation. Soft conditions met along the way are
    /// appended to `warnings` whether or not the run passes.
    pub fn run<R: Repository>(&self, repo: &R, warnings: &mut Vec<GateWarning>) -> Result<Verdict> {
        let path = self.config.version_path.as_str();
        let current = read_current(self.root, path)?;

        let Some(baseline) = resolve_baseline(repo, self.env, &self.config.baseline) else {
            info!("no baseline reference resolved");
            return Ok(Verdict::CurrentOnly);
        };
        info!(baseline = %baseline, "comparing against baseline");

        let detector = ChangeDetector::new(self.config.change_detection.strict);
        let file_changed = detector.has_changed(repo, &baseline, path, warnings)?;

        let labels = extract_labels(self.env.event_path.as_deref(), warnings);
        let release = release_requested(&labels, &self.config.release_labels);

        ensure_release_touched(file_changed, release, path)?;

        let Some(base) = read_at_ref(repo, &baseline, path)? else {
            return Ok(Verdict::InitialVersion {
                version_path: path.to_string(),
                baseline,
            });
        };

        ComparisonContext::new(current, Some(base), file_changed, release).evaluate()?;
        Ok(Verdict::Passed)
    }
}
