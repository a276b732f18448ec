use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met during a run.
/// These never fail the gate but are always reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum GateWarning {
    /// No git repository could be opened at the root
    RepositoryUnavailable { root: PathBuf, reason: String },
    /// The diff query failed and was treated as "no change"
    ChangeDetectionFailed { baseline: String, reason: String },
    /// The event payload exists but could not be read or parsed
    EventUnreadable { path: PathBuf, reason: String },
    /// A label entry in the event payload has no usable name
    MalformedLabel { index: usize },
}

impl fmt::Display for GateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateWarning::RepositoryUnavailable { root, reason } => {
                write!(
                    f,
                    "No git repository at '{}' ({}); no baseline history is available",
                    root.display(),
                    reason
                )
            }
            GateWarning::ChangeDetectionFailed { baseline, reason } => {
                write!(
                    f,
                    "Could not diff against '{}' ({}); assuming the version file is unchanged",
                    baseline, reason
                )
            }
            GateWarning::EventUnreadable { path, reason } => {
                write!(
                    f,
                    "Ignoring event payload '{}': {}",
                    path.display(),
                    reason
                )
            }
            GateWarning::MalformedLabel { index } => {
                write!(f, "Skipping pull request label #{} without a name", index)
            }
        }
    }
}
