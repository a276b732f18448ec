//! Release intent from the pull request labels in a CI event payload

use crate::warning::GateWarning;
use serde_json::Value;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::debug;

/// Collect the label names applied to the pull request in an event payload.
///
/// Release intent is opt-in, so every problem here degrades to "no labels":
/// an unset path gives an empty set silently, an unreadable or unparseable
/// payload gives an empty set plus a warning, and individual label entries
/// without a string `name` are skipped.
pub fn extract_labels(
    event_path: Option<&Path>,
    warnings: &mut Vec<GateWarning>,
) -> BTreeSet<String> {
    let Some(path) = event_path else {
        debug!("no event payload configured");
        return BTreeSet::new();
    };

    let event = std::fs::read(path)
        .map_err(|e| e.to_string())
        .and_then(|bytes| serde_json::from_slice::<Value>(&bytes).map_err(|e| e.to_string()));

    match event {
        Ok(event) => labels_from_event(&event, warnings),
        Err(reason) => {
            warnings.push(GateWarning::EventUnreadable {
                path: path.to_path_buf(),
                reason,
            });
            BTreeSet::new()
        }
    }
}

/// Pull `pull_request.labels[*].name` out of a decoded event
pub fn labels_from_event(event: &Value, warnings: &mut Vec<GateWarning>) -> BTreeSet<String> {
    let Some(entries) = event
        .get("pull_request")
        .and_then(|pr| pr.get("labels"))
        .and_then(Value::as_array)
    else {
        return BTreeSet::new();
    };

    let mut labels = BTreeSet::new();
    for (index, entry) in entries.iter().enumerate() {
        match entry.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => {
                labels.insert(name.to_string());
            }
            _ => warnings.push(GateWarning::MalformedLabel { index }),
        }
    }
    debug!(?labels, "pull request labels");
    labels
}

/// Whether any applied label is one of the recognized release labels
pub fn release_requested(labels: &BTreeSet<String>, recognized: &[String]) -> bool {
    recognized.iter().any(|label| labels.contains(label))
}
