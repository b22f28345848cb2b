//! Small predicates shared by the metadata operations.

use crate::model::{Plugin, SnapshotVersion};

/// Plugins are the same entry when both `artifactId` and `prefix` match.
pub fn plugin_equals(a: &Plugin, b: &Plugin) -> bool {
    a.artifact_id == b.artifact_id && a.prefix == b.prefix
}

/// Index of the entry in `list` describing the same file type as `sv`:
/// equal extension and equal classifier, where a missing classifier and an
/// empty one are the same.
pub fn find_equivalent(sv: &SnapshotVersion, list: &[SnapshotVersion]) -> Option<usize> {
    list.iter().position(|candidate| {
        non_empty(&candidate.extension) == non_empty(&sv.extension)
            && non_empty(&candidate.classifier) == non_empty(&sv.classifier)
    })
}

/// Whether a version string names a snapshot (`...SNAPSHOT`).
pub fn is_snapshot(version: &str) -> bool {
    version.ends_with("SNAPSHOT")
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
