use std::cmp::Ordering;

use mvnmeta_core::model::{Metadata, SnapshotVersion};
use mvnmeta_core::model_version::{self, ModelVersion};
use mvnmeta_core::util::find_equivalent;
use mvnmeta_core::version::compare_versions;
use mvnmeta_util::errors::MetadataResult;

use crate::operand::SnapshotOperand;

/// Sets the snapshot marker and merges per-file-type snapshot versions
/// into version-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSnapshotOperation {
    operand: SnapshotOperand,
}

impl SetSnapshotOperation {
    pub fn new(operand: SnapshotOperand) -> Self {
        Self { operand }
    }

    pub fn set_operand(&mut self, operand: SnapshotOperand) {
        self.operand = operand;
    }

    pub fn operand(&self) -> &SnapshotOperand {
        &self.operand
    }

    /// Always reports a change: `lastUpdated` is stamped unconditionally.
    pub fn perform(&self, metadata: &mut Metadata) -> MetadataResult<bool> {
        let op = &self.operand;
        let versioning = metadata.versioning_mut();

        if let Some(ref snapshot) = op.snapshot {
            versioning.snapshot = Some(snapshot.clone());
        }

        if !op.snapshot_versions.is_empty() {
            for incoming in &op.snapshot_versions {
                match find_equivalent(incoming, &versioning.snapshot_versions) {
                    None => versioning.snapshot_versions.push(incoming.clone()),
                    Some(i) => {
                        if is_newer(incoming, &versioning.snapshot_versions[i]) {
                            versioning.snapshot_versions[i] = incoming.clone();
                        }
                    }
                }
            }
        } else if op.origin == ModelVersion::V100 && op.snapshot.is_some() {
            // legacy input carries no per-type entries; refresh the ones we have
            for sv in &mut versioning.snapshot_versions {
                sv.updated = Some(op.timestamp.clone());
            }
        }

        versioning.last_updated = Some(op.timestamp.clone());

        let has_snapshot_versions = !versioning.snapshot_versions.is_empty();
        if has_snapshot_versions {
            model_version::set(metadata, ModelVersion::V110);
        }
        Ok(true)
    }
}

fn is_newer(incoming: &SnapshotVersion, existing: &SnapshotVersion) -> bool {
    let a = incoming.version.as_deref().unwrap_or("");
    let b = existing.version.as_deref().unwrap_or("");
    compare_versions(a, b) == Ordering::Greater
}
