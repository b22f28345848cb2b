use mvnmeta_core::model::{Metadata, Versioning};
use mvnmeta_core::model_version::{self, ModelVersion};
use mvnmeta_core::time;
use mvnmeta_util::errors::{MetadataError, MetadataResult};

use super::{AddPluginOperation, AddVersionOperation, MetadataOperation, SetSnapshotOperation};
use crate::builder;
use crate::operand::{MetadataOperand, PluginOperand, SnapshotOperand, StringOperand};

/// Group merge: folds a member repository's document into the target.
///
/// Coordinates must agree (an empty target field is taken from the source).
/// Plugins, versions and snapshot state are then applied as a strict batch
/// of [`AddPluginOperation`], [`AddVersionOperation`] and
/// [`SetSnapshotOperation`], and `lastUpdated` is settled to the most recent
/// of the two inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NexusMergeOperation {
    operand: MetadataOperand,
}

impl NexusMergeOperation {
    pub fn new(operand: MetadataOperand) -> Self {
        Self { operand }
    }

    pub fn set_operand(&mut self, operand: MetadataOperand) {
        self.operand = operand;
    }

    pub fn operand(&self) -> &MetadataOperand {
        &self.operand
    }

    pub fn perform(&self, metadata: &mut Metadata) -> MetadataResult<bool> {
        let source = &self.operand.metadata;
        let origin = self.operand.origin;

        validate_coordinates(metadata, source)?;
        fill_coordinates(metadata, source);

        let target_updated = last_updated(metadata.versioning.as_ref());
        let source_updated = last_updated(source.versioning.as_ref());

        let operations = build_operations(metadata, source, origin);
        let changed = builder::change_metadata(metadata, &operations)?;

        if let Some(latest) = most_recent(target_updated, source_updated) {
            metadata.versioning_mut().last_updated = Some(latest);
        }

        if origin == ModelVersion::V110 {
            model_version::set(metadata, ModelVersion::V110);
        }

        tracing::trace!(
            "Merged {} operations into {}",
            operations.len(),
            metadata.coordinates()
        );
        Ok(changed)
    }
}

fn validate_coordinates(target: &Metadata, source: &Metadata) -> MetadataResult<()> {
    let pairs = [
        ("groupId", &target.group_id, &source.group_id),
        ("artifactId", &target.artifact_id, &source.artifact_id),
        ("version", &target.version, &source.version),
    ];
    for (field, ours, theirs) in pairs {
        if let (Some(ours), Some(theirs)) = (non_empty(ours), non_empty(theirs)) {
            if ours != theirs {
                return Err(MetadataError::Incompatible {
                    message: format!("{field} mismatch: {ours} != {theirs}"),
                });
            }
        }
    }
    Ok(())
}

fn fill_coordinates(target: &mut Metadata, source: &Metadata) {
    for (ours, theirs) in [
        (&mut target.group_id, &source.group_id),
        (&mut target.artifact_id, &source.artifact_id),
        (&mut target.version, &source.version),
    ] {
        if non_empty(ours).is_none() && non_empty(theirs).is_some() {
            ours.clone_from(theirs);
        }
    }
}

fn build_operations(
    target: &Metadata,
    source: &Metadata,
    origin: ModelVersion,
) -> Vec<MetadataOperation> {
    let mut operations: Vec<MetadataOperation> = source
        .plugins
        .iter()
        .map(|plugin| AddPluginOperation::new(PluginOperand::new(origin, plugin.clone())).into())
        .collect();

    let Some(ref incoming) = source.versioning else {
        return operations;
    };

    operations.extend(incoming.versions.iter().map(|version| {
        MetadataOperation::from(AddVersionOperation::new(StringOperand::new(origin, version)))
    }));

    if incoming.snapshot.is_some() || !incoming.snapshot_versions.is_empty() {
        let snapshot = if source_snapshot_is_newer(target.versioning.as_ref(), incoming) {
            incoming.snapshot.clone()
        } else {
            None
        };
        let timestamp = last_updated(Some(incoming))
            .or_else(|| snapshot_timestamp(incoming))
            .unwrap_or_else(time::utc_timestamp);
        operations.push(
            SetSnapshotOperation::new(SnapshotOperand::new(
                origin,
                timestamp,
                snapshot,
                incoming.snapshot_versions.clone(),
            ))
            .into(),
        );
    }

    operations
}

/// The source snapshot replaces ours when we have none or its timestamp is
/// strictly later. Timestamps compare numerically with the dot removed.
fn source_snapshot_is_newer(target: Option<&Versioning>, source: &Versioning) -> bool {
    let ours = target
        .and_then(|v| v.snapshot.as_ref())
        .and_then(|s| s.timestamp.as_deref())
        .and_then(time::timestamp_value);
    let theirs = source
        .snapshot
        .as_ref()
        .and_then(|s| s.timestamp.as_deref())
        .and_then(time::timestamp_value);

    match (ours, theirs) {
        (None, _) => true,
        (Some(ours), Some(theirs)) => theirs > ours,
        (Some(_), None) => false,
    }
}

/// `yyyyMMdd.HHmmss` snapshot timestamp reduced to `yyyyMMddHHmmss`.
fn snapshot_timestamp(versioning: &Versioning) -> Option<String> {
    versioning
        .snapshot
        .as_ref()
        .and_then(|s| s.timestamp.as_deref())
        .map(|ts| ts.replace('.', ""))
        .filter(|ts| !ts.is_empty())
}

fn last_updated(versioning: Option<&Versioning>) -> Option<String> {
    versioning
        .and_then(|v| v.last_updated.as_deref())
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Later of two `lastUpdated` values. Numeric when both parse, textual
/// otherwise.
fn most_recent(a: Option<String>, b: Option<String>) -> Option<String> {
    match (a, b) {
        (Some(a), Some(b)) => {
            let b_later = match (time::timestamp_value(&a), time::timestamp_value(&b)) {
                (Some(x), Some(y)) => y > x,
                _ => b > a,
            };
            Some(if b_later { b } else { a })
        }
        (a, b) => a.or(b),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
