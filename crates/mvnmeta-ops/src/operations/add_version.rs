use std::cmp::Ordering;

use mvnmeta_core::model::Metadata;
use mvnmeta_core::time;
use mvnmeta_core::util::is_snapshot;
use mvnmeta_core::version::MavenVersion;
use mvnmeta_util::errors::{MetadataError, MetadataResult};

use crate::operand::StringOperand;

/// Adds a version to `versioning.versions`, keeping the list in Maven
/// version order and recomputing `latest` and `release`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddVersionOperation {
    operand: StringOperand,
}

impl AddVersionOperation {
    pub fn new(operand: StringOperand) -> Self {
        Self { operand }
    }

    pub fn set_operand(&mut self, operand: StringOperand) {
        self.operand = operand;
    }

    pub fn operand(&self) -> &StringOperand {
        &self.operand
    }

    /// Returns `false` when the version is already listed.
    pub fn perform(&self, metadata: &mut Metadata) -> MetadataResult<bool> {
        let version = self.operand.value.as_str();
        if version.trim().is_empty() {
            return Err(MetadataError::InvalidVersion {
                message: format!(
                    "blank version cannot be added to {}",
                    metadata.coordinates()
                ),
            });
        }

        let versioning = metadata.versioning_mut();
        if versioning.versions.iter().any(|v| v == version) {
            return Ok(false);
        }

        insert_sorted(&mut versioning.versions, version);
        versioning.latest = versioning.versions.last().cloned();
        versioning.release = Some(release_version(&versioning.versions));
        versioning.last_updated = Some(time::utc_timestamp());
        Ok(true)
    }
}

/// Insert `version` at its ordered position.
///
/// A list that is not in order yet (e.g. as read from a remote document) is
/// sorted once first; after that every insert is a binary search plus a
/// shift. Equal-ranking versions (`1.0` and `1.0.0`) keep insertion order.
///
/// Each existing entry is parsed once per call; the order check, the sort
/// and the search all work on those keys.
fn insert_sorted(versions: &mut Vec<String>, version: &str) {
    let mut keys: Vec<MavenVersion> = versions.iter().map(|v| MavenVersion::parse(v)).collect();
    if !keys.windows(2).all(|w| w[0] <= w[1]) {
        keys.sort();
        *versions = keys.iter().map(|k| k.original.clone()).collect();
    }

    let new = MavenVersion::parse(version);
    let index = keys.partition_point(|key| key.cmp(&new) != Ordering::Greater);
    versions.insert(index, version.to_string());
}

/// Highest non-snapshot version, or the empty string when there is none.
fn release_version(versions: &[String]) -> String {
    versions
        .iter()
        .rev()
        .find(|v| !is_snapshot(v))
        .cloned()
        .unwrap_or_default()
}
