//! Merging the `maven-metadata.xml` served by each member of a repository
//! group into the one document the group serves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use mvnmeta_core::model::Metadata;
use mvnmeta_core::util::is_snapshot;
use mvnmeta_core::xml;
use mvnmeta_util::errors::{MetadataError, MetadataResult};
use mvnmeta_util::hash::{self, ChecksumAlgorithm};

use crate::builder::{self, OperationFailure};
use crate::operand::MetadataOperand;
use crate::operations::{MetadataOperation, NexusMergeOperation};

/// Which versions a member repository may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryPolicy {
    Release,
    Snapshot,
    #[default]
    Mixed,
}

impl fmt::Display for RepositoryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Release => "release",
            Self::Snapshot => "snapshot",
            Self::Mixed => "mixed",
        })
    }
}

impl FromStr for RepositoryPolicy {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "release" => Ok(Self::Release),
            "snapshot" => Ok(Self::Snapshot),
            "mixed" => Ok(Self::Mixed),
            other => Err(MetadataError::Config {
                message: format!(
                    "Unknown repository policy '{other}', expected release, snapshot or mixed"
                ),
            }),
        }
    }
}

/// Drop the versions `policy` does not allow.
///
/// A release member loses its snapshot marker and `-SNAPSHOT` versions; a
/// snapshot member loses `release` and every non-snapshot version. `latest`
/// becomes the last remaining version.
pub fn apply_policy(metadata: &mut Metadata, policy: RepositoryPolicy) {
    let Some(versioning) = metadata.versioning.as_mut() else {
        return;
    };

    let keep_snapshots = match policy {
        RepositoryPolicy::Mixed => return,
        RepositoryPolicy::Release => {
            versioning.snapshot = None;
            false
        }
        RepositoryPolicy::Snapshot => {
            versioning.release = None;
            true
        }
    };

    versioning
        .versions
        .retain(|v| is_snapshot(v) == keep_snapshots);
    versioning.latest = versioning.versions.last().cloned();
}

/// One member's raw document.
#[derive(Debug, Clone)]
pub struct MemberMetadata {
    /// Used in log output only.
    pub name: String,
    pub policy: RepositoryPolicy,
    pub content: Vec<u8>,
}

impl MemberMetadata {
    pub fn new(name: impl Into<String>, policy: RepositoryPolicy, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            policy,
            content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// When off, the first member is served unchanged.
    pub merge: bool,
    /// Isolate members that fail to merge instead of failing the whole group.
    pub lenient: bool,
    pub checksums: Vec<ChecksumAlgorithm>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            merge: true,
            lenient: true,
            checksums: ChecksumAlgorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug)]
pub struct AggregatedMetadata {
    pub metadata: Metadata,
    /// Serialized document, the bytes the checksums are computed over.
    pub content: Vec<u8>,
    pub checksums: Vec<(ChecksumAlgorithm, String)>,
    /// Members whose document could not be parsed.
    pub skipped: Vec<String>,
    /// Merge failures; indices count merges, so `0` is the second parsed member.
    pub failures: Vec<OperationFailure>,
}

/// Merge the documents of all `members`, in order, into one.
///
/// The first parseable member is the base; with merging disabled it is
/// served byte for byte. Unparseable members are logged and skipped.
///
/// Fails when there are no members or none of them parse, or on the first
/// merge failure when `options.lenient` is off.
pub fn aggregate(
    members: &[MemberMetadata],
    options: &AggregateOptions,
) -> MetadataResult<AggregatedMetadata> {
    if members.is_empty() {
        return Err(MetadataError::Generic {
            message: "No metadata found in any group member".to_string(),
        });
    }

    let mut parsed = Vec::with_capacity(members.len());
    let mut skipped = Vec::new();
    for member in members {
        match xml::read_bytes(&member.content) {
            Ok(metadata) => parsed.push((member, metadata)),
            Err(e) => {
                tracing::warn!(
                    "Invalid metadata served by {}, skipped from aggregation: {e}",
                    member.name
                );
                skipped.push(member.name.clone());
            }
        }
    }

    let mut parsed = parsed.into_iter();
    let Some((base, mut result)) = parsed.next() else {
        return Err(MetadataError::Generic {
            message: format!(
                "None of the {} group members served parseable metadata",
                members.len()
            ),
        });
    };

    if !options.merge {
        tracing::debug!("Metadata merge disabled, serving {}", base.name);
        return Ok(AggregatedMetadata {
            metadata: result,
            checksums: hash::checksums(&base.content, &options.checksums),
            content: base.content.clone(),
            skipped,
            failures: Vec::new(),
        });
    }

    apply_policy(&mut result, base.policy);

    let (names, operations): (Vec<&str>, Vec<MetadataOperation>) = parsed
        .map(|(member, mut metadata)| {
            apply_policy(&mut metadata, member.policy);
            let op = NexusMergeOperation::new(MetadataOperand::new(metadata));
            (member.name.as_str(), op.into())
        })
        .unzip();

    let mut failures = Vec::new();
    if options.lenient {
        failures = builder::change_metadata_ignoring_failures(&mut result, &operations);
        for failure in &failures {
            tracing::warn!(
                "Metadata from {} not merged: {}",
                names[failure.index],
                failure.error
            );
        }
    } else {
        builder::change_metadata(&mut result, &operations)?;
    }

    tracing::debug!(
        "Aggregated {} of {} members onto {} for {}",
        1 + operations.len() - failures.len(),
        members.len(),
        base.name,
        result.coordinates()
    );

    let content = xml::write_to_vec(&result)?;
    Ok(AggregatedMetadata {
        checksums: hash::checksums(&content, &options.checksums),
        metadata: result,
        content,
        skipped,
        failures,
    })
}
