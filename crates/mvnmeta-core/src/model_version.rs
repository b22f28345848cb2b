//! Detection of the metadata schema version (1.0.0 vs 1.1.0).
//!
//! Model 1.1.0 adds `snapshotVersions`. A document is 1.1.0 when it says so
//! in its `modelVersion` attribute or when it already carries snapshot
//! versions; anything else is the legacy 1.0.0 schema.

use std::fmt;

use crate::model::Metadata;

/// Attribute value of the extended schema.
pub const MODEL_VERSION_110: &str = "1.1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelVersion {
    V100,
    V110,
}

impl ModelVersion {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V100 => "1.0.0",
            Self::V110 => MODEL_VERSION_110,
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema version a document conforms to.
pub fn detect(metadata: &Metadata) -> ModelVersion {
    if metadata.model_version.as_deref() == Some(MODEL_VERSION_110) {
        return ModelVersion::V110;
    }
    let has_snapshot_versions = metadata
        .versioning
        .as_ref()
        .is_some_and(|v| !v.snapshot_versions.is_empty());
    if has_snapshot_versions {
        ModelVersion::V110
    } else {
        ModelVersion::V100
    }
}

/// Stamp a document with a schema version. `V100` removes the attribute.
pub fn set(metadata: &mut Metadata, version: ModelVersion) {
    metadata.model_version = match version {
        ModelVersion::V100 => None,
        ModelVersion::V110 => Some(MODEL_VERSION_110.to_string()),
    };
}
