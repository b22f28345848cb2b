//! Typed payloads for metadata operations.
//!
//! Every operand records the model version of the document it was taken
//! from, since some operations behave differently for legacy (1.0.0) input.

use mvnmeta_core::model::{Metadata, Plugin, Snapshot, SnapshotVersion};
use mvnmeta_core::model_version::ModelVersion;

/// A single version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringOperand {
    pub origin: ModelVersion,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOperand {
    pub origin: ModelVersion,
    pub plugin: Plugin,
}

/// Snapshot state to apply: the `lastUpdated` to stamp, an optional new
/// snapshot marker, and per-file-type snapshot versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOperand {
    pub origin: ModelVersion,
    pub timestamp: String,
    pub snapshot: Option<Snapshot>,
    pub snapshot_versions: Vec<SnapshotVersion>,
}

/// A whole source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataOperand {
    pub origin: ModelVersion,
    pub metadata: Metadata,
}

/// Any operand, for re-targeting an operation without knowing its variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    String(StringOperand),
    Plugin(PluginOperand),
    Snapshot(SnapshotOperand),
    Metadata(MetadataOperand),
}

impl StringOperand {
    pub fn new(origin: ModelVersion, value: impl Into<String>) -> Self {
        Self {
            origin,
            value: value.into(),
        }
    }
}

impl PluginOperand {
    pub fn new(origin: ModelVersion, plugin: Plugin) -> Self {
        Self { origin, plugin }
    }
}

impl SnapshotOperand {
    pub fn new(
        origin: ModelVersion,
        timestamp: impl Into<String>,
        snapshot: Option<Snapshot>,
        snapshot_versions: Vec<SnapshotVersion>,
    ) -> Self {
        Self {
            origin,
            timestamp: timestamp.into(),
            snapshot,
            snapshot_versions,
        }
    }
}

impl MetadataOperand {
    /// Wrap a document, taking its origin model version from its content.
    pub fn new(metadata: Metadata) -> Self {
        Self {
            origin: mvnmeta_core::model_version::detect(&metadata),
            metadata,
        }
    }
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "StringOperand",
            Self::Plugin(_) => "PluginOperand",
            Self::Snapshot(_) => "SnapshotOperand",
            Self::Metadata(_) => "MetadataOperand",
        }
    }
}

impl From<StringOperand> for Operand {
    fn from(o: StringOperand) -> Self {
        Self::String(o)
    }
}

impl From<PluginOperand> for Operand {
    fn from(o: PluginOperand) -> Self {
        Self::Plugin(o)
    }
}

impl From<SnapshotOperand> for Operand {
    fn from(o: SnapshotOperand) -> Self {
        Self::Snapshot(o)
    }
}

impl From<MetadataOperand> for Operand {
    fn from(o: MetadataOperand) -> Self {
        Self::Metadata(o)
    }
}
