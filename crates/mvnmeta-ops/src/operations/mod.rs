//! The metadata operations.
//!
//! Each operation is a small struct holding its typed operand; the
//! [`MetadataOperation`] enum is the closed set the batch builder works on.

mod add_plugin;
mod add_version;
mod merge;
mod nexus_merge;
mod set_snapshot;

pub use add_plugin::AddPluginOperation;
pub use add_version::AddVersionOperation;
pub use merge::MergeOperation;
pub use nexus_merge::NexusMergeOperation;
pub use set_snapshot::SetSnapshotOperation;

use mvnmeta_core::model::Metadata;
use mvnmeta_util::errors::{MetadataError, MetadataResult};

use crate::operand::Operand;

/// A single edit of a metadata document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataOperation {
    AddVersion(AddVersionOperation),
    AddPlugin(AddPluginOperation),
    SetSnapshot(SetSnapshotOperation),
    Merge(MergeOperation),
    NexusMerge(NexusMergeOperation),
}

impl MetadataOperation {
    /// Apply to `metadata`, returning whether anything changed.
    ///
    /// On error `metadata` may be partially modified; go through
    /// [`crate::builder::change_metadata`] for all-or-nothing application.
    pub fn perform(&self, metadata: &mut Metadata) -> MetadataResult<bool> {
        match self {
            Self::AddVersion(op) => op.perform(metadata),
            Self::AddPlugin(op) => op.perform(metadata),
            Self::SetSnapshot(op) => op.perform(metadata),
            Self::Merge(op) => op.perform(metadata),
            Self::NexusMerge(op) => op.perform(metadata),
        }
    }

    /// Replace the operand. Fails with [`MetadataError::OperandMismatch`]
    /// if `operand` is not the kind this operation takes.
    pub fn set_operand(&mut self, operand: Operand) -> MetadataResult<()> {
        match (self, operand) {
            (Self::AddVersion(op), Operand::String(o)) => op.set_operand(o),
            (Self::AddPlugin(op), Operand::Plugin(o)) => op.set_operand(o),
            (Self::SetSnapshot(op), Operand::Snapshot(o)) => op.set_operand(o),
            (Self::Merge(op), Operand::Metadata(o)) => op.set_operand(o),
            (Self::NexusMerge(op), Operand::Metadata(o)) => op.set_operand(o),
            (this, other) => {
                return Err(MetadataError::OperandMismatch {
                    expected: this.operand_kind(),
                    actual: other.kind(),
                })
            }
        }
        Ok(())
    }

    pub fn operand(&self) -> Operand {
        match self {
            Self::AddVersion(op) => op.operand().clone().into(),
            Self::AddPlugin(op) => op.operand().clone().into(),
            Self::SetSnapshot(op) => op.operand().clone().into(),
            Self::Merge(op) => op.operand().clone().into(),
            Self::NexusMerge(op) => op.operand().clone().into(),
        }
    }

    /// The operand kind accepted by [`Self::set_operand`].
    pub fn operand_kind(&self) -> &'static str {
        match self {
            Self::AddVersion(_) => "StringOperand",
            Self::AddPlugin(_) => "PluginOperand",
            Self::SetSnapshot(_) => "SnapshotOperand",
            Self::Merge(_) | Self::NexusMerge(_) => "MetadataOperand",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddVersion(_) => "add-version",
            Self::AddPlugin(_) => "add-plugin",
            Self::SetSnapshot(_) => "set-snapshot",
            Self::Merge(_) => "merge",
            Self::NexusMerge(_) => "nexus-merge",
        }
    }
}

impl From<AddVersionOperation> for MetadataOperation {
    fn from(op: AddVersionOperation) -> Self {
        Self::AddVersion(op)
    }
}

impl From<AddPluginOperation> for MetadataOperation {
    fn from(op: AddPluginOperation) -> Self {
        Self::AddPlugin(op)
    }
}

impl From<SetSnapshotOperation> for MetadataOperation {
    fn from(op: SetSnapshotOperation) -> Self {
        Self::SetSnapshot(op)
    }
}

impl From<MergeOperation> for MetadataOperation {
    fn from(op: MergeOperation) -> Self {
        Self::Merge(op)
    }
}

impl From<NexusMergeOperation> for MetadataOperation {
    fn from(op: NexusMergeOperation) -> Self {
        Self::NexusMerge(op)
    }
}
