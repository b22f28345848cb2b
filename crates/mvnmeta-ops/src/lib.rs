//! Operations on `maven-metadata.xml` documents.
//!
//! [`operations`] holds the individual edits, [`builder`] applies batches of
//! them (atomically, or leniently skipping failures), and [`aggregate`]
//! merges the documents of a repository group's members.

pub mod aggregate;
pub mod builder;
pub mod operand;
pub mod operations;

pub use builder::{change_metadata, change_metadata_ignoring_failures, OperationFailure};
pub use operand::{MetadataOperand, Operand, PluginOperand, SnapshotOperand, StringOperand};
pub use operations::{
    AddPluginOperation, AddVersionOperation, MergeOperation, MetadataOperation,
    NexusMergeOperation, SetSnapshotOperation,
};
