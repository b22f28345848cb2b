//! Applying batches of operations to a document.
//!
//! Reading and writing live in `mvnmeta_core::xml` and are re-exported here
//! so a caller can read, change and write through one module.

use mvnmeta_core::model::Metadata;
use mvnmeta_util::errors::{MetadataError, MetadataResult};

pub use mvnmeta_core::xml::{read, read_bytes, read_str, write, write_to_vec};

use crate::operations::MetadataOperation;

/// An operation that failed during a lenient batch.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("operation #{index} ({operation}) failed: {error}")]
pub struct OperationFailure {
    /// Position of the operation in the batch.
    pub index: usize,
    pub operation: &'static str,
    #[source]
    pub error: MetadataError,
}

/// Apply `operations` in order, all or nothing.
///
/// The operations run against a copy; `metadata` is only replaced once every
/// one of them succeeded. Returns whether any operation reported a change.
pub fn change_metadata(
    metadata: &mut Metadata,
    operations: &[MetadataOperation],
) -> MetadataResult<bool> {
    if operations.is_empty() {
        return Ok(false);
    }

    let mut scratch = metadata.clone();
    let mut changed = false;
    for op in operations {
        changed |= op.perform(&mut scratch)?;
    }

    *metadata = scratch;
    Ok(changed)
}

/// Apply `operations` in order, discarding the effects of any that fail.
///
/// Each operation runs against a copy of the last good state, so a failure
/// leaves no partial edits behind while later operations still apply.
/// The failures are returned in batch order.
pub fn change_metadata_ignoring_failures(
    metadata: &mut Metadata,
    operations: &[MetadataOperation],
) -> Vec<OperationFailure> {
    let mut failures = Vec::new();
    if operations.is_empty() {
        return failures;
    }

    let mut savepoint = metadata.clone();
    for (index, op) in operations.iter().enumerate() {
        let mut attempt = savepoint.clone();
        match op.perform(&mut attempt) {
            Ok(_) => savepoint = attempt,
            Err(error) => {
                tracing::debug!("Skipping {} #{index}: {error}", op.name());
                failures.push(OperationFailure {
                    index,
                    operation: op.name(),
                    error,
                });
            }
        }
    }

    *metadata = savepoint;
    failures
}
