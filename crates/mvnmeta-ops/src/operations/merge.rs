use mvnmeta_core::model::Metadata;
use mvnmeta_util::errors::MetadataResult;

use crate::operand::MetadataOperand;

/// Plain document merge: the versioning block with the later (or equal)
/// `lastUpdated` string wins.
///
/// `lastUpdated` values are compared as strings, which matches numeric
/// order only while both sides use the fixed-width `yyyyMMddHHmmss` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOperation {
    operand: MetadataOperand,
}

impl MergeOperation {
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
        let mut changed = false;

        // plugins are matched by prefix alone here
        for plugin in &source.plugins {
            let found = metadata.plugins.iter().any(|p| p.prefix == plugin.prefix);
            if !found {
                metadata.plugins.push(plugin.clone());
                changed = true;
            }
        }

        let Some(ref incoming) = source.versioning else {
            return Ok(changed);
        };

        if metadata.versioning.is_none() {
            changed = true;
        }
        let versioning = metadata.versioning_mut();

        for version in &incoming.versions {
            if !versioning.versions.contains(version) {
                versioning.versions.push(version.clone());
                changed = true;
            }
        }

        let target_updated = present(&versioning.last_updated);
        // a source without lastUpdated is assumed to be as old as the target
        let source_updated = present(&incoming.last_updated).or(target_updated.clone());

        let source_wins = match (&target_updated, &source_updated) {
            (None, _) => true,
            (Some(t), Some(s)) => s >= t,
            (Some(_), None) => false,
        };

        if source_wins {
            changed = true;
            versioning.last_updated = source_updated;
            if incoming.release.is_some() {
                versioning.release = incoming.release.clone();
            }
            if incoming.latest.is_some() {
                versioning.latest = incoming.latest.clone();
            }
            if incoming.snapshot.is_some() {
                versioning.snapshot = incoming.snapshot.clone();
            }
        }

        Ok(changed)
    }
}

/// `lastUpdated` treating empty values and the literal `"null"` as missing.
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != "null")
        .map(str::to_string)
}
