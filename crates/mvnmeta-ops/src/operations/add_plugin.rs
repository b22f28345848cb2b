use mvnmeta_core::model::Metadata;
use mvnmeta_core::util::plugin_equals;
use mvnmeta_util::errors::MetadataResult;

use crate::operand::PluginOperand;

/// Enlists a plugin prefix mapping in group-level metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPluginOperation {
    operand: PluginOperand,
}

impl AddPluginOperation {
    pub fn new(operand: PluginOperand) -> Self {
        Self { operand }
    }

    pub fn set_operand(&mut self, operand: PluginOperand) {
        self.operand = operand;
    }

    pub fn operand(&self) -> &PluginOperand {
        &self.operand
    }

    /// Adds the plugin and keeps `plugins` ordered by `artifactId`.
    ///
    /// A plugin that is already enlisted (same `artifactId` and `prefix`)
    /// gets its `name` overwritten, yet the call still reports `false`.
    pub fn perform(&self, metadata: &mut Metadata) -> MetadataResult<bool> {
        let plugin = &self.operand.plugin;

        if let Some(existing) = metadata
            .plugins
            .iter_mut()
            .find(|p| plugin_equals(p, plugin))
        {
            existing.name = plugin.name.clone();
            return Ok(false);
        }

        metadata.plugins.push(plugin.clone());
        metadata
            .plugins
            .sort_by(|a, b| a.artifact_id.cmp(&b.artifact_id));
        Ok(true)
    }
}
