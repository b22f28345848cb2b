use std::path::Path;

use miette::Result;

use mvnmeta_core::model::Plugin;
use mvnmeta_core::model_version;
use mvnmeta_ops::{change_metadata, AddPluginOperation, PluginOperand};
use mvnmeta_util::progress::{status, status_info};

pub fn exec(file: &Path, artifact_id: &str, prefix: &str, name: Option<&str>) -> Result<()> {
    let mut metadata = super::read_file(file)?;
    let before = metadata.clone();

    let plugin = Plugin::new(artifact_id, prefix, name);
    let op = AddPluginOperation::new(PluginOperand::new(model_version::detect(&metadata), plugin));
    change_metadata(&mut metadata, &[op.into()])?;

    // a known plugin still gets its name refreshed, so compare documents
    if metadata != before {
        super::write_file(file, &metadata)?;
        status("Updated", &format!("{} ({prefix} -> {artifact_id})", file.display()));
    } else {
        status_info("Unchanged", &format!("{prefix} is already registered"));
    }
    Ok(())
}
