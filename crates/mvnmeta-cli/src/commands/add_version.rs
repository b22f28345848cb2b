use std::path::Path;

use miette::Result;

use mvnmeta_core::model_version;
use mvnmeta_ops::{change_metadata, AddVersionOperation, MetadataOperation, StringOperand};
use mvnmeta_util::progress::{status, status_info};

pub fn exec(file: &Path, versions: &[String]) -> Result<()> {
    let mut metadata = super::read_file(file)?;
    let origin = model_version::detect(&metadata);

    let operations: Vec<MetadataOperation> = versions
        .iter()
        .map(|v| AddVersionOperation::new(StringOperand::new(origin, v.as_str())).into())
        .collect();

    if change_metadata(&mut metadata, &operations)? {
        super::write_file(file, &metadata)?;
        status("Updated", &format!("{} ({})", file.display(), versions.join(", ")));
    } else {
        status_info("Unchanged", &format!("{} already lists every version", file.display()));
    }
    Ok(())
}
