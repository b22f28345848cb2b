//! Command dispatch and handler modules.

mod add_plugin;
mod add_version;
mod merge;
mod show;

use std::fs;
use std::io::BufReader;
use std::path::Path;

use miette::Result;

use mvnmeta_core::model::Metadata;
use mvnmeta_core::xml;
use mvnmeta_util::errors::{MetadataError, MetadataResult};

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Merge {
            files,
            output,
            policy,
            strict,
            checksums,
        } => merge::exec(&files, output.as_deref(), policy.as_deref(), strict, checksums),
        Command::AddVersion { file, versions } => add_version::exec(&file, &versions),
        Command::AddPlugin {
            file,
            artifact_id,
            prefix,
            name,
        } => add_plugin::exec(&file, &artifact_id, &prefix, name.as_deref()),
        Command::Show { file, json } => show::exec(&file, json),
    }
}

fn read_file(path: &Path) -> MetadataResult<Metadata> {
    let file = fs::File::open(path).map_err(|e| MetadataError::Generic {
        message: format!("Failed to open {}: {e}", path.display()),
    })?;
    xml::read(BufReader::new(file))
}

fn write_file(path: &Path, metadata: &Metadata) -> MetadataResult<()> {
    let bytes = xml::write_to_vec(metadata)?;
    fs::write(path, bytes)?;
    Ok(())
}
