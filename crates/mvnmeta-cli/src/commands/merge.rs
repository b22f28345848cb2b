use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use miette::Result;

use mvnmeta_core::config::GlobalConfig;
use mvnmeta_ops::aggregate::{aggregate, AggregateOptions, MemberMetadata, RepositoryPolicy};
use mvnmeta_util::errors::MetadataError;
use mvnmeta_util::hash::ChecksumAlgorithm;
use mvnmeta_util::progress::{status, status_warn};

pub fn exec(
    files: &[PathBuf],
    output: Option<&Path>,
    policy: Option<&str>,
    strict: bool,
    checksums: bool,
) -> Result<()> {
    let config = GlobalConfig::load()?;
    let policy: RepositoryPolicy = policy.unwrap_or(&config.merge.policy).parse()?;

    let members = files
        .iter()
        .map(|path| {
            let content = fs::read(path).map_err(|e| MetadataError::Generic {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            Ok(MemberMetadata::new(path.display().to_string(), policy, content))
        })
        .collect::<Result<Vec<_>, MetadataError>>()?;

    let options = AggregateOptions {
        merge: config.merge.enabled,
        lenient: config.merge.lenient && !strict,
        checksums: config.checksums.algorithms.clone(),
    };
    tracing::debug!(
        "Merging {} files (policy {policy}, merge {}, lenient {})",
        members.len(),
        options.merge,
        options.lenient
    );
    let result = aggregate(&members, &options)?;

    for name in &result.skipped {
        status_warn("Skipped", &format!("{name} is not valid maven-metadata.xml"));
    }
    for failure in &result.failures {
        status_warn("Ignored", &failure.error.to_string());
    }

    let Some(out) = output else {
        if checksums {
            status_warn("Warning", "--checksums needs --output, no checksum files written");
        }
        std::io::stdout()
            .write_all(&result.content)
            .map_err(MetadataError::Io)?;
        return Ok(());
    };

    fs::write(out, &result.content).map_err(MetadataError::Io)?;
    status(
        "Merged",
        &format!(
            "{} of {} files into {}",
            served_count(files.len(), &options, result.skipped.len(), result.failures.len()),
            files.len(),
            out.display()
        ),
    );

    if checksums || config.checksums.write {
        for (algorithm, digest) in &result.checksums {
            fs::write(sidecar_path(out, *algorithm), digest).map_err(MetadataError::Io)?;
        }
    }
    Ok(())
}

/// Number of input files that made it into the output. With merging off only
/// the first parseable file is served.
fn served_count(files: usize, options: &AggregateOptions, skipped: usize, failed: usize) -> usize {
    if options.merge {
        files - skipped - failed
    } else {
        1
    }
}

/// `maven-metadata.xml` -> `maven-metadata.xml.sha1`
fn sidecar_path(path: &Path, algorithm: ChecksumAlgorithm) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(algorithm.extension());
    PathBuf::from(name)
}
