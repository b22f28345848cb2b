//! CLI argument definitions for mvnmeta.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mvnmeta",
    version,
    about = "Inspect, edit and merge maven-metadata.xml files",
    long_about = "mvnmeta edits Maven repository metadata the way a repository manager does: \
                  versions stay in Maven order, snapshot state follows the newest build, \
                  and the metadata of several repositories can be merged into one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge the metadata of several repositories, first file first
    Merge {
        /// maven-metadata.xml files, in group order
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Repository policy of the inputs: release, snapshot or mixed
        #[arg(long)]
        policy: Option<String>,
        /// Fail on the first file that cannot be merged
        #[arg(long)]
        strict: bool,
        /// Write checksum files next to the output
        #[arg(long)]
        checksums: bool,
    },

    /// Add versions to a metadata file
    AddVersion {
        /// maven-metadata.xml file, rewritten in place
        file: PathBuf,
        /// Versions to add
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Register a plugin prefix in group metadata
    AddPlugin {
        /// maven-metadata.xml file, rewritten in place
        file: PathBuf,
        /// Plugin artifactId
        #[arg(long)]
        artifact_id: String,
        /// Plugin prefix (e.g. `surefire`)
        #[arg(long)]
        prefix: String,
        /// Human readable plugin name
        #[arg(long)]
        name: Option<String>,
    },

    /// Print a summary of a metadata file
    Show {
        file: PathBuf,
        /// Print the whole document as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse CLI arguments from `std::env::args`.
pub fn parse() -> Cli {
    Cli::parse()
}
