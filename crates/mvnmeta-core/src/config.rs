use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use mvnmeta_util::errors::MetadataError;
use mvnmeta_util::hash::ChecksumAlgorithm;

/// Global user configuration loaded from `~/.mvnmeta/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub merge: MergeConfig,

    #[serde(default)]
    pub checksums: ChecksumConfig,
}

/// Group merge settings from `[merge]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Merge member documents; when off the first parseable member wins.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Skip members that fail to merge instead of failing the whole merge.
    #[serde(default = "default_true")]
    pub lenient: bool,
    /// Repository policy applied to members: `release`, `snapshot` or `mixed`.
    #[serde(default = "default_policy")]
    pub policy: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lenient: true,
            policy: default_policy(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_policy() -> String {
    "mixed".to_string()
}

/// Checksum sidecar settings from `[checksums]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecksumConfig {
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<ChecksumAlgorithm>,
    /// Write sidecar files next to merged output by default.
    #[serde(default)]
    pub write: bool,
}

impl Default for ChecksumConfig {
    fn default() -> Self {
        Self {
            algorithms: default_algorithms(),
            write: false,
        }
    }
}

fn default_algorithms() -> Vec<ChecksumAlgorithm> {
    ChecksumAlgorithm::ALL.to_vec()
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or return defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> miette::Result<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| MetadataError::Config {
                message: format!("Failed to read {}: {e}", path.display()),
            })?;
            toml::from_str(&content).map_err(|e| {
                MetadataError::Config {
                    message: format!("Failed to parse {}: {e}", path.display()),
                }
                .into()
            })
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the mvnmeta data directory: `$MVNMETA_HOME`, else `~/.mvnmeta/`.
pub fn dirs_path() -> PathBuf {
    if let Ok(custom) = std::env::var("MVNMETA_HOME") {
        return PathBuf::from(custom);
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".mvnmeta")
}
