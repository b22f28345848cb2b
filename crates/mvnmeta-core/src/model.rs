//! In-memory model of a `maven-metadata.xml` document.
//!
//! One type serves all three shapes a repository publishes: group-level
//! (plugin prefixes), artifact-level (version list) and version-level
//! (snapshot resolution). The model does not enforce which shape a document
//! has; callers know what they are producing.

use serde::{Deserialize, Serialize};

/// Root of a metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
}

/// The `<versioning>` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versioning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapshot_versions: Vec<SnapshotVersion>,
}

/// Timestamped marker for the most recent build of a SNAPSHOT version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub build_number: i32,
    #[serde(default)]
    pub local_copy: bool,
}

/// Resolved snapshot version for one file type (extension + classifier).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Written as `<value>` in XML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

/// Plugin prefix mapping in group-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
}

impl Metadata {
    /// The versioning block, created empty if the document has none.
    pub fn versioning_mut(&mut self) -> &mut Versioning {
        self.versioning.get_or_insert_with(Versioning::default)
    }

    /// `groupId:artifactId:version` for log messages, with `?` for gaps.
    pub fn coordinates(&self) -> String {
        format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or("?"),
            self.artifact_id.as_deref().unwrap_or("?"),
            self.version.as_deref().unwrap_or("?"),
        )
    }
}

impl Plugin {
    pub fn new(artifact_id: &str, prefix: &str, name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            prefix: Some(prefix.to_string()),
            artifact_id: Some(artifact_id.to_string()),
        }
    }
}

impl SnapshotVersion {
    pub fn new(extension: &str, classifier: Option<&str>, version: &str, updated: Option<&str>) -> Self {
        Self {
            classifier: classifier.map(str::to_string),
            extension: Some(extension.to_string()),
            version: Some(version.to_string()),
            updated: updated.map(str::to_string),
        }
    }
}
