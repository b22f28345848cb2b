//! Checksum digests for merged metadata sidecar files.

use std::fmt;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Digest algorithms a repository publishes next to `maven-metadata.xml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl ChecksumAlgorithm {
    /// All algorithms, in the order sidecars are written.
    pub const ALL: [ChecksumAlgorithm; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Sidecar file extension, e.g. `sha1` for `maven-metadata.xml.sha1`.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
        };
        f.write_str(name)
    }
}

/// Compute the digest of `data`, returning a lowercase hex string.
pub fn digest_hex(algorithm: ChecksumAlgorithm, data: &[u8]) -> String {
    match algorithm {
        ChecksumAlgorithm::Md5 => hex_digest::<Md5>(data),
        ChecksumAlgorithm::Sha1 => hex_digest::<Sha1>(data),
        ChecksumAlgorithm::Sha256 => hex_digest::<Sha256>(data),
        ChecksumAlgorithm::Sha512 => hex_digest::<Sha512>(data),
    }
}

/// Compute one digest per requested algorithm.
pub fn checksums(data: &[u8], algorithms: &[ChecksumAlgorithm]) -> Vec<(ChecksumAlgorithm, String)> {
    algorithms
        .iter()
        .map(|&algo| (algo, digest_hex(algo, data)))
        .collect()
}

fn hex_digest<D: Digest>(data: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(data);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
