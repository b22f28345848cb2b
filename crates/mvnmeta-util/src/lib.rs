//! Shared utilities for mvnmeta.
//!
//! This crate provides cross-cutting concerns used by the other mvnmeta
//! crates: the metadata error type, checksum digests for sidecar files,
//! and Cargo-style terminal status lines.

pub mod errors;
pub mod hash;
pub mod progress;
