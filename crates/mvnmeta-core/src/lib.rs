//! Core data types for mvnmeta.
//!
//! This crate defines the in-memory model of a `maven-metadata.xml`
//! document and everything needed to handle it outside of the merge
//! operations themselves: XML reading and writing, Maven version ordering,
//! schema (model) version detection, UTC timestamps, small model predicates,
//! and user configuration.
//!
//! This crate is intentionally free of network I/O.

pub mod config;
pub mod model;
pub mod model_version;
pub mod time;
pub mod util;
pub mod version;
pub mod xml;
