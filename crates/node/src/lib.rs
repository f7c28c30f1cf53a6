//! # versionbump-node
//!
//! Node.js project support for versionbump.
//!
//! Reads and rewrites the top-level `version` field of a `package.json`. Key order is kept and
//! the document is written back with 2-space indentation and a trailing newline.

pub mod manifest;
pub mod package_json;

pub use manifest::NpmManifest;
pub use package_json::{parse_package_json, read_version, render_package_json};
