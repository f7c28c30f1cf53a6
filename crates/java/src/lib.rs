//! # versionbump-java
//!
//! Maven project support for versionbump.
//!
//! Reads and rewrites the first `<version>` element of a `pom.xml` with a single targeted
//! substitution, so everything else in the file stays byte-for-byte identical.

pub mod manifest;
pub mod version_updater;

pub use manifest::MavenManifest;
pub use version_updater::{find_version_in_pom, update_version_in_pom};
