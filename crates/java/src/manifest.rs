use std::path::Path;

use versionbump_core::{BumpError, ManifestStrategy, ProjectKind, Result};

use crate::version_updater::{find_version_in_pom, update_version_in_pom};

/// `pom.xml` handling for Quarkus projects
#[derive(Debug, Default)]
pub struct MavenManifest;

impl MavenManifest {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ManifestStrategy for MavenManifest {
    fn kind(&self) -> ProjectKind {
        ProjectKind::Quarkus
    }

    fn extract_version(&self, path: &Path, content: &str) -> Result<Option<String>> {
        find_version_in_pom(content)
            .map(|version| Some(version.to_string()))
            .ok_or_else(|| BumpError::VersionNotFound {
                path: path.to_path_buf(),
            })
    }

    fn write_version(&self, path: &Path, content: &str, new_version: &str) -> Result<String> {
        update_version_in_pom(content, new_version).ok_or_else(|| BumpError::VersionNotFound {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_maven_manifest_kind() {
        let manifest = MavenManifest::new();
        assert_eq!(manifest.kind(), ProjectKind::Quarkus);
        assert_eq!(manifest.manifest_file(), "pom.xml");
        assert_eq!(
            manifest.locate_manifest(Path::new("backend")),
            PathBuf::from("backend/pom.xml")
        );
    }

    #[test]
    fn test_maven_manifest_extract_version() {
        let manifest = MavenManifest::default();
        let version = manifest
            .extract_version(Path::new("pom.xml"), "<project><version>1.2.3</version></project>")
            .unwrap();
        assert_eq!(version, Some("1.2.3".to_string()));
    }

    #[test]
    fn test_maven_manifest_extract_version_missing() {
        let manifest = MavenManifest::new();
        let err = manifest
            .extract_version(Path::new("app/pom.xml"), "<project></project>")
            .unwrap_err();
        match err {
            BumpError::VersionNotFound { path } => assert_eq!(path, PathBuf::from("app/pom.xml")),
            other => panic!("Expected VersionNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_maven_manifest_write_version() {
        let manifest = MavenManifest::new();
        let content = "<project>\n  <version>1.2.3</version>\n</project>\n";
        let updated = manifest
            .write_version(Path::new("pom.xml"), content, "1.3.0")
            .unwrap();
        assert_eq!(updated, "<project>\n  <version>1.3.0</version>\n</project>\n");
    }

    #[test]
    fn test_maven_manifest_write_version_missing() {
        let manifest = MavenManifest::new();
        let err = manifest
            .write_version(Path::new("pom.xml"), "<project/>", "1.3.0")
            .unwrap_err();
        assert!(matches!(err, BumpError::VersionNotFound { .. }));
    }
}
