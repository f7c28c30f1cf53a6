use std::path::Path;

use serde_json::Value;
use versionbump_core::{BumpError, ManifestStrategy, ProjectKind, Result};

use crate::package_json::{parse_package_json, read_version, render_package_json};

/// `package.json` handling for Angular projects
#[derive(Debug, Default)]
pub struct NpmManifest;

impl NpmManifest {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn parse_error(path: &Path, source: serde_json::Error) -> BumpError {
    BumpError::ParseError {
        path: path.to_path_buf(),
        source,
    }
}

fn render_error(path: &Path, source: serde_json::Error) -> BumpError {
    BumpError::RenderError {
        path: path.to_path_buf(),
        source,
    }
}

impl ManifestStrategy for NpmManifest {
    fn kind(&self) -> ProjectKind {
        ProjectKind::Angular
    }

    fn extract_version(&self, path: &Path, content: &str) -> Result<Option<String>> {
        let package_json = parse_package_json(content).map_err(|e| parse_error(path, e))?;
        Ok(read_version(&package_json).map(String::from))
    }

    fn write_version(&self, path: &Path, content: &str, new_version: &str) -> Result<String> {
        let mut package_json = parse_package_json(content).map_err(|e| parse_error(path, e))?;
        // insert keeps the existing position of the key
        package_json.insert(
            "version".to_string(),
            Value::String(new_version.to_string()),
        );
        render_package_json(&package_json).map_err(|e| render_error(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_npm_manifest_kind() {
        let manifest = NpmManifest::new();
        assert_eq!(manifest.kind(), ProjectKind::Angular);
        assert_eq!(manifest.manifest_file(), "package.json");
        assert_eq!(
            manifest.locate_manifest(Path::new("frontend")),
            PathBuf::from("frontend/package.json")
        );
    }

    #[test]
    fn test_npm_manifest_extract_version() {
        let manifest = NpmManifest::default();
        let version = manifest
            .extract_version(
                Path::new("package.json"),
                r#"{"name":"app","version":"0.1.0"}"#,
            )
            .unwrap();
        assert_eq!(version, Some("0.1.0".to_string()));
    }

    #[test]
    fn test_npm_manifest_extract_version_missing() {
        let manifest = NpmManifest::new();
        let version = manifest
            .extract_version(Path::new("package.json"), r#"{"name":"app"}"#)
            .unwrap();
        assert_eq!(version, None);
    }

    #[test]
    fn test_npm_manifest_extract_version_malformed() {
        let manifest = NpmManifest::new();
        let err = manifest
            .extract_version(Path::new("web/package.json"), "{ \"name\": ")
            .unwrap_err();
        match err {
            BumpError::ParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("web/package.json"))
            }
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_render_error_is_not_a_parse_error() {
        let source = serde_json::from_str::<Value>("{").unwrap_err();
        let err = render_error(Path::new("web/package.json"), source);
        match err {
            BumpError::RenderError { path, .. } => {
                assert_eq!(path, PathBuf::from("web/package.json"))
            }
            other => panic!("Expected RenderError, got {other:?}"),
        }
    }

    #[test]
    fn test_npm_manifest_write_version() {
        let manifest = NpmManifest::new();
        let updated = manifest
            .write_version(
                Path::new("package.json"),
                r#"{"name":"app","version":"0.1.0"}"#,
                "0.2.0",
            )
            .unwrap();
        assert_eq!(
            updated,
            "{\n  \"name\": \"app\",\n  \"version\": \"0.2.0\"\n}\n"
        );
    }

    #[test]
    fn test_npm_manifest_write_version_keeps_position_and_fields() {
        let manifest = NpmManifest::new();
        let content = r#"{
    "version": "1.0.0",
    "name": "app",
    "scripts": { "build": "ng build" },
    "dependencies": { "@angular/core": "^17.0.0" }
}"#;
        let updated = manifest
            .write_version(Path::new("package.json"), content, "1.1.0")
            .unwrap();
        assert_eq!(
            updated,
            r#"{
  "version": "1.1.0",
  "name": "app",
  "scripts": {
    "build": "ng build"
  },
  "dependencies": {
    "@angular/core": "^17.0.0"
  }
}
"#
        );
    }

    #[test]
    fn test_npm_manifest_write_version_adds_missing_field() {
        let manifest = NpmManifest::new();
        let updated = manifest
            .write_version(Path::new("package.json"), r#"{"name":"app"}"#, "1.0.0")
            .unwrap();
        assert_eq!(
            updated,
            "{\n  \"name\": \"app\",\n  \"version\": \"1.0.0\"\n}\n"
        );
    }
}
