use std::path::{Path, PathBuf};

use crate::{BumpError, ProjectKind, Result};

/// Everything one rewrite needs, built once per invocation from the caller's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpConfig {
    kind: ProjectKind,
    strict: bool,
    new_version: String,
    target_dir: PathBuf,
}

impl BumpConfig {
    /// # Errors
    /// Returns `BumpError::InvalidInput` if `new_version` is empty.
    pub fn new(
        kind: ProjectKind,
        strict: bool,
        new_version: impl Into<String>,
        target_dir: impl Into<PathBuf>,
    ) -> Result<Self> {
        let new_version = new_version.into();
        if new_version.is_empty() {
            return Err(BumpError::invalid_input(
                "Input required and not supplied: new-version",
            ));
        }
        Ok(Self {
            kind,
            strict,
            new_version,
            target_dir: target_dir.into(),
        })
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    /// Whether an absent old version fails the run
    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn new_version(&self) -> &str {
        &self.new_version
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_config_new() {
        let config = BumpConfig::new(ProjectKind::Quarkus, true, "1.3.0", "service").unwrap();
        assert_eq!(config.kind(), ProjectKind::Quarkus);
        assert!(config.strict());
        assert_eq!(config.new_version(), "1.3.0");
        assert_eq!(config.target_dir(), Path::new("service"));
    }

    #[test]
    fn test_bump_config_rejects_empty_version() {
        let err = BumpConfig::new(ProjectKind::Angular, false, "", ".").unwrap_err();
        assert!(matches!(err, BumpError::InvalidInput(_)));
        assert!(err.to_string().contains("new-version"));
    }
}
