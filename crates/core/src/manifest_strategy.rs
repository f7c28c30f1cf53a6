use std::path::{Path, PathBuf};

use crate::{ProjectKind, Result};

/// Per-ecosystem rules for finding, reading and rewriting the version in a manifest.
///
/// Each project kind implements this trait once. Strategies only transform text; the caller owns
/// reading the manifest from disk and writing the result back. Only the first version declaration
/// in a manifest is read or replaced.
pub trait ManifestStrategy: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> ProjectKind;

    fn manifest_file(&self) -> &'static str {
        self.kind().manifest_file()
    }

    /// Path of the manifest inside `target_dir`
    fn locate_manifest(&self, target_dir: &Path) -> PathBuf {
        target_dir.join(self.manifest_file())
    }

    /// Reads the currently declared version. `Ok(None)` means the manifest declares none.
    ///
    /// # Errors
    /// Returns error if the manifest cannot be parsed, or if this kind requires a version to be present.
    fn extract_version(&self, path: &Path, content: &str) -> Result<Option<String>>;

    /// Returns `content` with the version set to `new_version`.
    ///
    /// # Errors
    /// Returns error if the manifest cannot be parsed or has no place for a version.
    fn write_version(&self, path: &Path, content: &str, new_version: &str) -> Result<String>;
}
