use tokio::fs::{read_to_string, try_exists, write};
use tracing::{debug, info, warn};
use versionbump_core::{BumpConfig, BumpError, BumpOutcome, ManifestStrategy, Result};
use versionbump_utils::{display_version, list_dir_entries};

use crate::strategies::get_strategy;

/// Rewrite the manifest version for the configured project kind
///
/// # Errors
/// Returns error if the manifest is missing, unreadable or has no usable version.
pub async fn rewrite(config: &BumpConfig) -> Result<BumpOutcome> {
    let strategy = get_strategy(config.kind());
    rewrite_with(strategy.as_ref(), config).await
}

/// Read the manifest once, swap in the new version and write it back once.
///
/// Nothing is written when any step before the write fails, including the strict-mode check.
///
/// # Errors
/// Returns error if the manifest is missing, unreadable or has no usable version.
pub async fn rewrite_with(
    strategy: &dyn ManifestStrategy,
    config: &BumpConfig,
) -> Result<BumpOutcome> {
    let path = strategy.locate_manifest(config.target_dir());
    debug!(path = %path.display(), kind = config.kind().as_str(), "locating manifest");

    if !matches!(try_exists(&path).await, Ok(true)) {
        let entries = match list_dir_entries(config.target_dir()).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %config.target_dir().display(), "cannot list directory: {e}");
                Vec::new()
            }
        };
        return Err(BumpError::ManifestNotFound { path, entries });
    }

    let content = read_to_string(&path)
        .await
        .map_err(|e| BumpError::io(path.clone(), e))?;
    let old_version = strategy.extract_version(&path, &content)?;
    debug!(old_version = display_version(old_version.as_deref()), "extracted version");

    // strict mode fails ahead of the write instead of after it, so the manifest stays untouched
    if config.strict() && old_version.is_none() {
        return Err(BumpError::StrictVersionNotFound {
            kind: config.kind(),
        });
    }

    let updated = strategy.write_version(&path, &content, config.new_version())?;
    write(&path, updated)
        .await
        .map_err(|e| BumpError::io(path.clone(), e))?;
    info!(path = %path.display(), new_version = config.new_version(), "manifest rewritten");

    Ok(BumpOutcome::new(
        old_version,
        config.new_version().to_string(),
    ))
}
