use anyhow::Result;
use tracing::debug;
use versionbump_core::{BumpConfig, BumpError, BumpOutcome, ProjectKind};
use versionbump_utils::{display_outcome, display_version, normalize_target_dir};

use crate::{host::Host, options::FormatOptions, rewrite::rewrite};

/// How a run ended; failures have already been reported through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
}

fn required_input(host: &dyn Host, name: &str) -> Result<String, BumpError> {
    let value = host.get_input(name);
    if value.is_empty() {
        return Err(BumpError::invalid_input(format!(
            "Input required and not supplied: {name}"
        )));
    }
    Ok(value)
}

/// Build the rewrite configuration from host inputs
///
/// # Errors
/// Returns `BumpError::InvalidInput` if `app` is missing or unknown, or `new-version` is missing.
pub fn read_config(host: &dyn Host) -> Result<BumpConfig, BumpError> {
    let kind: ProjectKind = required_input(host, "app")?.parse()?;
    let strict = host.get_input("error-on-unknown") == "true";
    let new_version = required_input(host, "new-version")?;
    let target_dir = normalize_target_dir(&host.get_input("path"));
    BumpConfig::new(kind, strict, new_version, target_dir)
}

async fn bump(host: &dyn Host, format: Option<FormatOptions>) -> Result<BumpOutcome> {
    let config = read_config(host)?;
    debug!(?config, "resolved inputs");

    let outcome = rewrite(&config).await.inspect_err(|e| {
        if let BumpError::ManifestNotFound { entries, .. } = e {
            host.log_error(&format!(
                "Files in {}: {}",
                config.target_dir().display(),
                entries.join("\n")
            ));
        }
    })?;

    host.set_output("oldVersion", outcome.old_version.as_deref())?;
    host.set_output("newVersion", Some(outcome.new_version.as_str()))?;
    host.log_info(&format!(
        "Version bumped from {} to {}.",
        display_version(outcome.old_version.as_deref()),
        outcome.new_version
    ));

    if let Some(format) = format {
        format.print(
            &display_outcome(config.kind(), &outcome),
            &serde_json::to_string_pretty(&outcome)?,
        );
    }
    Ok(outcome)
}

fn is_strict_failure(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<BumpError>(),
        Some(BumpError::StrictVersionNotFound { .. })
    )
}

fn failure_message(error: &anyhow::Error) -> String {
    if is_strict_failure(error) {
        error.to_string()
    } else {
        format!("Failed get version: {error}")
    }
}

/// Run one version bump against the host, reporting any failure through it
pub async fn run(host: &dyn Host, format: Option<FormatOptions>) -> RunStatus {
    match bump(host, format).await {
        Ok(_) => RunStatus::Succeeded,
        Err(e) => {
            // the legacy output is reset for errors only, a strict-mode miss leaves it unset
            if !is_strict_failure(&e)
                && let Err(output_error) = host.set_output("version", None)
            {
                debug!("cannot reset version output: {output_error}");
            }
            host.report_failure(&failure_message(&e));
            RunStatus::Failed
        }
    }
}
