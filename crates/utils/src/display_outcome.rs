use colored::Colorize;
use versionbump_core::{BumpOutcome, ProjectKind};

use crate::display_version;

/// One-line coloured summary of a rewrite, e.g. `Angular package.json 0.1.0 → 0.2.0`.
#[must_use]
pub fn display_outcome(kind: ProjectKind, outcome: &BumpOutcome) -> String {
    format!(
        "{} {} {} → {}",
        kind,
        kind.manifest_file().bright_black(),
        display_version(outcome.old_version.as_deref()).yellow(),
        outcome.new_version.green().bold(),
    )
}
