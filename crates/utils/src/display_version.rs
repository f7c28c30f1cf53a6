/// Renders an optional version for log lines, `null` when absent.
#[must_use]
pub fn display_version(version: Option<&str>) -> &str {
    version.unwrap_or("null")
}
