use regex::{NoExpand, Regex};
use std::sync::LazyLock;

static POM_VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<version>(.*?)</version>").expect("hardcoded regex must compile")
});

/// Find the first `<version>` value in pom.xml content
#[must_use]
pub fn find_version_in_pom(content: &str) -> Option<&str> {
    POM_VERSION_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Update the first `<version>` element in pom.xml content
///
/// Returns `None` when the content has no `<version>` element.
#[must_use]
pub fn update_version_in_pom(content: &str, new_version: &str) -> Option<String> {
    if !POM_VERSION_PATTERN.is_match(content) {
        return None;
    }
    let replacement = format!("<version>{new_version}</version>");
    Some(
        POM_VERSION_PATTERN
            .replace(content, NoExpand(&replacement))
            .to_string(),
    )
}
