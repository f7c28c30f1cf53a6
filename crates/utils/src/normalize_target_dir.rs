use std::path::PathBuf;

/// Turns the raw `path` input into the directory that holds the manifest.
///
/// Empty input means the current directory. A single trailing separator is dropped so that
/// joining the manifest file name never doubles it.
#[must_use]
pub fn normalize_target_dir(path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::from(".");
    }
    let trimmed = path
        .strip_suffix('/')
        .or_else(|| path.strip_suffix('\\'))
        .unwrap_or(path);
    if trimmed.is_empty() {
        // "/" alone is the filesystem root
        return PathBuf::from(path);
    }
    PathBuf::from(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", ".")]
    #[case(".", ".")]
    #[case("app", "app")]
    #[case("app/", "app")]
    #[case("apps/web/", "apps/web")]
    #[case("apps/web//", "apps/web/")]
    #[case("/", "/")]
    #[case("app\\", "app")]
    fn test_normalize_target_dir(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_target_dir(input), PathBuf::from(expected));
    }

    #[test]
    fn test_normalize_target_dir_join_has_single_separator() {
        let manifest = normalize_target_dir("frontend/").join("package.json");
        assert_eq!(manifest.to_string_lossy(), "frontend/package.json");
    }
}
