use serde::Serialize;

/// Result of a successful rewrite: what the manifest declared before, and what it declares now.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BumpOutcome {
    /// `None` when the manifest declared no version
    pub old_version: Option<String>,
    pub new_version: String,
}

impl BumpOutcome {
    #[must_use]
    pub fn new(old_version: Option<String>, new_version: String) -> Self {
        Self {
            old_version,
            new_version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("0.1.0"), r#"{"oldVersion":"0.1.0","newVersion":"0.2.0"}"#)]
    #[case(None, r#"{"oldVersion":null,"newVersion":"0.2.0"}"#)]
    fn test_bump_outcome_serialize(#[case] old: Option<&str>, #[case] expected: &str) {
        let outcome = BumpOutcome::new(old.map(String::from), "0.2.0".to_string());
        assert_eq!(serde_json::to_string(&outcome).unwrap(), expected);
    }
}
