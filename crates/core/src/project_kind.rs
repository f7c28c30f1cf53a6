use colored::Colorize;
use std::{fmt::Display, str::FromStr};

use crate::BumpError;

/// Project ecosystems whose manifest version can be rewritten.
///
/// The string forms (`quarkus`, `angular`) are the values accepted for the `app` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectKind {
    /// Maven build, version declared in `pom.xml`
    Quarkus,
    /// npm build, version declared in `package.json`
    Angular,
}

impl ProjectKind {
    pub const ALL: [Self; 2] = [Self::Quarkus, Self::Angular];

    /// Returns the input value naming this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quarkus => "quarkus",
            Self::Angular => "angular",
        }
    }

    /// Returns the manifest file name that declares the project version
    #[must_use]
    pub const fn manifest_file(&self) -> &'static str {
        match self {
            Self::Quarkus => "pom.xml",
            Self::Angular => "package.json",
        }
    }
}

impl FromStr for ProjectKind {
    type Err = BumpError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| {
                BumpError::InvalidInput(format!(
                    "Invalid app: {value}. At this point, only 'quarkus' and 'angular' are supported."
                ))
            })
    }
}

impl Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Quarkus => "Quarkus".red().bold(),
                Self::Angular => "Angular".magenta().bold(),
            }
        )
    }
}
