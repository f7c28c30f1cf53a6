use std::path::PathBuf;

use thiserror::Error;

use crate::ProjectKind;

/// Every way a version rewrite can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum BumpError {
    /// Unknown project kind, or a required input is missing or empty
    #[error("{0}")]
    InvalidInput(String),

    /// The manifest does not exist; `entries` lists what the target directory holds instead
    #[error("File not found: {}", path.display())]
    ManifestNotFound { path: PathBuf, entries: Vec<String> },

    #[error("Version not found in: {}", path.display())]
    VersionNotFound { path: PathBuf },

    /// Strict mode was requested and the manifest declared no version
    #[error("Version not found in {} project.", kind.as_str())]
    StrictVersionNotFound { kind: ProjectKind },

    #[error("Failed to parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render {}: {source}", path.display())]
    RenderError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
