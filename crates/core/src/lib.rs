pub mod bump_config;
pub mod bump_outcome;
pub mod error;
pub mod manifest_strategy;
pub mod project_kind;

// Re-export for convenience
pub use bump_config::BumpConfig;
pub use bump_outcome::BumpOutcome;
pub use error::{BumpError, Result};
pub use manifest_strategy::ManifestStrategy;
pub use project_kind::ProjectKind;
