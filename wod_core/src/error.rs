//! Error types for the wod_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wod_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Level is not one of beginner, intermediate, advanced
    #[error("invalid level: {0}, choose between [beginner, intermediate, advanced]")]
    InvalidLevel(String),

    /// Duration outside the accepted window
    #[error("duration_min must be between 15 and 120 (got {0})")]
    InvalidDuration(u32),

    /// Generation attempted against a catalog without moves
    #[error("empty catalog")]
    EmptyCatalog,

    /// Equipment filtering and the no-equipment fallback both came up empty
    #[error("no moves available")]
    NoUsableMoves,

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),
}

impl Error {
    /// True for the input validation failures raised by the generator.
    ///
    /// These are deterministic and never worth retrying.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidLevel(_)
                | Error::InvalidDuration(_)
                | Error::EmptyCatalog
                | Error::NoUsableMoves
        )
    }
}
