use thiserror::Error;

/// Top-level error type for the CropCast workspace.
///
/// Each variant wraps a subsystem-specific failure. Crates implement
/// `From<SubsystemError> for CropcastError` where needed so that the `?`
/// operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CropcastError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversation error: {0}")]
    Conversation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CropcastError {
    fn from(err: toml::de::Error) -> Self {
        CropcastError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CropcastError {
    fn from(err: toml::ser::Error) -> Self {
        CropcastError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CropcastError {
    fn from(err: serde_json::Error) -> Self {
        CropcastError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for CropCast operations.
pub type Result<T> = std::result::Result<T, CropcastError>;
