//! Error types for the registra correspondence engine.

use thiserror::Error;

/// Result type alias using registra's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for registra operations.
///
/// The matrix/tree builders themselves are total functions and never
/// return an error; these variants cover the configuration surface and
/// snapshot (de)serialization at the crate boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
