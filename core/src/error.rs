use thiserror::Error;

/// Curvecipher error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),

    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),

    #[error("Invalid curve point: {0}")]
    InvalidPoint(String),

    #[error("Key import failed: expected {expected} bytes of key material, got {actual}")]
    KeyImport { expected: usize, actual: usize },

    #[error("Encryption failed")]
    Encryption,

    #[error("Authentication failed")]
    Authentication,

    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Error::RandomSourceUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
