use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum InitError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, InitError>;
