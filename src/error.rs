use thiserror::Error;

/// Errors raised while loading, validating or rendering page content.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("JSON content error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML content error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ContentError {
    pub fn validation(message: impl Into<String>) -> Self {
        ContentError::Validation {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ContentError::Config {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
