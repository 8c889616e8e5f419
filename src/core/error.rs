use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Unable to classify unit category: {category}")]
    Unclassifiable { category: String },

    #[error("Unit details do not match movement mode {mode:?}")]
    CategoryMismatch { mode: crate::core::types::MovementMode },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Options parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
