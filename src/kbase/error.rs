use thiserror::Error;

#[derive(Error, Debug)]
pub enum KbError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("No entry '{id}' in section '{section}'")]
    EntryNotFound { section: String, id: String },

    #[error("{0}")]
    Validation(String),

    #[error("Knowledge base unavailable: {0}")]
    DataUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, KbError>;
