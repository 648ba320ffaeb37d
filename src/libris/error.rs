use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibrisError {
    #[error("Record is missing field: {0}")]
    MissingField(&'static str),

    #[error("Record field has an invalid value: {0}")]
    InvalidField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LibrisError>;
