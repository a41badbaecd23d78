use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid formation: {0}")]
    InvalidFormation(String),
}

impl From<serde_json::Error> for TeamError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            TeamError::Deserialization(err.to_string())
        } else {
            TeamError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, TeamError>;
