use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoachError {
    #[error("invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("unknown preference '{0}'")]
    UnknownPreference(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoachResult<T> = Result<T, CoachError>;
