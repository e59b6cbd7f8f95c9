use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormCheckError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Capture Validation Error: {0}")]
    Validation(String),

    #[error("Unknown activity '{0}' (expected 'running' or a gym exercise such as 'squat')")]
    UnknownActivity(String),
}

pub type FcResult<T> = Result<T, FormCheckError>;
