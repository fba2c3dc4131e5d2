use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrifoldError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid width: {0}. Must be between 2 and 10")]
    InvalidWidth(usize),

    #[error("No input text: pass TEXT or --input <file>")]
    InputRequired,
}

pub type Result<T> = std::result::Result<T, TrifoldError>;
