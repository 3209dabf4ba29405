use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Working directory error: {0}")]
    WorkDirError(String),

    #[error("Interpreter not found: {0}")]
    InterpreterNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
