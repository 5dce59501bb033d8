use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("content unavailable for {path}: {reason}")]
    ContentUnavailable { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
