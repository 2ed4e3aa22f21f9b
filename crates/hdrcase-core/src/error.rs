use thiserror::Error;

pub type Result<T> = std::result::Result<T, HdrError>;

#[derive(Debug, Error)]
pub enum HdrError {
    #[error("unknown mode: {0} (expected lowercase or canonical)")]
    UnknownMode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
