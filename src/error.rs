use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("Missing measurements filename")]
    MissingFilename,

    #[error("Open: {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Stat: {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid file size: {size}")]
    InvalidSize { size: u64 },

    #[error("Mmap: {}: {source}", .path.display())]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("chunk size is zero due to size={size} and nChunks={chunks}")]
    ChunkSize { size: usize, chunks: usize },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
