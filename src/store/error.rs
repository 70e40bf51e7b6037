use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Data file not found")]
    NotFound,
    #[error("Invalid JSON in data file '{}': {}", path.display(), source)]
    StorageCorrupt { path: PathBuf, source: serde_json::Error },
    #[error("Failed to read data file '{}': {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write data to file '{}': {}", path.display(), source)]
    PersistFailure { path: PathBuf, source: io::Error },
    #[error("Failed to serialize records: {0}")]
    Serialize(serde_json::Error),
    #[error(transparent)]
    Join(#[from] JoinError),
}
