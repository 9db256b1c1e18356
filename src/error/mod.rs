use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type ToastResult<T> = std::result::Result<T, ToastError>;

#[derive(Debug, Error)]
pub enum ToastError {
    #[error("toast container is not present on the surface")]
    MissingContainer,
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read toast config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse toast config")]
    ParseConfig(#[from] serde_json::Error),
}
