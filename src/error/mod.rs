mod config;
mod io;

pub use config::ConfigError;
pub use io::IoError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("transformer '{name}' failed on {path}: {message}")]
    Transform {
        name: String,
        path: std::path::PathBuf,
        message: String,
    },
}

impl Error {
    /// True when the run stopped because a configured root is absent or is
    /// not a directory.
    pub fn is_root_error(&self) -> bool {
        matches!(
            self,
            Error::Io(IoError::DirectoryNotFound { .. } | IoError::NotADirectory { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
