/// Application error types
///
/// Infrastructure failures (files, settings database, config, logging).
/// Failures of the detection call itself live in `api::DetectError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Could not determine the user {kind} directory")]
    NoDirectory { kind: &'static str },

    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl Error {
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("/tmp/config.toml", "expected a table");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/config.toml: expected a table"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(Error::Io(_))));
    }
}
