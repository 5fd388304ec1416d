use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read '{source_name}': {source}")]
    ReadError {
        source_name: String,
        source: std::io::Error,
    },

    #[error("failed to parse {format} from '{source_name}': {message}")]
    ParseError {
        source_name: String,
        format: String,
        message: String,
    },
}

impl DocumentError {
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(source_name: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            source_name: source_name.into(),
            source,
        }
    }

    pub fn parse_error(
        source_name: impl Into<String>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            source_name: source_name.into(),
            format: format.into(),
            message: message.into(),
        }
    }
}
