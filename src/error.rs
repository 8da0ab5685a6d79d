use std::path::PathBuf;
use thiserror::Error;

/// Main error type for copyedit
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid rule: {message}")]
    InvalidRule { message: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl RewriteError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new invalid rule error
    pub fn invalid_rule(message: impl Into<String>) -> Self {
        Self::InvalidRule {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new syntax error at a 1-based line
    pub fn syntax_error(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RewriteError {
    fn from(error: serde_json::Error) -> Self {
        RewriteError::parse_error(error.to_string())
    }
}

impl From<serde_yaml::Error> for RewriteError {
    fn from(error: serde_yaml::Error) -> Self {
        RewriteError::parse_error(error.to_string())
    }
}

impl From<toml::de::Error> for RewriteError {
    fn from(error: toml::de::Error) -> Self {
        RewriteError::parse_error(error.to_string())
    }
}

/// Result type alias using RewriteError
pub type RewriteResult<T> = Result<T, RewriteError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> RewriteError {
    let path = path.into();
    move |err| RewriteError::io_error(err, path)
}
