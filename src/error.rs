use std::path::PathBuf;

/// Errors raised by the game engine. All of them are recoverable: invalid
/// columns fall back to a random move and rotation anomalies skip the
/// rotation for that cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,

    #[error("rotated board has shape {actual:?}, expected {expected:?}")]
    RotationShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("rotation changed the piece count from {before} to {after}")]
    RotationPieceCount { before: usize, after: usize },
}

/// Errors returned by move providers. The coordinator treats every one of
/// them as "no usable suggestion" and picks a random valid column.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("missing API key: set {var} or add `export {var}=...` to {dotenv}")]
    MissingApiKey { var: String, dotenv: PathBuf },

    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Malformed(err.to_string())
        } else {
            ProviderError::Http(err.to_string())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
