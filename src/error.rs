use std::path::PathBuf;

/// Errors that can occur while running a match.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("starting pile must be at least 1")]
    InvalidStartingPile,
}

/// Errors that can occur in the learned-moves store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read moves file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed bucket on line {line} of {path}: {content:?}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("failed to write moves file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
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
