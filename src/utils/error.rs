use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NudgeError {
    #[error("{tool} not found on PATH")]
    ToolNotFound { tool: String },

    #[error("{tool} exited with status {status}")]
    ToolFailed { tool: String, status: i32 },

    #[error("Expected output file missing: {}", .path.display())]
    MissingOutput { path: PathBuf },

    #[error("No GRIB input files found in {}", .dir.display())]
    NoInputFiles { dir: PathBuf },

    #[error("Download failed: {0}")]
    DownloadError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Unreadable glob entry: {0}")]
    GlobError(#[from] glob::GlobError),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, NudgeError>;
