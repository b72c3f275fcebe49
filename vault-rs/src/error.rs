use thiserror::Error;

#[derive(Error, Debug)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive not found: {0}")]
    ArchiveNotFound(String),

    #[error("Permission denied to access {0}")]
    PermissionDenied(String),

    #[error("Unexpected error reading archive {0}: {1}")]
    ArchiveRead(String, String),

    #[error("Invalid date, use DD.MM.YYYY format: {0}")]
    InvalidDate(String),

    #[error("Both start date and end date must be provided together")]
    PartialDateRange,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, VaultError>;
