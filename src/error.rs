use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgrmError {
    /// A selection pattern did not compile
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),

    /// A removal target is not present on the system
    #[error("Package '{0}' is not installed")]
    NotInstalled(String),

    #[error("Package backend error: {0}")]
    PackageManagerError(String),

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PkgrmError>;
