use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("No acceptable Python runtime found (need >= {major}.{minor})")]
    NoAcceptableRuntime { major: u32, minor: u32 },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error("Registration with control plane failed: {reason}")]
    RegistrationFailure { reason: String },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Stage '{stage}' failed: {source}")]
    StageFailed {
        stage: &'static str,
        #[source]
        source: Box<SetupError>,
    },

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SetupError>;
