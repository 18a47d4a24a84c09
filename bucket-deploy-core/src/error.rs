//! Error taxonomy for a deploy run.
//!
//! Every variant is terminal: the run stops at the first error and nothing is retried.

use std::fmt;
use std::path::PathBuf;

/// Boxed error returned by [`crate::contract::ObjectStore`] implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug)]
pub enum DeployError {
    /// The target bucket is not among the buckets visible to the credentials.
    Configuration(String),
    /// The source directory (or one of its entries) could not be read.
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A storage call (list, upload or delete) failed.
    Transfer {
        operation: &'static str,
        key: Option<String>,
        source: BoxError,
    },
}

impl DeployError {
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DeployError::Filesystem {
            path: path.into(),
            source,
        }
    }

    pub fn transfer(operation: &'static str, key: Option<&str>, source: BoxError) -> Self {
        DeployError::Transfer {
            operation,
            key: key.map(str::to_owned),
            source,
        }
    }
}

impl fmt::Display for DeployError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            DeployError::Filesystem { path, source } => {
                write!(f, "filesystem error at {}: {source}", path.display())
            }
            DeployError::Transfer {
                operation,
                key: Some(key),
                source,
            } => write!(f, "{operation} failed for {key}: {source}"),
            DeployError::Transfer {
                operation,
                key: None,
                source,
            } => write!(f, "{operation} failed: {source}"),
        }
    }
}

impl std::error::Error for DeployError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeployError::Configuration(_) => None,
            DeployError::Filesystem { source, .. } => Some(source),
            DeployError::Transfer { source, .. } => Some(source.as_ref()),
        }
    }
}
