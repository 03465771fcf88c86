//! Error types for macl-cli

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for macl-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in macl-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the ACL parser, serializer or document API
    #[error(transparent)]
    Acl(#[from] macl_core::Error),

    /// The ACL file does not exist
    #[error("ACL file not found: {}", .0.display())]
    AclFileNotFound(PathBuf),

    /// No ACL file was given on the command line, environment or config
    #[error("No ACL file given: pass --acl-file, set MACL_ACL_FILE, or set acl_file in the config file")]
    NoAclFile,

    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON rendering error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config(message.into())
    }
}
