//! Error types for macl-core.

use std::fmt;

use thiserror::Error;

/// Result type alias for macl-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a line of an ACL file could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedKind {
    /// A `topic` line appeared before any `user` line.
    PermissionBeforeUser,
    /// The line starts with a keyword the format does not know.
    UnknownDirective(String),
    /// A `user` line without a username.
    MissingUsername,
    /// A `topic` line without a topic pattern.
    MissingTopic,
    /// A `topic` qualifier this crate cannot represent, such as `deny`.
    UnsupportedQualifier(String),
}

impl fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedKind::PermissionBeforeUser => {
                f.write_str("topic permission declared before any user")
            }
            MalformedKind::UnknownDirective(keyword) => {
                write!(f, "unknown directive '{keyword}'")
            }
            MalformedKind::MissingUsername => f.write_str("user directive without a username"),
            MalformedKind::MissingTopic => f.write_str("topic directive without a topic pattern"),
            MalformedKind::UnsupportedQualifier(qualifier) => {
                write!(f, "unsupported topic qualifier '{qualifier}'")
            }
        }
    }
}

/// Errors that can occur in macl-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Structural violation found while parsing ACL text.
    #[error("Malformed ACL at line {line}: {kind}")]
    Malformed {
        /// 1-based line number of the offending line
        line: usize,
        /// What was wrong with it
        kind: MalformedKind,
    },

    /// The user is already declared.
    #[error("User already exists: {username}")]
    UserExists {
        /// Username that was already present
        username: String,
    },

    /// The user is not declared.
    #[error("User not found: {username}")]
    UserNotFound {
        /// Username that was looked up
        username: String,
    },

    /// A grant with neither read nor write cannot be written as a `topic` line.
    #[error("Grant on '{topic}' for user '{username}' has no read or write capability")]
    UnrepresentableGrant {
        /// Owner of the grant
        username: String,
        /// Topic pattern of the grant
        topic: String,
    },

    /// A username or topic that would not read back as the same value.
    #[error("Cannot write {field} {value:?} to an ACL file: it {reason}")]
    UnrepresentableText {
        /// `"username"` or `"topic"`
        field: &'static str,
        /// The offending value
        value: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl Error {
    /// Creates a parse error for the given 1-based line.
    pub fn malformed(line: usize, kind: MalformedKind) -> Self {
        Error::Malformed { line, kind }
    }

    /// Creates a [`Error::UserExists`] error.
    pub fn user_exists(username: impl Into<String>) -> Self {
        Error::UserExists {
            username: username.into(),
        }
    }

    /// Creates a [`Error::UserNotFound`] error.
    pub fn user_not_found(username: impl Into<String>) -> Self {
        Error::UserNotFound {
            username: username.into(),
        }
    }

    /// Returns the parse failure kind, if this is a parse error.
    pub fn malformed_kind(&self) -> Option<&MalformedKind> {
        match self {
            Error::Malformed { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Returns whether this error is retryable.
    ///
    /// Every macl error is a deterministic function of its input, so retrying
    /// the same call never helps.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Malformed { .. } => false,
            Error::UserExists { .. } => false,
            Error::UserNotFound { .. } => false,
            Error::UnrepresentableGrant { .. } => false,
            Error::UnrepresentableText { .. } => false,
        }
    }
}
