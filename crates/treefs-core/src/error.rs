//! Error types for namespace operations.

use compact_str::CompactString;
use thiserror::Error;

/// Errors that can occur while resolving or mutating the namespace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    /// The path was empty.
    #[error("Path is empty")]
    EmptyPath,

    /// A path segment does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: String },

    /// The path names a file where a directory is required.
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    /// A sibling with the same name already exists.
    #[error("Already exists: {path}")]
    AlreadyExists { path: String },

    /// A name cannot be used for a new node.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        name: CompactString,
        reason: &'static str,
    },

    /// Creating the node would exceed the configured depth limit.
    #[error("Maximum depth {max_depth} exceeded at {path}")]
    DepthExceeded { path: String, max_depth: u32 },
}

impl NamespaceError {
    /// Create a not-found error for a path.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a not-a-directory error for a path.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    /// Create an invalid-name error.
    pub fn invalid_name(name: impl Into<CompactString>, reason: &'static str) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = NamespaceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(NamespaceError::EmptyPath.to_string(), "Path is empty");
        assert_eq!(
            NamespaceError::not_found("/missing").to_string(),
            "Path not found: /missing"
        );

        let err = NamespaceError::invalid_name("*", "wildcard is reserved");
        assert!(err.to_string().contains("wildcard is reserved"));
    }

    #[test]
    fn test_error_constructors() {
        let err = NamespaceError::not_a_directory("/f.txt");
        assert!(matches!(err, NamespaceError::NotADirectory { ref path } if path == "/f.txt"));
    }
}
