//! Unified error type for client operations
//!
//! A single error enum covers every failure the action layer can observe
//! from the backend SDK. Resolver-level "failures" (missing permission,
//! stale id) are not errors at all — they degrade to omitted menu entries.

use serde::{Deserialize, Serialize};

/// Unified error type for all backend-facing operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ClientError {
    /// Invalid input or request
    #[error("Invalid operation: {message}")]
    Invalid {
        /// Description of the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Description of what was not found
        message: String,
    },

    /// The backend rejected the operation for lack of permission
    #[error("Missing permission: {message}")]
    PermissionDenied {
        /// Description of the denied capability
        message: String,
    },

    /// Network or transport failure
    #[error("Network error: {message}")]
    Network {
        /// Description of the network issue
        message: String,
    },

    /// Internal client or backend error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl ClientError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::PermissionDenied {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Standard Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category_and_message() {
        let err = ClientError::not_found("channel 01ABC");
        assert_eq!(err.to_string(), "Not found: channel 01ABC");
        let err = ClientError::permission_denied("BanMembers");
        assert_eq!(err.to_string(), "Missing permission: BanMembers");
    }
}
